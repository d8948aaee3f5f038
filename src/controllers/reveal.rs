//! Adds `in-view` to `.reveal` elements the first time they scroll into view.

use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::util::{dom, observer};

pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), UiError> {
    let elements = dom::query_all(doc, ".reveal");
    if elements.is_empty() {
        return Err(UiError::missing(".reveal"));
    }
    observer::observe_once(elements, config.reveal_threshold, |el| {
        dom::set_class(el, "in-view", true);
    })
}
