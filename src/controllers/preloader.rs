//! Hides `#preloader` shortly after the page has fully loaded.

use std::time::Duration;

use web_sys::{Document, Element, Window};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::util::dom;

pub fn install(window: &Window, doc: &Document, config: &SiteConfig) -> Result<(), UiError> {
    let preloader = dom::by_id(doc, "preloader")?;
    let delay = Duration::from_millis(u64::from(config.preloader_delay_ms));

    // The module can start after `load` has already fired.
    if doc.ready_state() == "complete" {
        hide_after(preloader, delay);
        return Ok(());
    }

    let mut pending = Some(preloader);
    dom::listen(window, "load", move |_| {
        if let Some(el) = pending.take() {
            hide_after(el, delay);
        }
    })
}

fn hide_after(el: Element, delay: Duration) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        dom::set_class(&el, "hidden", true);
    });
}
