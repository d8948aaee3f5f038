//! Counts `.counter` elements up to their `data-target` once visible.

use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::error::UiError;
use crate::state::counter::{CounterAnimation, parse_target};
use crate::util::{dom, observer};

pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), UiError> {
    let counters = dom::query_all(doc, ".counter");
    if counters.is_empty() {
        return Err(UiError::missing(".counter"));
    }
    let frames = config.counter_frames;
    observer::observe_once(counters, config.counter_threshold, move |el| start(el.clone(), frames))
}

fn start(el: Element, frames: u32) {
    let raw = el.get_attribute("data-target").unwrap_or_default();
    let Some(target) = parse_target(&raw) else {
        log::debug!("counter skipped, data-target {raw:?} is not a number");
        return;
    };
    schedule(el, CounterAnimation::new(target, frames));
}

fn schedule(el: Element, anim: CounterAnimation) {
    let target = anim.target();
    if let Err(err) = dom::request_frame(move || tick(el, anim)) {
        log::warn!("counter to {target} stopped: {err}");
    }
}

fn tick(el: Element, mut anim: CounterAnimation) {
    let frame = anim.tick();
    el.set_text_content(Some(&frame.value.to_string()));
    if !frame.done {
        schedule(el, anim);
    }
}
