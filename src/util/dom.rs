//! Thin `web-sys` helpers shared by the controllers.
//!
//! Lookups that a controller cannot work without return
//! `UiError::MissingHook`; optional lookups return `Option`. JS exceptions are
//! converted to `UiError::Js` and logged rather than dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{JsResultExt, UiError};

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::missing("window"))
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::missing("document"))
}

/// First match for `selector`, if any. Invalid selectors log and yield `None`.
pub fn query_opt(doc: &Document, selector: &str) -> Option<Element> {
    match doc.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("{}", UiError::js("querySelector", &err));
            None
        }
    }
}

/// First match for a required hook.
pub fn query(doc: &Document, selector: &'static str) -> Result<Element, UiError> {
    query_opt(doc, selector).ok_or(UiError::missing(selector))
}

/// First match for `selector` inside `scope`.
pub fn query_within(scope: &Element, selector: &str) -> Option<Element> {
    match scope.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("{}", UiError::js("querySelector", &err));
            None
        }
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let list = match doc.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("{}", UiError::js("querySelectorAll", &err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// Required hook looked up by id.
pub fn by_id(doc: &Document, id: &'static str) -> Result<Element, UiError> {
    doc.get_element_by_id(id).ok_or(UiError::missing(id))
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    warn_on_err(el.class_list().toggle_with_force(class, on).context("classList.toggle"));
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .context("addEventListener")?;
    closure.forget();
    Ok(())
}

/// Run `f` on the next animation frame.
pub fn request_frame<F>(f: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(move |_ts: f64| f());
    window()?
        .request_animation_frame(callback.unchecked_ref())
        .context("requestAnimationFrame")?;
    Ok(())
}

/// Log a recoverable failure and carry on.
pub fn warn_on_err<T>(result: Result<T, UiError>) {
    if let Err(err) = result {
        log::warn!("{err}");
    }
}
