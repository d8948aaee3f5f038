//! Fire-once viewport observation over `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

use crate::error::{JsResultExt, UiError};
use crate::util::one_shot::OneShotSet;

/// Call `on_visible` once for each element the first time it intersects the
/// viewport at `threshold`, then stop observing it.
pub fn observe_once<F>(elements: Vec<Element>, threshold: f64, mut on_visible: F) -> Result<(), UiError>
where
    F: FnMut(&Element) + 'static,
{
    let targets = Rc::new(elements);
    let pending = Rc::new(RefCell::new(OneShotSet::new()));
    for index in 0..targets.len() {
        pending.borrow_mut().subscribe(index);
    }

    let targets_cb = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let target_node: &Node = &target;
                let Some(index) = targets_cb.iter().position(|el| el.is_same_node(Some(target_node))) else {
                    continue;
                };
                if pending.borrow_mut().fire(&index) {
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .context("new IntersectionObserver")?;
    for el in targets.iter() {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}
