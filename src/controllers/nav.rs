//! Mobile hamburger menu.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::error::UiError;
use crate::state::nav::NavState;
use crate::util::dom;

pub fn install(doc: &Document) -> Result<(), UiError> {
    let toggle = dom::query(doc, ".nav-toggle")?;
    let menu = dom::query(doc, ".nav-links")?;
    let state = Rc::new(Cell::new(NavState::default()));

    {
        let state = Rc::clone(&state);
        let (toggle_el, menu) = (toggle.clone(), menu.clone());
        dom::listen(&toggle, "click", move |_| {
            let mut nav = state.get();
            nav.toggle();
            state.set(nav);
            render(&toggle_el, &menu, nav);
        })?;
    }

    // Following an in-page anchor should not leave the menu covering it.
    for link in dom::query_all(doc, ".nav-link") {
        let state = Rc::clone(&state);
        let (toggle, menu) = (toggle.clone(), menu.clone());
        dom::listen(&link, "click", move |_| {
            let mut nav = state.get();
            nav.close();
            state.set(nav);
            render(&toggle, &menu, nav);
        })?;
    }
    Ok(())
}

fn render(toggle: &Element, menu: &Element, nav: NavState) {
    dom::set_class(toggle, "active", nav.toggle_active);
    dom::set_class(menu, "open", nav.menu_open);
}
