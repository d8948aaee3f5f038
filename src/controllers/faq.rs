//! FAQ accordion over `.faq-item` / `.faq-question`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::error::UiError;
use crate::state::accordion::Accordion;
use crate::util::dom;

pub fn install(doc: &Document) -> Result<(), UiError> {
    let items = dom::query_all(doc, ".faq-item");
    if items.is_empty() {
        return Err(UiError::missing(".faq-item"));
    }

    let flags = items.iter().map(|item| dom::has_class(item, "open")).collect::<Vec<_>>();
    let accordion = Rc::new(RefCell::new(Accordion::from_open_flags(&flags)));
    let items = Rc::new(items);
    render(&items, &accordion.borrow());

    for (index, item) in items.iter().enumerate() {
        // Items without a question still close when another one opens.
        let Some(question) = dom::query_within(item, ".faq-question") else {
            continue;
        };
        let (items, accordion) = (Rc::clone(&items), Rc::clone(&accordion));
        dom::listen(&question, "click", move |_| {
            accordion.borrow_mut().click(index);
            render(&items, &accordion.borrow());
        })?;
    }
    Ok(())
}

fn render(items: &[Element], accordion: &Accordion) {
    for (index, item) in items.iter().enumerate() {
        dom::set_class(item, "open", accordion.is_open(index));
    }
}
