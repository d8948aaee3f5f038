//! Client-side gate in front of the contact form's native submission.
//!
//! A valid form is left alone so the browser posts it to the external form
//! service; an invalid one has its submit event cancelled.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement};

use crate::error::UiError;
use crate::state::form::{ContactSubmission, Field, ValidationReport};
use crate::util::dom;

pub fn install(doc: &Document) -> Result<(), UiError> {
    let form = dom::by_id(doc, "contact-form")?;
    let status = doc.get_element_by_id("form-status");
    let doc = doc.clone();

    dom::listen(&form, "submit", move |event: Event| {
        if let Some(status) = &status {
            status.set_text_content(Some(""));
            status.set_class_name("form-status");
        }

        let submission = ContactSubmission::new(
            field_value(&doc, Field::Name),
            field_value(&doc, Field::Email),
            field_value(&doc, Field::Message),
        );
        let report = submission.validate();
        render_field_errors(&doc, &report);

        if report.should_prevent_submit() {
            event.prevent_default();
            log::debug!("contact form blocked, failing fields: {:?}", report.failed());
        }
        if let Some(status) = &status {
            let outcome = report.status();
            status.set_text_content(Some(outcome.text()));
            dom::set_class(status, "error", outcome.is_error());
        }
    })
}

/// Current value of a field's input or textarea; missing fields read as empty.
fn field_value(doc: &Document, field: Field) -> String {
    let Some(el) = doc.get_element_by_id(field.id()) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn error_container(doc: &Document, field: Field) -> Option<Element> {
    dom::query_opt(doc, &format!(".error-message[data-for=\"{}\"]", field.id()))
}

fn render_field_errors(doc: &Document, report: &ValidationReport) {
    for field in Field::ALL {
        if let Some(el) = error_container(doc, field) {
            el.set_text_content(Some(report.message_for(field)));
        }
    }
}
