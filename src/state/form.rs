//! Contact form validation.
//!
//! Validation runs synchronously inside the submit handler. It only decides
//! whether the browser's native submission may go ahead; delivery is up to the
//! external form service.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::OnceLock;

use regex::Regex;

/// Loose `something@something.something` shape, searched anywhere in the value.
fn email_shape() -> Option<&'static Regex> {
    static VALUE: OnceLock<Option<Regex>> = OnceLock::new();
    VALUE
        .get_or_init(|| match Regex::new(r"\S+@\S+\.\S+") {
            Ok(re) => Some(re),
            Err(err) => {
                log::error!("email pattern failed to compile: {err}");
                None
            }
        })
        .as_ref()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Input element id, also the `data-for` value of its error container.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn error_text(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name.",
            Self::Email => "Please enter a valid email.",
            Self::Message => "Please enter a message.",
        }
    }
}

#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    email_shape().is_some_and(|re| re.is_match(value))
}

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut failed = Vec::new();
        for field in Field::ALL {
            let value = self.value(field).trim();
            let ok = match field {
                Field::Name | Field::Message => !value.is_empty(),
                Field::Email => !value.is_empty() && is_plausible_email(value),
            };
            if !ok {
                failed.push(field);
            }
        }
        ValidationReport { failed }
    }
}

/// Status line shown under the form after a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    FixFields,
    Sending,
}

impl FormStatus {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::FixFields => "Please fix the highlighted fields.",
            Self::Sending => "Sending...",
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        self == Self::FixFields
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    failed: Vec<Field>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn failed(&self) -> &[Field] {
        &self.failed
    }

    /// Inline message for `field`; empty string clears the container.
    #[must_use]
    pub fn message_for(&self, field: Field) -> &'static str {
        if self.failed.contains(&field) { field.error_text() } else { "" }
    }

    /// Whether the native submit must be cancelled.
    #[must_use]
    pub fn should_prevent_submit(&self) -> bool {
        !self.is_valid()
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        if self.is_valid() { FormStatus::Sending } else { FormStatus::FixFields }
    }
}
