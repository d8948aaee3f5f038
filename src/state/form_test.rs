use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_pattern_compiles() {
    assert!(email_shape().is_some());
}

#[test]
fn plausible_email_accepts_common_shapes() {
    assert!(is_plausible_email("ada@example.com"));
    assert!(is_plausible_email("a.b+c@sub.example.co.uk"));
}

#[test]
fn plausible_email_is_deliberately_loose() {
    assert!(is_plausible_email("x@y.z"));
    assert!(is_plausible_email("a@@b..c"));
    assert!(is_plausible_email("contact me at ada@example.com please"));
}

#[test]
fn plausible_email_rejects_missing_parts() {
    assert!(!is_plausible_email("bad"));
    assert!(!is_plausible_email("ada@example"));
    assert!(!is_plausible_email("@example.com"));
    assert!(!is_plausible_email("ada@.com"));
    assert!(!is_plausible_email("ada@example."));
    assert!(!is_plausible_email("ada @example.com"));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn invalid_submission_is_blocked_with_messages() {
    let report = ContactSubmission::new("", "bad", "hi").validate();
    assert!(!report.is_valid());
    assert!(report.should_prevent_submit());
    assert_eq!(report.failed(), &[Field::Name, Field::Email]);
    assert_eq!(report.message_for(Field::Name), "Please enter your name.");
    assert_eq!(report.message_for(Field::Email), "Please enter a valid email.");
    assert_eq!(report.message_for(Field::Message), "");
    assert_eq!(report.status(), FormStatus::FixFields);
    assert_eq!(report.status().text(), "Please fix the highlighted fields.");
    assert!(report.status().is_error());
}

#[test]
fn all_empty_fields_set_three_inline_errors() {
    let report = ContactSubmission::default().validate();
    assert_eq!(report.failed(), &Field::ALL);
    for field in Field::ALL {
        assert_eq!(report.message_for(field), field.error_text());
    }
}

#[test]
fn valid_submission_clears_messages_and_sends() {
    let report = ContactSubmission::new("Ada", "ada@example.com", "Hello").validate();
    assert!(report.is_valid());
    assert!(!report.should_prevent_submit());
    for field in Field::ALL {
        assert_eq!(report.message_for(field), "");
    }
    assert_eq!(report.status(), FormStatus::Sending);
    assert_eq!(report.status().text(), "Sending...");
    assert!(!report.status().is_error());
}

#[test]
fn whitespace_only_values_count_as_empty() {
    let report = ContactSubmission::new("   ", " \t", "\n\n").validate();
    assert_eq!(report.failed(), &Field::ALL);
}

#[test]
fn email_is_trimmed_before_matching() {
    let report = ContactSubmission::new("Ada", "  ada@example.com  ", "Hello").validate();
    assert!(report.is_valid());
}

#[test]
fn field_ids_match_markup() {
    assert_eq!(Field::Name.id(), "name");
    assert_eq!(Field::Email.id(), "email");
    assert_eq!(Field::Message.id(), "message");
}
