//! End-to-end tests for the registration form.

use std::sync::{Arc, Mutex};

use formwork::prelude::*;

fn counting_form() -> (RegistrationForm, Arc<Mutex<Vec<FormSnapshot>>>) {
    let submitted: Arc<Mutex<Vec<FormSnapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&submitted);
    let form = RegistrationForm::new(move |values| sink.lock().unwrap().push(values.clone()));
    (form, submitted)
}

fn fill_valid(form: &RegistrationForm) {
    form.set_value("name", "Aysel Mammadova").unwrap();
    form.set_value("email", "aysel@code.edu.az").unwrap();
    form.set_value("password", "unguessable").unwrap();
    form.set_value("acceptPassword", "unguessable").unwrap();
}

#[test]
fn test_valid_registration_passes() {
    let (form, _) = counting_form();
    fill_valid(&form);
    assert!(form.validate_all().is_valid());
}

#[test]
fn test_fresh_form_reports_blank_fields() {
    let (form, _) = counting_form();

    let result = form.validate_all();
    assert_eq!(result.error_for("name").unwrap().kind, RuleKind::Required);
    assert_eq!(result.error_for("email").unwrap().kind, RuleKind::Required);
    // The password chain declares its length rule before required.
    assert_eq!(
        result.error_for("password").unwrap().kind,
        RuleKind::TooShort
    );
    assert_eq!(
        result.error_for("acceptPassword").unwrap().kind,
        RuleKind::Required
    );
    // Gender defaults to a valid selection.
    assert!(result.error_for("gender").is_none());
}

#[test]
fn test_gender_defaults_to_female() {
    let (form, _) = counting_form();
    assert_eq!(form.gender().selected_label().as_deref(), Some("female"));
    assert_eq!(form.values().get("gender"), Some("female"));
}

#[test]
fn test_gender_change_by_label() {
    let (form, _) = counting_form();

    form.set_value("gender", "male").unwrap();
    assert_eq!(form.gender().selected_label().as_deref(), Some("male"));

    // Unknown options leave the selection unchanged.
    form.set_value("gender", "other").unwrap();
    assert_eq!(form.gender().selected_label().as_deref(), Some("male"));
}

#[test]
fn test_cleared_gender_is_required() {
    let (form, _) = counting_form();

    form.gender().clear_selection();
    assert_eq!(
        form.validate_all().error_for("gender").unwrap().kind,
        RuleKind::Required
    );
}

#[test]
fn test_email_domain_anchoring() {
    let (form, _) = counting_form();
    fill_valid(&form);

    form.set_value("email", "a@code.edu.az").unwrap();
    assert!(form.validate_all().is_valid());

    form.set_value("email", "a@code.edu.az.com").unwrap();
    assert_eq!(
        form.validate_all().error_for("email").unwrap().kind,
        RuleKind::DomainNotAllowed
    );
}

#[test]
fn test_email_wrong_domain_rejected() {
    let (form, _) = counting_form();
    fill_valid(&form);

    form.set_value("email", "aysel@gmail.com").unwrap();
    let error = form.validate_all().error_for("email").unwrap().clone();
    assert_eq!(error.kind, RuleKind::DomainNotAllowed);
    assert_eq!(error.message, "Only @code.edu.az addresses are accepted");
}

#[test]
fn test_malformed_email_rejected_before_domain() {
    let (form, _) = counting_form();

    form.set_value("email", "not-an-email").unwrap();
    assert_eq!(
        form.validate_all().error_for("email").unwrap().kind,
        RuleKind::InvalidFormat
    );
}

#[test]
fn test_password_length_rule() {
    let (form, _) = counting_form();
    fill_valid(&form);

    form.set_value("password", "short").unwrap();
    assert_eq!(
        form.validate_all().error_for("password").unwrap().kind,
        RuleKind::TooShort
    );

    form.set_value("password", "longenough").unwrap();
    assert!(form.validate_all().error_for("password").is_none());
}

#[test]
fn test_name_too_long() {
    let (form, _) = counting_form();
    fill_valid(&form);

    form.set_value("name", &"x".repeat(51)).unwrap();
    assert_eq!(
        form.validate_all().error_for("name").unwrap().kind,
        RuleKind::TooLong
    );

    form.set_value("name", &"x".repeat(50)).unwrap();
    assert!(form.validate_all().is_valid());
}

#[test]
fn test_confirmation_mismatch() {
    let (form, _) = counting_form();
    fill_valid(&form);

    form.set_value("password", "y-password").unwrap();
    form.set_value("acceptPassword", "x-password").unwrap();
    assert_eq!(
        form.validate_all().error_for("acceptPassword").unwrap().kind,
        RuleKind::Mismatch
    );
}

#[test]
fn test_empty_confirmation_is_not_a_match() {
    // Two empty password fields agree, but the confirmation is
    // independently required.
    let (form, _) = counting_form();

    let result = form.validate_all();
    assert_eq!(
        result.error_for("acceptPassword").unwrap().kind,
        RuleKind::Required
    );
}

#[test]
fn test_successful_submit_snapshot() {
    let (form, submitted) = counting_form();
    fill_valid(&form);

    assert!(form.submit().is_valid());

    let submitted = submitted.lock().unwrap();
    assert_eq!(submitted.len(), 1);
    let values = &submitted[0];
    assert_eq!(values.get("name"), Some("Aysel Mammadova"));
    assert_eq!(values.get("email"), Some("aysel@code.edu.az"));
    assert_eq!(values.get("gender"), Some("female"));
    assert_eq!(values.get("password"), Some("unguessable"));
    assert_eq!(values.get("acceptPassword"), Some("unguessable"));
}

#[test]
fn test_failed_submit_shows_all_errors() {
    let (form, submitted) = counting_form();

    assert!(form.submit().is_invalid());
    assert!(submitted.lock().unwrap().is_empty());

    let visible = form.visible_errors();
    assert_eq!(visible.len(), 4);
    assert!(visible.contains_key("name"));
    assert!(visible.contains_key("email"));
    assert!(visible.contains_key("password"));
    assert!(visible.contains_key("acceptPassword"));
}

#[test]
fn test_submit_once_per_valid_submit() {
    let (form, submitted) = counting_form();
    fill_valid(&form);

    form.submit();
    form.submit();
    assert_eq!(submitted.lock().unwrap().len(), 2);
}

#[test]
fn test_errors_surface_only_after_interaction() {
    let (form, _) = counting_form();

    form.validate_all();
    assert!(form.visible_errors().is_empty());

    form.touch("email").unwrap();
    assert_eq!(form.visible_errors().len(), 1);

    form.set_value("name", "").unwrap();
    assert_eq!(form.visible_errors().len(), 2);
}

#[test]
fn test_reset_restores_defaults() {
    let (form, _) = counting_form();
    fill_valid(&form);
    form.set_value("gender", "male").unwrap();

    form.reset();
    assert_eq!(form.name().value(), "");
    assert_eq!(form.gender().selected_label().as_deref(), Some("female"));
    assert!(form.errors().is_empty());
    assert!(form.visible_errors().is_empty());
    assert!(!form.name().is_touched());
}

#[test]
fn test_event_driven_registration() {
    let (form, submitted) = counting_form();

    let events = [
        FormEvent::change("name", "Aysel Mammadova"),
        FormEvent::change("email", "aysel@code.edu.az"),
        FormEvent::change("password", "unguessable"),
        FormEvent::change("acceptPassword", "unguessable"),
        FormEvent::Submit,
    ];
    for event in events {
        form.handle(event).unwrap();
    }

    assert_eq!(submitted.lock().unwrap().len(), 1);
}

#[test]
fn test_password_edit_revalidates_confirmation() {
    let (form, _) = counting_form();
    fill_valid(&form);

    form.set_value("password", "changed-password").unwrap();
    assert_eq!(
        form.accept_password().error().as_deref(),
        Some("Passwords must match")
    );

    form.set_value("acceptPassword", "changed-password").unwrap();
    assert!(!form.accept_password().has_error());
}
