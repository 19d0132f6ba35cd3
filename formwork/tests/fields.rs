//! Tests for field state handles: values, touched flags, dirty tracking.

use formwork::prelude::*;

#[test]
fn test_text_field_value_roundtrip() {
    let field = TextField::new();
    assert!(field.is_empty());
    assert_eq!(field.len(), 0);

    field.set_value("hello");
    assert_eq!(field.value(), "hello");
    assert_eq!(field.len(), 5);
    assert!(!field.is_empty());

    field.clear();
    assert!(field.is_empty());
}

#[test]
fn test_text_field_initial_value() {
    let field = TextField::with_value("start");
    assert_eq!(field.initial_value(), "start");

    field.set_value("edited");
    assert_eq!(field.initial_value(), "start");

    field.reset();
    assert_eq!(field.value(), "start");
}

#[test]
fn test_text_field_clones_share_state() {
    let field = TextField::new();
    let handle = field.clone();

    handle.set_value("shared");
    assert_eq!(field.value(), "shared");
}

#[test]
fn test_text_field_error_hidden_until_touched() {
    let field = TextField::new();
    field.set_error("broken");

    assert_eq!(field.error().as_deref(), Some("broken"));
    assert_eq!(field.visible_error(), None);

    field.touch();
    assert_eq!(field.visible_error().as_deref(), Some("broken"));
}

#[test]
fn test_text_field_set_value_clears_error() {
    let field = TextField::new();
    field.set_error("broken");

    field.set_value("fixed");
    assert!(!field.has_error());
}

#[test]
fn test_text_field_dirty_tracking() {
    let field = TextField::new();
    assert!(!field.is_dirty());

    field.set_value("x");
    assert!(field.is_dirty());

    field.clear_dirty();
    assert!(!field.is_dirty());

    field.touch(); // already touched, no state change
    assert!(!field.is_dirty());

    field.set_error("broken");
    assert!(field.is_dirty());
}

#[test]
fn test_select_field_selection() {
    let field = SelectField::with_options(vec!["female", "male"]);
    assert_eq!(field.len(), 2);
    assert!(!field.is_empty());
    assert_eq!(field.selected(), None);

    field.select(1);
    assert!(field.is_selected(1));
    assert_eq!(field.selected_label().as_deref(), Some("male"));
    assert_eq!(field.label_at(0).as_deref(), Some("female"));
    assert_eq!(field.label_at(5), None);
}

#[test]
fn test_select_field_out_of_bounds_ignored() {
    let field = SelectField::with_options(vec!["female", "male"]);

    field.select(5);
    assert_eq!(field.selected(), None);
    assert!(!field.is_touched());
}

#[test]
fn test_select_field_with_selected_default() {
    let field = SelectField::with_options(vec!["female", "male"]).with_selected(0);
    assert_eq!(field.selected_label().as_deref(), Some("female"));
    assert!(!field.is_touched());

    field.select_label("male");
    assert!(field.is_touched());

    field.reset();
    assert_eq!(field.selected_label().as_deref(), Some("female"));
    assert!(!field.is_touched());
}

#[test]
fn test_select_field_select_label_unknown() {
    let field = SelectField::with_options(vec!["female", "male"]);

    assert!(!field.select_label("other"));
    assert_eq!(field.selected(), None);
    assert!(field.select_label("female"));
    assert_eq!(field.selected(), Some(0));
}

#[test]
fn test_select_field_clear_selection() {
    let field = SelectField::with_options(vec!["female", "male"]).with_selected(0);

    field.clear_selection();
    assert_eq!(field.selected(), None);
    assert!(field.is_touched());
}

#[test]
fn test_select_field_reselect_keeps_error_clearing_semantics() {
    let field = SelectField::with_options(vec!["female", "male"]);
    field.set_error("broken");

    field.select(0);
    assert!(!field.has_error());
}
