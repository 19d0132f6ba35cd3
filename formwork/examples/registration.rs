//! Registration Form Example
//!
//! A scripted demo showcasing formwork's registration form:
//! - Change and blur events delivered to the form controller
//! - Touched-gated error display
//! - Submit validation and the success callback
//!
//! The event script plays a user who skips the email field, enters a
//! rejected address and a short password, has the submit blocked, then
//! fixes everything and submits successfully.

use formwork::prelude::*;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let form = RegistrationForm::new(|values| {
        info!(
            "submitted values: {}",
            serde_json::to_string(values).unwrap_or_default()
        );
        println!("*** Registration completed successfully ***");
    });

    let events = [
        FormEvent::change("name", "Leyla Aliyeva"),
        FormEvent::blur("email"),
        FormEvent::change("email", "leyla@gmail.com"),
        FormEvent::change("password", "short"),
        FormEvent::blur("password"),
        FormEvent::Submit,
        FormEvent::change("email", "leyla@code.edu.az"),
        FormEvent::change("password", "correct horse"),
        FormEvent::change("acceptPassword", "correct horse"),
        FormEvent::Submit,
    ];

    for event in events {
        println!("-> {:?}", event);
        if let Err(e) = form.handle(event) {
            eprintln!("unhandled event: {e}");
        }
        paint(&form);
        println!();
    }
}

/// Repaint the fields that changed since the last event.
fn paint(form: &RegistrationForm) {
    paint_text("Name", form.name(), false);
    paint_text("Email", form.email(), false);
    paint_gender(form.gender());
    paint_text("Password", form.password(), true);
    paint_text("Confirm", form.accept_password(), true);
}

fn paint_text(label: &str, field: &TextField, mask: bool) {
    if !field.is_dirty() {
        return;
    }
    field.clear_dirty();
    let value = if mask {
        "\u{2022}".repeat(field.value().chars().count())
    } else {
        field.value()
    };
    match field.visible_error() {
        Some(error) => println!("  {label:<10} {value:<24} ! {error}"),
        None => println!("  {label:<10} {value}"),
    }
}

fn paint_gender(field: &SelectField) {
    if !field.is_dirty() {
        return;
    }
    field.clear_dirty();
    let options = (0..field.len())
        .filter_map(|i| {
            field.label_at(i).map(|label| {
                if field.is_selected(i) {
                    format!("(\u{2022}) {label}")
                } else {
                    format!("( ) {label}")
                }
            })
        })
        .collect::<Vec<_>>()
        .join("  ");
    match field.visible_error() {
        Some(error) => println!("  {:<10} {options} ! {error}", "Gender"),
        None => println!("  {:<10} {options}", "Gender"),
    }
}
