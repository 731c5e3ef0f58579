//! Validating a nested signup form with arbor-validator.
//!
//! Run: `cargo run -p arbor-validator --example signup_form`

use arbor_validator::prelude::*;
use serde_json::{Value, json};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let form = signup_form();

    println!("=== Complete Form ===\n");
    report(&form.validate(&json!({
        "username": "ada",
        "website": "https://ada.dev",
        "age": "36",
        "address": {"city": "London", "street": "Baker St"}
    })));

    println!("\n=== Broken Form ===\n");
    report(&form.validate(&json!({
        "username": "a",
        "website": "ada.dev",
        "age": 12.5,
        "address": {"city": ""}
    })));

    println!("\n=== Reusing a Field Validator ===\n");
    let address = form.get_for_field("address");
    report(&address.validate(&json!({"street": "Baker St"})));
}

fn signup_form() -> ObjectValidator<Value> {
    let address = ObjectValidator::new()
        .with_field("city", generic::required())
        .with_field("street", string::has_min_length(2));

    let mut form = ObjectValidator::new();
    form.on_field("username", generic::required())
        .on_field("username", string::has_min_length(2))
        .on_field("website", string::is_url().with_message("Enter a link to your site"))
        .on_field("age", number::is_integer())
        .on_field("age", number::min(18.0))
        .on_field("address", address);
    form
}

fn report(result: &ObjectValidationResult) {
    if result.is_valid() {
        println!("valid");
    } else {
        for (path, messages) in result.errors() {
            println!("{}: {}", path.join("."), messages.join("; "));
        }
    }

    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("could not render report: {err}"),
    }
}
