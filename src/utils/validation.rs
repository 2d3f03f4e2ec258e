// src/utils/validation.rs

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Key `validator` files struct-level (schema) errors under.
const SCHEMA_KEY: &str = "__all__";

/// Rejects empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Picks a single human-readable reason out of `errors`.
///
/// Fields are inspected in the given order so the reported reason does not
/// depend on map iteration order; schema errors come last.
pub fn first_reason(errors: &ValidationErrors, fields: &[&str]) -> String {
    let field_errors = errors.field_errors();

    for field in fields {
        if let Some(error) = field_errors.get(*field).and_then(|errs| errs.first()) {
            return format!("{} {}", field, describe(error));
        }
    }

    if let Some(error) = field_errors.get(SCHEMA_KEY).and_then(|errs| errs.first()) {
        return describe(error).to_string();
    }

    errors.to_string()
}

fn describe(error: &ValidationError) -> &str {
    error.message.as_deref().unwrap_or(error.code.as_ref())
}
