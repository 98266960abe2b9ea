//! Shared pieces of the form-style endpoints
//!
//! Each GET returns the fields the matching POST expects plus the
//! requester's existing records. POST bodies are JSON objects whose fields
//! are all optional at the type level; presence is checked here so a
//! missing field surfaces as a validation error with a redirect.

use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// Body of a form GET
#[derive(Debug, Serialize)]
pub struct FormView<T> {
    pub fields: &'static [&'static str],
    pub records: Vec<T>,
}

impl<T> FormView<T> {
    pub fn new(fields: &'static [&'static str], records: Vec<T>) -> Self {
        Self { fields, records }
    }
}

/// Require a non-blank field, returning it exactly as sent
pub fn require_field(value: Option<String>, field: &str, redirect: &str) -> ApiResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::validation(
            format!("Missing required field: {}", field),
            redirect,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_field_is_kept_verbatim() {
        let value = require_field(Some("  post more stories ".into()), "action_description", "/x/");
        assert_eq!(value.unwrap(), "  post more stories ");
    }

    #[test]
    fn test_missing_and_blank_fields_rejected() {
        for value in [None, Some(String::new()), Some("   ".into())] {
            match require_field(value, "trigger_event", "/automation/") {
                Err(ApiError::Validation { message, redirect }) => {
                    assert_eq!(message, "Missing required field: trigger_event");
                    assert_eq!(redirect, "/automation/");
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }
}
