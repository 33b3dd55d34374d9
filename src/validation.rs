//! Payload validation helpers.
//!
//! Input structs derive [`validator::Validate`]; this module turns the
//! resulting error map into the ordered list of `{field, message}` pairs the
//! API returns, one entry per offending field, in the order the fields are
//! declared on the input struct.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validates `input`, converting failures into `AppError::Validation` with
/// the field order given by `declared`.
pub fn check<T: Validate>(input: &T, declared: &[&str]) -> Result<(), AppError> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(AppError::Validation(field_errors(&errors, declared))),
    }
}

fn field_errors(errors: &ValidationErrors, declared: &[&str]) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    let mut out = Vec::new();
    for &field in declared {
        if let Some(list) = by_field.get(field) {
            // One entry per field; `required` and `length` cannot both fire
            // on the same value.
            if let Some(err) = list.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid", field));
                out.push(FieldError {
                    field: field.to_string(),
                    message,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::models::{CreateTaskInput, CreateUserInput};

    #[test]
    fn test_missing_content_reports_content_field() {
        let input = CreateTaskInput {
            content: None,
            status: None,
        };
        match check(&input, CreateTaskInput::FIELDS) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "content");
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_errors_preserve_declared_field_order() {
        let input = CreateUserInput {
            username: Some("".to_string()),
            password: None,
        };
        match check(&input, CreateUserInput::FIELDS) {
            Err(AppError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["username", "password"]);
            }
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let input = CreateTaskInput {
            content: Some("buy milk".to_string()),
            status: None,
        };
        assert!(check(&input, CreateTaskInput::FIELDS).is_ok());
    }
}
