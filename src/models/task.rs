use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status assigned to tasks created without an explicit one.
pub const DEFAULT_TASK_STATUS: &str = "pending";

/// A task as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Store-assigned identifier, immutable.
    pub id: i32,
    /// Free-form task text, never empty.
    pub content: String,
    /// Current status label.
    pub status: String,
    /// Set by the store on creation, immutable.
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /tasks`.
///
/// Fields are `Option` so that a missing field is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskInput {
    #[validate(
        required(message = "The content field is required"),
        length(min = 1, message = "The content field is required")
    )]
    pub content: Option<String>,

    /// Defaults to [`DEFAULT_TASK_STATUS`] when omitted.
    #[validate(length(min = 1, message = "The status field must not be empty"))]
    pub status: Option<String>,
}

impl CreateTaskInput {
    /// Field declaration order, used to order validation errors.
    pub const FIELDS: &'static [&'static str] = &["content", "status"];
}

/// Payload for `PUT /tasks/{id}`. Every field is optional; absent fields
/// keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskInput {
    #[validate(length(min = 1, message = "The content field must not be empty"))]
    pub content: Option<String>,

    #[validate(length(min = 1, message = "The status field must not be empty"))]
    pub status: Option<String>,
}

impl UpdateTaskInput {
    pub const FIELDS: &'static [&'static str] = &["content", "status"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_input_requires_content() {
        let input = CreateTaskInput {
            content: None,
            status: Some("pending".to_string()),
        };
        assert!(input.validate().is_err());

        let input = CreateTaskInput {
            content: Some("".to_string()),
            status: None,
        };
        assert!(input.validate().is_err());

        let input = CreateTaskInput {
            content: Some("buy milk".to_string()),
            status: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_update_input_fields_are_optional() {
        let input = UpdateTaskInput {
            content: None,
            status: None,
        };
        assert!(input.validate().is_ok());

        // Supplied fields must still be non-empty.
        let input = UpdateTaskInput {
            content: None,
            status: Some("".to_string()),
        };
        assert!(input.validate().is_err());
    }
}
