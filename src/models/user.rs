use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user as returned by the API.
///
/// The password hash is intentionally not part of this struct; queries never
/// select it into a response model, so it cannot leak through serialization.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /users`. The plaintext password is hashed before it
/// ever reaches the store.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(
        required(message = "The username field is required"),
        length(min = 1, message = "The username field is required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "The password field is required"),
        length(min = 1, message = "The password field is required")
    )]
    pub password: Option<String>,
}

impl CreateUserInput {
    /// Field declaration order, used to order validation errors.
    pub const FIELDS: &'static [&'static str] = &["username", "password"];
}

/// Payload for `PUT /users/{id}`. Absent fields keep their stored values;
/// the password hash is only recomputed when a new password is supplied.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(length(min = 1, message = "The username field must not be empty"))]
    pub username: Option<String>,

    #[validate(length(min = 1, message = "The password field must not be empty"))]
    pub password: Option<String>,
}

impl UpdateUserInput {
    pub const FIELDS: &'static [&'static str] = &["username", "password"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_input_requires_both_fields() {
        let input = CreateUserInput {
            username: Some("a".to_string()),
            password: Some("secret".to_string()),
        };
        assert!(input.validate().is_ok());

        let input = CreateUserInput {
            username: Some("a".to_string()),
            password: None,
        };
        assert!(input.validate().is_err());

        let input = CreateUserInput {
            username: Some("".to_string()),
            password: Some("secret".to_string()),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_user_serialization_has_no_password_field() {
        let user = User {
            id: 1,
            username: "a".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| k.contains("password")));
    }
}
