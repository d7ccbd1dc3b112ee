//! DTOs for user account endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::User;

/// Request to create a user account.
///
/// ```json
/// { "username": "test", "password": "testPassword", "confirmPassword": "testPassword" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_password_confirmation", skip_on_field_errors = false))]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[validate(custom(function = "validate_username_not_reserved"))]
    pub username: String,

    #[validate(length(min = 7, message = "Password must be at least 7 characters"))]
    pub password: String,

    pub confirm_password: String,
}

/// Usernames shadowed by static routes, so `GET /api/user/{username}` cannot reach them.
const RESERVED_USERNAMES: &[&str] = &["create"];

fn validate_username_not_reserved(username: &str) -> Result<(), ValidationError> {
    if RESERVED_USERNAMES.contains(&username) {
        return Err(ValidationError::new("reserved_username")
            .with_message("Username is reserved".into()));
    }
    Ok(())
}

fn validate_password_confirmation(request: &CreateUserRequest) -> Result<(), ValidationError> {
    if request.password != request.confirm_password {
        return Err(ValidationError::new("password_mismatch")
            .with_message("Passwords do not match".into()));
    }
    Ok(())
}

/// Account as returned to clients.
///
/// `password` is the stored hash, never the plaintext.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str, confirm: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("test", "testPassword", "testPassword").validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let errors = request("test", "short", "short").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_empty_username_rejected() {
        let errors = request("", "testPassword", "testPassword")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_reserved_username_rejected() {
        let errors = request("create", "testPassword", "testPassword")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(request("creator", "testPassword", "testPassword")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_confirmation_mismatch_rejected() {
        assert!(request("test", "testPassword", "otherPassword")
            .validate()
            .is_err());
    }

    #[test]
    fn test_camel_case_body() {
        let parsed: CreateUserRequest = serde_json::from_str(
            r#"{"username":"test","password":"testPassword","confirmPassword":"testPassword"}"#,
        )
        .unwrap();
        assert_eq!(parsed.confirm_password, "testPassword");
    }
}
