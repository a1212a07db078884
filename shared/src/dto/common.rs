use serde::{Deserialize, Serialize};
use validator::Validate;

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    #[serde(alias = "error")]
    pub message: String,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful `POST /login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token
    pub token: String,
    /// Opaque user info, stored verbatim
    #[serde(default)]
    pub user: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_accepts_either_key() {
        let a: ErrorResponse = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        let b: ErrorResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(a.message, b.message);
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "fan@showtime.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_response_without_user() {
        let response: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(response.token, "abc");
        assert!(response.user.is_null());
    }
}
