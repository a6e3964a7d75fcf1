use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body starting a password reset.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Request body completing a password reset.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    #[serde(rename = "resetCode")]
    pub reset_code: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Public part of a user returned to clients. Never carries the password
/// hash or reset-code state.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Response for successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Response for successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
}

/// Generic acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_request_uses_wire_field_names() {
        let req: ResetPasswordRequest = serde_json::from_str(
            r#"{"email":"a@x.com","resetCode":"042617","newPassword":"pw2-Str0ng!"}"#,
        )
        .unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.reset_code, "042617");
        assert_eq!(req.new_password, "pw2-Str0ng!");
    }

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_string(&LoginResponse {
            token: "jwt".into(),
            name: "A".into(),
        })
        .unwrap();
        assert!(json.contains(r#""token":"jwt""#));
        assert!(json.contains(r#""name":"A""#));
    }

    #[test]
    fn register_response_exposes_public_user_only() {
        let json = serde_json::to_string(&RegisterResponse {
            message: "ok".into(),
            user: PublicUser {
                id: Uuid::new_v4(),
                email: "a@x.com".into(),
                name: "A".into(),
            },
        })
        .unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password"));
    }
}
