use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Request-boundary error taxonomy. Every failure a handler can produce
/// maps onto one of these and, from there, onto a status code and a
/// `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired reset code")]
    InvalidOrExpiredCode,

    #[error("Notification delivery failed")]
    NotificationFailed,

    #[error("Credential store unavailable")]
    StoreUnavailable,

    #[error("{0}")]
    Validation(String),

    #[error("Internal error")]
    Internal,
}

impl AuthError {
    pub fn store(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "credential store error");
        AuthError::StoreUnavailable
    }

    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "internal error");
        AuthError::Internal
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AuthError::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::DuplicateEmail
            | AuthError::InvalidOrExpiredCode
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::NotificationFailed
            | AuthError::StoreUnavailable
            | AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 5xx detail stays in the logs; clients get a stable generic body.
        let message = if status.is_server_error() {
            "Something went wrong".to_string()
        } else {
            self.to_string()
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
