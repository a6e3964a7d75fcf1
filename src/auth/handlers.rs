use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{
            ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, PublicUser,
            RegisterRequest, RegisterResponse, ResetPasswordRequest,
        },
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
    },
    error::AuthError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/me", get(get_me))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AuthError::validation("Invalid email"));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(AuthError::validation("Password too short"));
    }
    if payload.name.trim().is_empty() {
        return Err(AuthError::validation("Name must not be empty"));
    }

    // Emails are stored exactly as given; lookups are case-sensitive.
    if state
        .store
        .find_by_email(&payload.email)
        .await
        .map_err(AuthError::store)?
        .is_some()
    {
        warn!(email = %payload.email, "email already registered");
        return Err(AuthError::DuplicateEmail);
    }

    let hash = hash_password(&payload.password).map_err(AuthError::internal)?;
    let user = state
        .store
        .create(&payload.email, &payload.name, &hash)
        .await
        .map_err(AuthError::store)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".into(),
            user: PublicUser {
                id: user.id,
                email: user.email,
                name: user.name,
            },
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = state
        .store
        .find_by_email(&payload.email)
        .await
        .map_err(AuthError::store)?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            AuthError::InvalidCredentials
        })?;

    let ok = verify_password(&payload.password, &user.password_hash)
        .map_err(AuthError::internal)?;
    if !ok {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(AuthError::internal)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        token,
        name: user.name,
    }))
}

#[instrument(skip(state, payload))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    state.reset.forgot_password(&payload.email).await?;
    Ok(Json(MessageResponse {
        message: "Password reset code sent".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    if payload.new_password.len() < 8 {
        warn!("new password too short");
        return Err(AuthError::validation("Password too short"));
    }
    state
        .reset
        .reset_password(&payload.email, &payload.reset_code, &payload.new_password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Password reset successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, AuthError> {
    let users = state.store.list_public().await.map_err(AuthError::store)?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, AuthError> {
    let user = state
        .store
        .find_by_id(user_id)
        .await
        .map_err(AuthError::store)?
        .ok_or_else(|| {
            error!(user_id = %user_id, "token subject no longer exists");
            AuthError::InvalidCredentials
        })?;
    Ok(Json(PublicUser {
        id: user.id,
        email: user.email,
        name: user.name,
    }))
}
