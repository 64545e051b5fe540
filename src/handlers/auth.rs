// src/handlers/auth.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{CreateUserRequest, LoginRequest, NewUser, TokenResponse},
    store::SharedStore,
    utils::{
        hash::{hash_password, verify_password},
        jwt::{Claims, sign_jwt},
    },
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(store): State<SharedStore>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let hashed_password = hash_password(&payload.password)?;

    let user = store
        .create_user(NewUser {
            email: payload.email,
            username: payload.username,
            hashed_password,
            is_admin: false,
        })
        .await?;

    tracing::info!(user_id = user.id, "Registered user {}", user.username);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates a user and returns a bearer token.
pub async fn login(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let rejected = || AppError::AuthError("Incorrect username or password".to_string());

    let user = store
        .find_user_by_username(&payload.username)
        .await?
        .ok_or_else(rejected)?;

    if !verify_password(&payload.password, &user.hashed_password)? {
        return Err(rejected());
    }

    let access_token = sign_jwt(&user, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Returns the account behind the current token.
pub async fn me(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = store
        .find_user_by_id(claims.user_id()?)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
