// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, store::SharedStore};

/// Lists every learning style result.
/// Admin only.
pub async fn list_results(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_results().await?))
}

/// Lists all users in the system.
/// Admin only.
pub async fn list_users(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_users().await?))
}

/// Shows one user's raw answers next to the questions they answered.
/// Admin only.
pub async fn user_responses(
    State(store): State<SharedStore>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_user_responses(user_id).await?))
}
