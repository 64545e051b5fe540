// src/handlers/questionnaire.rs

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::response::CreateResponseRequest,
    scoring::Answer,
    store::SharedStore,
    utils::jwt::Claims,
};

/// Lists the questionnaire in presentation order.
pub async fn list_questions(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(store.list_questions().await?))
}

/// Replaces the caller's answers and recalculates their learning style.
///
/// Returns the stored response rows.
pub async fn submit_responses(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<Vec<CreateResponseRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id()?;
    let answers: Vec<Answer> = payload.into_iter().map(Answer::from).collect();

    let submission = store.submit_responses(user_id, &answers).await?;

    tracing::info!(
        user_id,
        answers = answers.len(),
        dominant_style = %submission.result.dominant_style,
        "Learning style recalculated"
    );

    Ok(Json(submission.responses))
}

/// Returns the caller's learning style result.
pub async fn my_result(
    State(store): State<SharedStore>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let result = store
        .find_result(claims.user_id()?)
        .await?
        .ok_or(AppError::NotFound(
            "No learning style result found".to_string(),
        ))?;

    Ok(Json(result))
}
