// src/models/response.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{category::Category, learning_style::LearningStyleResult};
use crate::scoring::Answer;

/// Represents the 'responses' table in the database.
/// One row per answered question of a user's latest submission.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    /// 1 = agree (tick), 0 = disagree (cross).
    pub answer: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for one answered question in a submission.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CreateResponseRequest {
    pub question_id: i64,
    pub answer: i32,
}

impl From<CreateResponseRequest> for Answer {
    fn from(req: CreateResponseRequest) -> Self {
        Answer {
            question_id: req.question_id,
            answer: req.answer,
        }
    }
}

/// A stored answer joined with its question, for the admin view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseWithQuestion {
    pub question_id: i64,
    pub question_text: String,
    pub category: Category,
    pub answer: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// What a submission leaves behind: the stored answers and the recomputed result.
#[derive(Debug, Clone)]
pub struct Submission {
    pub responses: Vec<ResponseRecord>,
    pub result: LearningStyleResult,
}
