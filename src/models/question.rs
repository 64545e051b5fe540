// src/models/question.rs

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// Statement shown to the user; not used for scoring.
    pub text: String,

    pub category: Category,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A question to insert when seeding an empty store.
#[derive(Debug, Clone, Copy)]
pub struct SeedQuestion {
    pub text: &'static str,
    pub category: Category,
}
