// src/models/learning_style.rs

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::scoring::{CategoryTotals, ScoreCard};

/// Represents the 'learning_style_results' table in the database.
/// At most one row per user; overwritten on every submission.
///
/// The score fields keep the names clients already consume
/// (`visual_score` for activist and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStyleResult {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "visual_score")]
    pub activist_score: i64,
    #[serde(rename = "auditory_score")]
    pub reflector_score: i64,
    #[serde(rename = "reading_score")]
    pub theorist_score: i64,
    #[serde(rename = "kinesthetic_score")]
    pub pragmatist_score: i64,
    pub dominant_style: Category,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl LearningStyleResult {
    pub fn totals(&self) -> CategoryTotals {
        CategoryTotals::new(
            self.activist_score,
            self.reflector_score,
            self.theorist_score,
            self.pragmatist_score,
        )
    }

    /// Overwrites the scores in place, keeping id and creation time.
    pub fn apply(&mut self, card: &ScoreCard, now: chrono::DateTime<chrono::Utc>) {
        self.activist_score = card.totals.get(Category::Activist);
        self.reflector_score = card.totals.get(Category::Reflector);
        self.theorist_score = card.totals.get(Category::Theorist);
        self.pragmatist_score = card.totals.get(Category::Pragmatist);
        self.dominant_style = card.dominant;
        self.updated_at = now;
    }
}
