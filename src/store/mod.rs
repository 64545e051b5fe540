// src/store/mod.rs

//! Persistence behind the HTTP handlers.
//!
//! `PgStore` is used in production; `MemoryStore` backs the service when no
//! database is configured and drives the test suite.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        learning_style::LearningStyleResult,
        question::{Question, SeedQuestion},
        response::{ResponseWithQuestion, Submission},
        user::{NewUser, User},
    },
    scoring::Answer,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Inserts a user. Fails with `Conflict` when the username or email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Inserts `questions` in order when no question exists yet.
    /// Returns the number of rows inserted.
    async fn seed_questions(&self, questions: &[SeedQuestion]) -> Result<usize, AppError>;

    /// All questions, ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, AppError>;

    /// Replaces the user's answer set with `answers`, rescores it and
    /// upserts the user's result, all as one unit.
    ///
    /// Fails with `NotFound` when the user does not exist.
    async fn submit_responses(
        &self,
        user_id: i64,
        answers: &[Answer],
    ) -> Result<Submission, AppError>;

    async fn find_result(&self, user_id: i64) -> Result<Option<LearningStyleResult>, AppError>;

    /// Every stored result, ordered by user id.
    async fn list_results(&self) -> Result<Vec<LearningStyleResult>, AppError>;

    /// The user's answers joined with their questions, ordered by question id.
    async fn list_user_responses(
        &self,
        user_id: i64,
    ) -> Result<Vec<ResponseWithQuestion>, AppError>;
}
