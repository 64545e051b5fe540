// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::Store;
use crate::{
    error::AppError,
    models::{
        category::Category,
        learning_style::LearningStyleResult,
        question::{Question, SeedQuestion},
        response::{ResponseRecord, ResponseWithQuestion, Submission},
        user::{NewUser, User},
    },
    scoring::{Answer, compute_result},
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    questions: Vec<Question>,
    responses: Vec<ResponseRecord>,
    results: HashMap<i64, LearningStyleResult>,
    next_user_id: i64,
    next_question_id: i64,
    next_response_id: i64,
    next_result_id: i64,
}

impl Tables {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }

    fn categories(&self) -> HashMap<i64, Category> {
        self.questions.iter().map(|q| (q.id, q.category)).collect()
    }
}

/// Process-local store. A single lock guards all tables, so every
/// operation, including a whole submission, is atomic.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut t = self.tables.write().await;

        if t.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict("Username already registered".to_string()));
        }
        if t.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let user = User {
            id: Tables::next_id(&mut t.next_user_id),
            email: user.email,
            username: user.username,
            hashed_password: user.hashed_password,
            is_admin: user.is_admin,
            created_at: Utc::now(),
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let t = self.tables.read().await;
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let t = self.tables.read().await;
        Ok(t.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn seed_questions(&self, questions: &[SeedQuestion]) -> Result<usize, AppError> {
        let mut t = self.tables.write().await;
        if !t.questions.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        for q in questions {
            let id = Tables::next_id(&mut t.next_question_id);
            t.questions.push(Question {
                id,
                text: q.text.to_string(),
                category: q.category,
                created_at: now,
            });
        }
        Ok(questions.len())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn submit_responses(
        &self,
        user_id: i64,
        answers: &[Answer],
    ) -> Result<Submission, AppError> {
        let mut guard = self.tables.write().await;
        let t = &mut *guard;

        if !t.users.iter().any(|u| u.id == user_id) {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let now = Utc::now();
        t.responses.retain(|r| r.user_id != user_id);

        let mut responses = Vec::with_capacity(answers.len());
        for a in answers {
            let record = ResponseRecord {
                id: Tables::next_id(&mut t.next_response_id),
                user_id,
                question_id: a.question_id,
                answer: a.answer,
                created_at: now,
            };
            t.responses.push(record.clone());
            responses.push(record);
        }

        let current: Vec<Answer> = t
            .responses
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| Answer {
                question_id: r.question_id,
                answer: r.answer,
            })
            .collect();
        let card = compute_result(&current, &t.categories());

        let result = match t.results.get_mut(&user_id) {
            Some(existing) => {
                existing.apply(&card, now);
                existing.clone()
            }
            None => {
                let mut fresh = LearningStyleResult {
                    id: Tables::next_id(&mut t.next_result_id),
                    user_id,
                    activist_score: 0,
                    reflector_score: 0,
                    theorist_score: 0,
                    pragmatist_score: 0,
                    dominant_style: card.dominant,
                    created_at: now,
                    updated_at: now,
                };
                fresh.apply(&card, now);
                t.results.insert(user_id, fresh.clone());
                fresh
            }
        };

        Ok(Submission { responses, result })
    }

    async fn find_result(&self, user_id: i64) -> Result<Option<LearningStyleResult>, AppError> {
        Ok(self.tables.read().await.results.get(&user_id).cloned())
    }

    async fn list_results(&self) -> Result<Vec<LearningStyleResult>, AppError> {
        let t = self.tables.read().await;
        let mut results: Vec<_> = t.results.values().cloned().collect();
        results.sort_by_key(|r| r.user_id);
        Ok(results)
    }

    async fn list_user_responses(
        &self,
        user_id: i64,
    ) -> Result<Vec<ResponseWithQuestion>, AppError> {
        let t = self.tables.read().await;
        let questions: HashMap<i64, &Question> = t.questions.iter().map(|q| (q.id, q)).collect();

        let mut rows: Vec<ResponseWithQuestion> = t
            .responses
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                questions.get(&r.question_id).map(|q| ResponseWithQuestion {
                    question_id: q.id,
                    question_text: q.text.clone(),
                    category: q.category,
                    answer: r.answer,
                    created_at: r.created_at,
                })
            })
            .collect();
        rows.sort_by_key(|r| r.question_id);
        Ok(rows)
    }
}
