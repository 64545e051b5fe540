// src/store/postgres.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

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

/// Postgres error code for unique violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    category: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    category: String,
}

#[derive(FromRow)]
struct AnswerRow {
    question_id: i64,
    answer: i32,
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Answer {
            question_id: row.question_id,
            answer: row.answer,
        }
    }
}

#[derive(FromRow)]
struct ResultRow {
    id: i64,
    user_id: i64,
    activist_score: i64,
    reflector_score: i64,
    theorist_score: i64,
    pragmatist_score: i64,
    dominant_style: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow)]
struct JoinedResponseRow {
    question_id: i64,
    question_text: String,
    category: String,
    answer: i32,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Category columns are TEXT constrained by a CHECK; anything else means
/// the table was edited by hand.
fn parse_category(raw: &str) -> Result<Category, AppError> {
    raw.parse::<Category>()
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

impl TryFrom<QuestionRow> for Question {
    type Error = AppError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: row.id,
            text: row.text,
            category: parse_category(&row.category)?,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<ResultRow> for LearningStyleResult {
    type Error = AppError;

    fn try_from(row: ResultRow) -> Result<Self, Self::Error> {
        Ok(LearningStyleResult {
            id: row.id,
            user_id: row.user_id,
            activist_score: row.activist_score,
            reflector_score: row.reflector_score,
            theorist_score: row.theorist_score,
            pragmatist_score: row.pragmatist_score,
            dominant_style: parse_category(&row.dominant_style)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<JoinedResponseRow> for ResponseWithQuestion {
    type Error = AppError;

    fn try_from(row: JoinedResponseRow) -> Result<Self, Self::Error> {
        Ok(ResponseWithQuestion {
            question_id: row.question_id,
            question_text: row.question_text,
            category: parse_category(&row.category)?,
            answer: row.answer,
            created_at: row.created_at,
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

const RESULT_COLUMNS: &str = "id, user_id, activist_score, reflector_score, theorist_score, \
     pragmatist_score, dominant_style, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let taken = sqlx::query_as::<_, (bool, bool)>(
            "SELECT
                EXISTS(SELECT 1 FROM users WHERE username = $1),
                EXISTS(SELECT 1 FROM users WHERE email = $2)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;

        match taken {
            (true, _) => return Err(AppError::Conflict("Username already registered".to_string())),
            (_, true) => return Err(AppError::Conflict("Email already registered".to_string())),
            _ => {}
        }

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, hashed_password, is_admin)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, username, hashed_password, is_admin, created_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.hashed_password)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent registration
            if is_unique_violation(&e) {
                AppError::Conflict("Username or email already registered".to_string())
            } else {
                AppError::from(e)
            }
        })
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, username, hashed_password, is_admin, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, username, hashed_password, is_admin, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, username, hashed_password, is_admin, created_at
             FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn seed_questions(&self, questions: &[SeedQuestion]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;

        // Keeps two starting instances from both seeding
        sqlx::query("LOCK TABLE questions IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await?;

        if count > 0 || questions.is_empty() {
            tx.commit().await?;
            return Ok(0);
        }

        let mut query_builder = QueryBuilder::<Postgres>::new("INSERT INTO questions (text, category) ");
        query_builder.push_values(questions, |mut row, q| {
            row.push_bind(q.text).push_bind(q.category.as_str());
        });
        query_builder.build().execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(questions.len())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, text, category, created_at FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Question::try_from).collect()
    }

    async fn submit_responses(
        &self,
        user_id: i64,
        answers: &[Answer],
    ) -> Result<Submission, AppError> {
        let mut tx = self.pool.begin().await?;

        // Serializes submissions of the same user; other users never wait.
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound("User not found".to_string()))?;

        sqlx::query("DELETE FROM responses WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let responses = if answers.is_empty() {
            Vec::new()
        } else {
            let mut query_builder =
                QueryBuilder::<Postgres>::new("INSERT INTO responses (user_id, question_id, answer) ");
            query_builder.push_values(answers, |mut row, a| {
                row.push_bind(user_id)
                    .push_bind(a.question_id)
                    .push_bind(a.answer);
            });
            query_builder.push(" RETURNING id, user_id, question_id, answer, created_at");
            query_builder
                .build_query_as::<ResponseRecord>()
                .fetch_all(&mut *tx)
                .await?
        };

        let current: Vec<Answer> = sqlx::query_as::<_, AnswerRow>(
            "SELECT question_id, answer FROM responses WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(Answer::from)
        .collect();

        let categories = sqlx::query_as::<_, CategoryRow>("SELECT id, category FROM questions")
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .map(|row| parse_category(&row.category).map(|category| (row.id, category)))
            .collect::<Result<HashMap<i64, Category>, AppError>>()?;

        let card = compute_result(&current, &categories);

        let row = sqlx::query_as::<_, ResultRow>(&format!(
            r#"
            INSERT INTO learning_style_results
                (user_id, activist_score, reflector_score, theorist_score, pragmatist_score, dominant_style)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                activist_score = EXCLUDED.activist_score,
                reflector_score = EXCLUDED.reflector_score,
                theorist_score = EXCLUDED.theorist_score,
                pragmatist_score = EXCLUDED.pragmatist_score,
                dominant_style = EXCLUDED.dominant_style,
                updated_at = NOW()
            RETURNING {RESULT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(card.totals.get(Category::Activist))
        .bind(card.totals.get(Category::Reflector))
        .bind(card.totals.get(Category::Theorist))
        .bind(card.totals.get(Category::Pragmatist))
        .bind(card.dominant.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Submission {
            responses,
            result: row.try_into()?,
        })
    }

    async fn find_result(&self, user_id: i64) -> Result<Option<LearningStyleResult>, AppError> {
        let row = sqlx::query_as::<_, ResultRow>(&format!(
            "SELECT {RESULT_COLUMNS} FROM learning_style_results WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LearningStyleResult::try_from).transpose()
    }

    async fn list_results(&self) -> Result<Vec<LearningStyleResult>, AppError> {
        let rows = sqlx::query_as::<_, ResultRow>(&format!(
            "SELECT {RESULT_COLUMNS} FROM learning_style_results ORDER BY user_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(LearningStyleResult::try_from).collect()
    }

    async fn list_user_responses(
        &self,
        user_id: i64,
    ) -> Result<Vec<ResponseWithQuestion>, AppError> {
        let rows = sqlx::query_as::<_, JoinedResponseRow>(
            r#"
            SELECT
                q.id AS question_id,
                q.text AS question_text,
                q.category,
                r.answer,
                r.created_at
            FROM responses r
            JOIN questions q ON q.id = r.question_id
            WHERE r.user_id = $1
            ORDER BY r.question_id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ResponseWithQuestion::try_from).collect()
    }
}
