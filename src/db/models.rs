// Database model structs

use crate::models::Questions;

#[derive(Clone, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
}

#[derive(sqlx::FromRow)]
pub(super) struct QuizRow {
    pub id: i64,
    pub public_id: String,
    pub title: String,
    pub questions: String,
    pub created_at: String,
}

/// A quiz with its questions decoded from the stored JSON column.
pub struct StoredQuiz {
    pub id: i64,
    pub public_id: String,
    pub title: String,
    pub questions: Questions,
    pub created_at: String,
}

#[derive(sqlx::FromRow)]
pub struct ResultEntry {
    pub id: i64,
    pub quiz_title: String,
    pub user_name: String,
    pub score: i64,
    pub total: i64,
    pub created_at: String,
}

/// What the current session last looked at. `score`/`total`/`details` are
/// only set once a submission has been graded.
#[derive(sqlx::FromRow)]
pub struct ExportState {
    pub quiz_id: i64,
    pub user_name: Option<String>,
    pub score: Option<i64>,
    pub total: Option<i64>,
    pub details: Option<String>,
}
