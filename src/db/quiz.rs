use color_eyre::Result;
use ulid::Ulid;

use super::models::{QuizRow, StoredQuiz};
use super::Db;
use crate::models::Questions;

impl Db {
    /// Insert a quiz with its questions serialized as a JSON column.
    /// Returns the public_id (ULID) of the newly created quiz.
    pub async fn create_quiz(
        &self,
        title: &str,
        questions: &Questions,
        owner_id: i64,
    ) -> Result<String> {
        let public_id = Ulid::new().to_string();
        let questions_json = serde_json::to_string(questions)?;

        let quiz_id: i64 = sqlx::query_scalar(
            "INSERT INTO quizzes (public_id, title, questions, owner_id) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&public_id)
        .bind(title)
        .bind(questions_json)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new quiz created with id: {quiz_id} for user_id: {owner_id}");
        Ok(public_id)
    }

    pub async fn get_quiz(&self, public_id: &str) -> Result<Option<StoredQuiz>> {
        let row = sqlx::query_as::<_, QuizRow>(
            "SELECT id, public_id, title, questions, created_at FROM quizzes WHERE public_id = ?",
        )
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_quiz).transpose()
    }

    pub async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<StoredQuiz>> {
        let row = sqlx::query_as::<_, QuizRow>(
            "SELECT id, public_id, title, questions, created_at FROM quizzes WHERE id = ?",
        )
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_quiz).transpose()
    }
}

fn decode_quiz(row: QuizRow) -> Result<StoredQuiz> {
    let questions: Questions = serde_json::from_str(&row.questions)?;
    Ok(StoredQuiz {
        id: row.id,
        public_id: row.public_id,
        title: row.title,
        questions,
        created_at: row.created_at,
    })
}
