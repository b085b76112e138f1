use color_eyre::Result;

use super::models::ResultEntry;
use super::Db;

impl Db {
    pub async fn insert_result(
        &self,
        quiz_id: i64,
        user_id: i64,
        user_name: &str,
        score: i64,
        total: i64,
    ) -> Result<i64> {
        let result_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO quiz_results (quiz_id, user_id, user_name, score, total)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(quiz_id)
        .bind(user_id)
        .bind(user_name)
        .bind(score)
        .bind(total)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "quiz result recorded: quiz_id={quiz_id}, user_id={user_id}, score={score}/{total}"
        );
        Ok(result_id)
    }

    /// Past results for one account, newest first.
    pub async fn results_for_user(&self, user_id: i64) -> Result<Vec<ResultEntry>> {
        let results = sqlx::query_as::<_, ResultEntry>(
            r#"
            SELECT
              r.id AS id,
              q.title AS quiz_title,
              r.user_name AS user_name,
              r.score AS score,
              r.total AS total,
              r.created_at AS created_at
            FROM quiz_results r
            JOIN quizzes q ON q.id = r.quiz_id
            WHERE r.user_id = ?
            ORDER BY r.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }
}
