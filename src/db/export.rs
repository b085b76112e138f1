use color_eyre::Result;

use super::models::ExportState;
use super::Db;

impl Db {
    /// Remember the quiz this session is currently looking at, clearing any
    /// previously graded result.
    pub async fn set_viewed_quiz(&self, session_id: &str, quiz_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO export_state (session_id, quiz_id, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(session_id) DO UPDATE SET
              quiz_id = excluded.quiz_id,
              user_name = NULL,
              score = NULL,
              total = NULL,
              details = NULL,
              updated_at = excluded.updated_at
            "#,
        )
        .bind(session_id)
        .bind(quiz_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store the graded result for this session so it can be exported.
    pub async fn set_graded_result(
        &self,
        session_id: &str,
        quiz_id: i64,
        user_name: &str,
        score: i64,
        total: i64,
        details_json: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO export_state (session_id, quiz_id, user_name, score, total, details, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, datetime('now'))
            ON CONFLICT(session_id) DO UPDATE SET
              quiz_id = excluded.quiz_id,
              user_name = excluded.user_name,
              score = excluded.score,
              total = excluded.total,
              details = excluded.details,
              updated_at = excluded.updated_at
            "#,
        )
        .bind(session_id)
        .bind(quiz_id)
        .bind(user_name)
        .bind(score)
        .bind(total)
        .bind(details_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn export_state(&self, session_id: &str) -> Result<Option<ExportState>> {
        let state = sqlx::query_as::<_, ExportState>(
            r#"
            SELECT quiz_id, user_name, score, total, details
            FROM export_state
            WHERE session_id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(state)
    }
}
