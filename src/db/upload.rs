use color_eyre::Result;

use super::Db;

impl Db {
    /// Record metadata for an upload. The file bytes themselves are consumed
    /// by text extraction and never stored.
    pub async fn record_upload(&self, file_name: &str, kind: &str, byte_len: i64) -> Result<i64> {
        let upload_id: i64 = sqlx::query_scalar(
            "INSERT INTO uploads (file_name, kind, byte_len) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(file_name)
        .bind(kind)
        .bind(byte_len)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("upload recorded: {file_name} ({kind}, {byte_len} bytes)");
        Ok(upload_id)
    }
}
