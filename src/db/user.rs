use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use color_eyre::{eyre::eyre, Result};
use ulid::Ulid;

use super::models::AuthUser;
use super::Db;

impl Db {
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<i64> {
        let password_hash = hash_password(password)?;

        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash, display_name) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new user created: id={user_id}, email={email}");
        Ok(user_id)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            "SELECT id, email, display_name FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn verify_user_password(&self, email: &str, password: &str) -> Result<bool> {
        let stored_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        match stored_hash {
            Some(hash) => Ok(verify_password(password, &hash)),
            None => Ok(false),
        }
    }

    pub async fn create_user_session(&self, user_id: i64) -> Result<String> {
        let session = Ulid::new().to_string();

        sqlx::query("INSERT INTO user_sessions (id, user_id) VALUES (?, ?)")
            .bind(&session)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("new user session created for user_id={user_id}");
        Ok(session)
    }

    pub async fn get_user_by_session(&self, session_id: &str) -> Result<Option<AuthUser>> {
        let user = sqlx::query_as::<_, AuthUser>(
            r#"
            SELECT u.id, u.email, u.display_name
            FROM user_sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete_user_session(&self, session_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM user_sessions WHERE id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
