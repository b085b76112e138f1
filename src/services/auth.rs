use color_eyre::Result;

use crate::db::models::AuthUser;
use crate::db::Db;

pub const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// AuthRepository trait (the service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait AuthRepository: Send + Sync {
    fn email_exists(&self, email: &str) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;

    fn create_user_session(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    fn verify_user_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn find_user_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<AuthUser>>> + Send;

    fn delete_user_session(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

impl AuthRepository for Db {
    async fn email_exists(&self, email: &str) -> Result<bool> {
        Db::email_exists(self, email).await
    }

    async fn create_user(&self, email: &str, password: &str, display_name: &str) -> Result<i64> {
        Db::create_user(self, email, password, display_name).await
    }

    async fn create_user_session(&self, user_id: i64) -> Result<String> {
        Db::create_user_session(self, user_id).await
    }

    async fn verify_user_password(&self, email: &str, password: &str) -> Result<bool> {
        Db::verify_user_password(self, email, password).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>> {
        Db::find_user_by_email(self, email).await
    }

    async fn delete_user_session(&self, session_id: &str) -> Result<()> {
        Db::delete_user_session(self, session_id).await
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

pub enum RegisterOutcome {
    /// User created; the caller sends them to the login page.
    Success,
    /// Required fields were empty.
    EmptyFields,
    /// Email already in use.
    EmailTaken,
    /// Password does not meet minimum requirements.
    WeakPassword,
}

pub enum LoginOutcome {
    /// Login succeeded. Contains the session token.
    Success(String),
    /// Password was incorrect (or email not found).
    InvalidCredentials,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AuthService<R: AuthRepository> {
    repo: R,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<RegisterOutcome> {
        if email.is_empty() || password.is_empty() || display_name.is_empty() {
            return Ok(RegisterOutcome::EmptyFields);
        }

        if password.len() < MIN_PASSWORD_LENGTH {
            return Ok(RegisterOutcome::WeakPassword);
        }

        if self.repo.email_exists(email).await? {
            return Ok(RegisterOutcome::EmailTaken);
        }

        self.repo.create_user(email, password, display_name).await?;

        Ok(RegisterOutcome::Success)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        if !self.repo.verify_user_password(email, password).await? {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        let Some(user) = self.repo.find_user_by_email(email).await? else {
            return Ok(LoginOutcome::InvalidCredentials);
        };

        let token = self.repo.create_user_session(user.id).await?;

        Ok(LoginOutcome::Success(token))
    }

    pub async fn logout(&self, session_id: &str) -> Result<()> {
        self.repo.delete_user_session(session_id).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(mock: MockAuthRepository) -> AuthService<MockAuthRepository> {
        AuthService::new(mock)
    }

    #[tokio::test]
    async fn login_success_returns_session_token() {
        let mut mock = MockAuthRepository::new();
        mock.expect_verify_user_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        mock.expect_find_user_by_email().returning(|_| {
            Box::pin(async {
                Ok(Some(AuthUser {
                    id: 1,
                    email: "test@example.com".to_string(),
                    display_name: "Test".to_string(),
                }))
            })
        });
        mock.expect_create_user_session()
            .returning(|_| Box::pin(async { Ok("session-token-123".to_string()) }));

        let svc = service(mock);
        let outcome = svc.login("test@example.com", "password").await.unwrap();

        assert!(matches!(outcome, LoginOutcome::Success(ref t) if t == "session-token-123"));
    }

    #[tokio::test]
    async fn login_wrong_password_returns_invalid_credentials() {
        let mut mock = MockAuthRepository::new();
        mock.expect_verify_user_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let svc = service(mock);
        let outcome = svc.login("test@example.com", "wrong").await.unwrap();

        assert!(matches!(outcome, LoginOutcome::InvalidCredentials));
    }

    #[tokio::test]
    async fn register_creates_user() {
        let mut mock = MockAuthRepository::new();
        mock.expect_email_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        mock.expect_create_user()
            .returning(|_, _, _| Box::pin(async { Ok(1) }));

        let svc = service(mock);
        let outcome = svc
            .register("new@example.com", "long-enough-password", "New User")
            .await
            .unwrap();

        assert!(matches!(outcome, RegisterOutcome::Success));
    }

    #[tokio::test]
    async fn register_rejects_empty_fields() {
        let svc = service(MockAuthRepository::new());
        let outcome = svc.register("", "password123", "Name").await.unwrap();
        assert!(matches!(outcome, RegisterOutcome::EmptyFields));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let svc = service(MockAuthRepository::new());
        let outcome = svc.register("a@b.c", "short", "Name").await.unwrap();
        assert!(matches!(outcome, RegisterOutcome::WeakPassword));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut mock = MockAuthRepository::new();
        mock.expect_email_exists()
            .returning(|_| Box::pin(async { Ok(true) }));

        let svc = service(mock);
        let outcome = svc
            .register("taken@example.com", "long-enough-password", "Name")
            .await
            .unwrap();

        assert!(matches!(outcome, RegisterOutcome::EmailTaken));
    }
}
