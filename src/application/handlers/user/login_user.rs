//! LoginUserHandler - exchanges credentials for an access token.

use std::sync::Arc;

use crate::domain::user::{normalize_email, User, UserError};
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: IssuedToken,
}

pub struct LoginUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<dyn TokenIssuer>,
}

impl LoginUserHandler {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            repository,
            hasher,
            issuer,
        }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, UserError> {
        let email = normalize_email(&cmd.email).map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(&cmd.password, user.password_hash())? {
            tracing::debug!(user_id = %user.id(), "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }
        if !user.is_active() {
            return Err(UserError::Inactive);
        }

        let token = self.issuer.issue(&user)?;
        tracing::info!(user_id = %user.id(), "User logged in");

        Ok(LoginResult { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{Argon2PasswordHasher, JwtService};
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::UserId;
    use crate::ports::SessionValidator;
    use secrecy::Secret;

    struct Fixture {
        repo: Arc<InMemoryUserRepository>,
        jwt: Arc<JwtService>,
        handler: LoginUserHandler,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2PasswordHasher::new());
        let jwt = Arc::new(JwtService::new(
            &Secret::new("login-test-secret".to_string()),
            "lifeecho",
            30,
        ));

        let hash = hasher.hash("hunter2hunter2").unwrap();
        let user = User::new(UserId::new(), "kay@example.com", hash, None).unwrap();
        repo.save(&user).await.unwrap();

        let handler = LoginUserHandler::new(repo.clone(), hasher, jwt.clone());
        Fixture { repo, jwt, handler }
    }

    fn login(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn valid_credentials_issue_usable_token() {
        let f = fixture().await;

        let result = f
            .handler
            .handle(login("KAY@example.com", "hunter2hunter2"))
            .await
            .unwrap();

        assert_eq!(result.token.expires_in, 1800);
        let who = f.jwt.validate(&result.token.access_token).await.unwrap();
        assert_eq!(who.id, *result.user.id());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let f = fixture().await;

        let wrong_password = f
            .handler
            .handle(login("kay@example.com", "nope-nope-nope"))
            .await
            .unwrap_err();
        let unknown = f
            .handler
            .handle(login("nobody@example.com", "hunter2hunter2"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password, UserError::InvalidCredentials);
        assert_eq!(unknown, UserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn inactive_account_cannot_log_in() {
        let f = fixture().await;
        let hasher = Argon2PasswordHasher::new();
        let mut user = User::new(
            UserId::new(),
            "gone@example.com",
            hasher.hash("hunter2hunter2").unwrap(),
            None,
        )
        .unwrap();
        user.deactivate();
        f.repo.save(&user).await.unwrap();

        let err = f
            .handler
            .handle(login("gone@example.com", "hunter2hunter2"))
            .await
            .unwrap_err();

        assert_eq!(err, UserError::Inactive);
    }
}
