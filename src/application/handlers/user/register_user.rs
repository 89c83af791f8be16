//! RegisterUserHandler - creates a local account.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{normalize_email, validate_password, User, UserError};
use crate::ports::{PasswordHasher, UserRepository};

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, UserError> {
        let email = normalize_email(&cmd.email)?;
        validate_password(&cmd.password)?;

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let hash = self.hasher.hash(&cmd.password)?;
        let user = User::new(UserId::new(), &email, hash, cmd.full_name)?;

        // Unique index still guards the race between lookup and insert
        self.repository.save(&user).await?;

        tracing::info!(user_id = %user.id(), "User registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::Argon2PasswordHasher;
    use crate::adapters::memory::InMemoryUserRepository;

    fn handler() -> RegisterUserHandler {
        RegisterUserHandler::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2PasswordHasher::new()),
        )
    }

    fn command(email: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            email: email.to_string(),
            password: password.to_string(),
            full_name: Some("Grace Hopper".to_string()),
        }
    }

    #[tokio::test]
    async fn registers_with_hashed_password() {
        let user = handler()
            .handle(command("Grace@Navy.mil", "cobol-forever"))
            .await
            .unwrap();

        assert_eq!(user.email(), "grace@navy.mil");
        assert_ne!(user.password_hash(), "cobol-forever");
        assert!(user.is_active());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let handler = handler();
        handler.handle(command("grace@navy.mil", "cobol-forever")).await.unwrap();

        let err = handler
            .handle(command("GRACE@navy.mil", "another-password"))
            .await
            .unwrap_err();

        assert_eq!(err, UserError::EmailTaken);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let err = handler().handle(command("a@b.io", "short")).await.unwrap_err();
        assert!(matches!(err, UserError::ValidationFailed { ref field, .. } if field == "password"));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let err = handler()
            .handle(command("not-an-email", "long-enough"))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::ValidationFailed { ref field, .. } if field == "email"));
    }
}
