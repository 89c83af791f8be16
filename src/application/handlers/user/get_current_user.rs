//! GetCurrentUserHandler - loads the account behind a validated token.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetCurrentUserQuery {
    pub user_id: UserId,
}

pub struct GetCurrentUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetCurrentUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCurrentUserQuery) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or(UserError::NotFound)?;
        if !user.is_active() {
            return Err(UserError::Inactive);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn returns_saved_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = User::new(UserId::new(), "me@example.com", "hash".to_string(), None).unwrap();
        repo.save(&user).await.unwrap();

        let found = GetCurrentUserHandler::new(repo)
            .handle(GetCurrentUserQuery { user_id: *user.id() })
            .await
            .unwrap();

        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn deleted_account_is_not_found() {
        let err = GetCurrentUserHandler::new(Arc::new(InMemoryUserRepository::new()))
            .handle(GetCurrentUserQuery {
                user_id: UserId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::NotFound);
    }
}
