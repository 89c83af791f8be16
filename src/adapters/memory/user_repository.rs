use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// In-memory account store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.users
            .read()
            .expect("InMemoryUserRepository: lock poisoned")
            .len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self
            .users
            .write()
            .expect("InMemoryUserRepository: lock poisoned");
        if users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Email already registered: {}", user.email()),
            ));
        }
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .expect("InMemoryUserRepository: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .expect("InMemoryUserRepository: lock poisoned")
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(UserId::new(), email, "hash".to_string(), None).unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.save(&user("a@example.com")).await.unwrap();

        let err = repo.save(&user("A@Example.com")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn finds_by_email_and_id() {
        let repo = InMemoryUserRepository::new();
        let saved = user("b@example.com");
        repo.save(&saved).await.unwrap();

        assert_eq!(repo.find_by_email("b@example.com").await.unwrap(), Some(saved.clone()));
        assert_eq!(repo.find_by_id(saved.id()).await.unwrap(), Some(saved));
        assert_eq!(repo.find_by_email("c@example.com").await.unwrap(), None);
    }
}
