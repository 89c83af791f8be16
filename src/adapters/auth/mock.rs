//! In-memory `SessionValidator` for tests: a fixed token table plus an
//! optional error that overrides it.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Unknown tokens return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    sessions: RwLock<HashMap<String, AuthenticatedUser>>,
    outage: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.sessions_mut().insert(token.into(), user);
        self
    }

    /// Registers a token for a fresh user and returns that user's id.
    pub fn add_test_user(&self, token: impl Into<String>) -> UserId {
        let id = UserId::new();
        let user = AuthenticatedUser::new(id, format!("{}@test.example.com", id), None);
        self.sessions_mut().insert(token.into(), user);
        id
    }

    pub fn with_error(self, error: AuthError) -> Self {
        *self.outage.write().expect("MockSessionValidator: lock poisoned") = Some(error);
        self
    }

    fn sessions_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, AuthenticatedUser>> {
        self.sessions.write().expect("MockSessionValidator: lock poisoned")
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let outage = self.outage.read().expect("MockSessionValidator: lock poisoned").clone();
        if let Some(error) = outage {
            return Err(error);
        }

        self.sessions
            .read()
            .expect("MockSessionValidator: lock poisoned")
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
