//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum signing secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Local JWT issuing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Secret<String>,

    /// Access token lifetime in minutes
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,

    /// `iss` claim written to and required on tokens
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl AuthConfig {
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret_len = self.jwt_secret.expose_secret().len();
        if secret_len == 0 {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret_len < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        if !(1..=10_080).contains(&self.token_ttl_minutes) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Secret::new(String::new()),
            token_ttl_minutes: default_token_ttl(),
            issuer: default_issuer(),
        }
    }
}

fn default_token_ttl() -> i64 {
    30
}

fn default_issuer() -> String {
    "lifeecho".to_string()
}
