//! Runtime settings for the LifeEcho server.
//!
//! Read from `LIFEECHO__<SECTION>__<KEY>` environment variables (after an
//! optional `.env`) through the `config` crate:
//!
//! ```no_run
//! use lifeecho::config::AppConfig;
//!
//! let settings = AppConfig::load()?;
//! settings.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod features;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// All settings sections.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Required: there is no default connection string.
    pub database: DatabaseConfig,

    /// Required: the signing secret has no default.
    pub auth: AuthConfig,

    /// Provider keys are optional; without them scenarios come from templates.
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` when present, then the `LIFEECHO__*` variables:
    ///
    /// - `LIFEECHO__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `LIFEECHO__DATABASE__URL=...` -> `database.url = ...`
    /// - `LIFEECHO__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = Some(...)`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a value
    /// cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(ConfigError::DotEnv(err.to_string()));
            }
        }

        let source = config::Environment::with_prefix("LIFEECHO").separator("__");
        let settings = config::Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Checks each section in turn and stops at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const DATABASE_URL: &str = "postgresql://test@localhost/lifeecho";

    /// Loads with exactly `vars` set, then removes them again.
    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let loaded = AppConfig::load();
        for (key, _) in vars {
            env::remove_var(key);
        }
        loaded
    }

    fn minimal() -> Vec<(&'static str, &'static str)> {
        vec![
            ("LIFEECHO__DATABASE__URL", DATABASE_URL),
            ("LIFEECHO__AUTH__JWT_SECRET", "local-development-secret"),
        ]
    }

    #[test]
    fn minimal_environment_loads_and_validates() {
        let config = load_with(&minimal()).expect("minimal environment should load");

        assert_eq!(config.database.url, DATABASE_URL);
        assert_eq!(config.auth.token_ttl_minutes, 30);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(!config.ai.has_any_provider());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn jwt_secret_is_required() {
        let loaded = load_with(&[("LIFEECHO__DATABASE__URL", DATABASE_URL)]);
        assert!(loaded.is_err());
    }

    #[test]
    fn nested_keys_override_defaults() {
        let mut vars = minimal();
        vars.extend([
            ("LIFEECHO__SERVER__PORT", "3000"),
            ("LIFEECHO__AI__OPENAI_API_KEY", "sk-test"),
            ("LIFEECHO__AI__PRIMARY_PROVIDER", "anthropic"),
            ("LIFEECHO__FEATURES__FORCE_MOCK_SCENARIOS", "true"),
        ]);
        let config = load_with(&vars).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.openai_key(), Some("sk-test"));
        assert_eq!(config.ai.primary_provider, AiProvider::Anthropic);
        assert!(config.features.force_mock_scenarios);
    }

    #[test]
    fn production_rejects_short_secret() {
        let mut vars = minimal();
        vars.push(("LIFEECHO__SERVER__ENVIRONMENT", "production"));
        let config = load_with(&vars).unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES))
        );
    }
}
