//! PostgreSQL adapters - sqlx implementations of the repository ports.
//!
//! - `PostgresUserRepository` - accounts
//! - `PostgresDecisionRepository` - decisions, context as JSONB
//! - `PostgresScenarioRepository` - scenario sets, replaced transactionally
//! - `PostgresHealthCheck` - `/health` database probe

mod decision_repository;
mod health;
mod scenario_repository;
mod user_repository;

pub use decision_repository::PostgresDecisionRepository;
pub use health::PostgresHealthCheck;
pub use scenario_repository::PostgresScenarioRepository;
pub use user_repository::PostgresUserRepository;
