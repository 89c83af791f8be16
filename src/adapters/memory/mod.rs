//! In-memory repository implementations.
//!
//! These back unit and HTTP integration tests. Methods panic if an
//! internal lock is poisoned, so they are not meant for production use.

mod decision_repository;
mod health;
mod scenario_repository;
mod user_repository;

pub use decision_repository::InMemoryDecisionRepository;
pub use health::InMemoryHealthCheck;
pub use scenario_repository::InMemoryScenarioRepository;
pub use user_repository::InMemoryUserRepository;
