//! Ports - interfaces between the application core and the outside world.
//!
//! Adapters implement these traits; handlers depend on them through
//! `Arc<dyn Trait>`.

mod ai_provider;
mod decision_repository;
mod health_check;
mod password_hasher;
mod scenario_generator;
mod scenario_repository;
mod session_validator;
mod token_issuer;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, RequestMetadata,
    Sampling,
};
pub use decision_repository::DecisionRepository;
pub use health_check::HealthCheck;
pub use password_hasher::PasswordHasher;
pub use scenario_generator::ScenarioGenerator;
pub use scenario_repository::ScenarioRepository;
pub use session_validator::SessionValidator;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use user_repository::UserRepository;
