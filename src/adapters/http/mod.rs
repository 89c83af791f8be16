//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; `api_router` wires them
//! together with the bearer-token middleware.

pub mod auth;
pub mod decision;
pub mod error;
pub mod middleware;
pub mod system;

use std::sync::Arc;

use axum::Router;

use crate::application::{
    CreateDecisionHandler, DeleteDecisionHandler, GetCurrentUserHandler, GetDecisionHandler,
    ListDecisionsHandler, LoginUserHandler, RegisterUserHandler, SimulateDecisionHandler,
    UpdateDecisionHandler,
};
use crate::ports::{
    DecisionRepository, HealthCheck, PasswordHasher, ScenarioGenerator, ScenarioRepository,
    SessionValidator, TokenIssuer, UserRepository,
};

pub use auth::{auth_routes, AuthHandlers};
pub use decision::{decision_routes, DecisionHandlers};
pub use error::ErrorResponse;
pub use system::system_routes;

/// Everything the HTTP surface needs, as port trait objects.
#[derive(Clone)]
pub struct ApiServices {
    pub users: Arc<dyn UserRepository>,
    pub decisions: Arc<dyn DecisionRepository>,
    pub scenarios: Arc<dyn ScenarioRepository>,
    pub generator: Arc<dyn ScenarioGenerator>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub sessions: Arc<dyn SessionValidator>,
    pub health: Arc<dyn HealthCheck>,
    pub verbose_errors: bool,
}

/// Builds the full router: `/`, `/health`, and everything under `/api/v1`.
pub fn api_router(services: ApiServices) -> Router {
    let auth_handlers = AuthHandlers::new(
        Arc::new(RegisterUserHandler::new(
            services.users.clone(),
            services.hasher.clone(),
        )),
        Arc::new(LoginUserHandler::new(
            services.users.clone(),
            services.hasher.clone(),
            services.tokens.clone(),
        )),
        Arc::new(GetCurrentUserHandler::new(services.users.clone())),
    )
    .with_verbose_errors(services.verbose_errors);

    let decision_handlers = DecisionHandlers::new(
        Arc::new(CreateDecisionHandler::new(services.decisions.clone())),
        Arc::new(ListDecisionsHandler::new(services.decisions.clone())),
        Arc::new(GetDecisionHandler::new(
            services.decisions.clone(),
            services.scenarios.clone(),
        )),
        Arc::new(UpdateDecisionHandler::new(services.decisions.clone())),
        Arc::new(DeleteDecisionHandler::new(
            services.decisions.clone(),
            services.scenarios.clone(),
        )),
        Arc::new(SimulateDecisionHandler::new(
            services.decisions.clone(),
            services.scenarios.clone(),
            services.generator.clone(),
        )),
    )
    .with_verbose_errors(services.verbose_errors);

    let api = Router::new()
        .nest("/auth", auth_routes(auth_handlers))
        .nest("/decisions", decision_routes(decision_handlers))
        .layer(axum::middleware::from_fn_with_state(
            services.sessions.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api/v1", api)
        .merge(system_routes(services.health))
}
