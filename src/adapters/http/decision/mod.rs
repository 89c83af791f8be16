//! HTTP adapter for decision endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateDecisionRequest, DecisionResponse, DecisionWithScenariosResponse, ListDecisionsParams,
    ScenarioResponse, SimulateBody, SimulateRequest, UpdateDecisionRequest,
};
pub use handlers::DecisionHandlers;
pub use routes::decision_routes;
