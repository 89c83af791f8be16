//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::decision::{
    CreateDecisionCommand, CreateDecisionHandler, DecisionView, DeleteDecisionCommand,
    DeleteDecisionHandler, GetDecisionHandler, GetDecisionQuery, ListDecisionsHandler,
    ListDecisionsQuery, SimulateDecisionCommand, SimulateDecisionHandler, UpdateDecisionCommand,
    UpdateDecisionHandler,
};
pub use handlers::user::{
    GetCurrentUserHandler, GetCurrentUserQuery, LoginCommand, LoginResult, LoginUserHandler,
    RegisterUserCommand, RegisterUserHandler,
};
