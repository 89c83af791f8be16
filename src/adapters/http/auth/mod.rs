//! HTTP adapter for account endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginCredentials, LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
