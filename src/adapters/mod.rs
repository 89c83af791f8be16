//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application core to external systems:
//! - `ai` - OpenAI and Anthropic completion clients
//! - `auth` - JWT issuing/validation and Argon2 password hashing
//! - `http` - axum REST API
//! - `memory` - in-memory repositories for tests
//! - `postgres` - sqlx repositories
//! - `scenario` - scenario generation strategies

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod scenario;
