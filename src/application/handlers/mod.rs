//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations through
//! ports.

pub mod decision;
pub mod user;
