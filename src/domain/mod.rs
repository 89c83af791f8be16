//! Domain layer - pure types and logic with no I/O.

pub mod decision;
pub mod foundation;
pub mod scenario;
pub mod user;
