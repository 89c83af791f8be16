//! LifeEcho - decision journaling with simulated futures.
//!
//! Users record decisions and ask the service to project a handful of
//! possible futures for each one, generated by an external language model
//! or by built-in archetype templates when no model is available.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
