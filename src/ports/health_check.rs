//! Dependency health check port.

use async_trait::async_trait;

/// Probes one backing dependency for the `/health` endpoint.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns a description of the failure when the dependency is down.
    async fn check(&self) -> Result<(), String>;
}
