//! Service banner and health endpoints.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::ports::HealthCheck;

pub const APP_NAME: &str = "LifeEcho AI";
pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub database: String,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {} API", APP_NAME),
        version: API_VERSION,
    })
}

/// GET /health - always 200; the database probe result is reported in the body.
pub async fn health(State(check): State<Arc<dyn HealthCheck>>) -> Json<HealthResponse> {
    let database = match check.check().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            format!("error: {}", e)
        }
    };

    Json(HealthResponse {
        status: "healthy",
        app: APP_NAME,
        database,
    })
}

pub fn system_routes(check: Arc<dyn HealthCheck>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryHealthCheck;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> serde_json::Value {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_version() {
        let app = system_routes(Arc::new(InMemoryHealthCheck::healthy()));
        let body = get_json(app, "/").await;
        assert_eq!(body["message"], "Welcome to LifeEcho AI API");
        assert_eq!(body["version"], "v1");
    }

    #[tokio::test]
    async fn health_reports_connected_database() {
        let app = system_routes(Arc::new(InMemoryHealthCheck::healthy()));
        let body = get_json(app, "/health").await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["app"], "LifeEcho AI");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn health_stays_200_when_database_is_down() {
        let app = system_routes(Arc::new(InMemoryHealthCheck::failing("connection refused")));
        let body = get_json(app, "/health").await;
        assert_eq!(body["database"], "error: connection refused");
    }
}
