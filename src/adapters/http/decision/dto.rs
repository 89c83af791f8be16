//! HTTP DTOs for decision endpoints.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use super::super::error::ErrorResponse;
use crate::application::DecisionView;
use crate::domain::decision::{Decision, DecisionCategory, DecisionContext, DecisionStatus};
use crate::domain::foundation::{ErrorCode, Timestamp};
use crate::domain::scenario::{Outcomes, RiskFactor, Scenario, TimelineEntry};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record a new decision.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDecisionRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: DecisionCategory,
    #[serde(default)]
    pub context: DecisionContext,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDecisionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<DecisionCategory>,
    pub context: Option<DecisionContext>,
    pub status: Option<DecisionStatus>,
}

/// Query parameters for listing decisions.
#[derive(Debug, Clone, Deserialize)]
pub struct ListDecisionsParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

/// Simulation parameters; both fall back to the defaults when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRequest {
    #[serde(default = "default_num_scenarios")]
    pub num_scenarios: i64,
    #[serde(default = "default_time_horizon")]
    pub time_horizon_years: i64,
}

fn default_num_scenarios() -> i64 {
    3
}

fn default_time_horizon() -> i64 {
    5
}

impl Default for SimulateRequest {
    fn default() -> Self {
        Self {
            num_scenarios: default_num_scenarios(),
            time_horizon_years: default_time_horizon(),
        }
    }
}

/// Simulate body extractor.
///
/// An empty body means all defaults. Anything else must decode as
/// `SimulateRequest` whatever the Content-Type: unparseable JSON is a 400,
/// well-formed JSON with wrong field types is a 422.
#[derive(Debug, Clone)]
pub struct SimulateBody(pub SimulateRequest);

#[async_trait]
impl<S> FromRequest<S> for SimulateBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(SimulateRequest::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(simulate_body_rejection)
    }
}

fn simulate_body_rejection(err: serde_json::Error) -> Response {
    let (status, body) = match err.classify() {
        Category::Data => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorResponse::new(ErrorCode::ValidationFailed, "Invalid simulation parameters"),
        ),
        Category::Syntax | Category::Eof | Category::Io => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request("Request body is not valid JSON"),
        ),
    };
    let body = body.with_details(serde_json::json!({ "error": err.to_string() }));
    (status, Json(body)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: DecisionCategory,
    pub context: DecisionContext,
    pub status: DecisionStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            id: decision.id().to_string(),
            user_id: decision.user_id().to_string(),
            title: decision.title().to_string(),
            description: decision.description().map(str::to_string),
            category: decision.category(),
            context: decision.context().clone(),
            status: decision.status(),
            created_at: *decision.created_at(),
            updated_at: *decision.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponse {
    pub id: String,
    pub decision_id: String,
    pub title: String,
    pub description: String,
    pub probability: f64,
    pub timeline_data: Vec<TimelineEntry>,
    pub outcomes: Outcomes,
    pub risks: Vec<RiskFactor>,
    pub recommendations: String,
    pub rank: u32,
    pub created_at: Timestamp,
}

impl From<&Scenario> for ScenarioResponse {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id().to_string(),
            decision_id: scenario.decision_id().to_string(),
            title: scenario.title().to_string(),
            description: scenario.description().to_string(),
            probability: scenario.probability(),
            timeline_data: scenario.timeline().to_vec(),
            outcomes: scenario.outcomes().clone(),
            risks: scenario.risks().to_vec(),
            recommendations: scenario.recommendations().to_string(),
            rank: scenario.rank(),
            created_at: *scenario.created_at(),
        }
    }
}

/// A decision with its scenarios in rank order.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionWithScenariosResponse {
    pub decision: DecisionResponse,
    pub scenarios: Vec<ScenarioResponse>,
}

impl From<DecisionView> for DecisionWithScenariosResponse {
    fn from(view: DecisionView) -> Self {
        Self {
            decision: DecisionResponse::from(&view.decision),
            scenarios: view.scenarios.iter().map(ScenarioResponse::from).collect(),
        }
    }
}
