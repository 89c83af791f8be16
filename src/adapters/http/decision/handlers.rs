//! HTTP handlers for decision endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{decision_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler,
    GetDecisionHandler, GetDecisionQuery, ListDecisionsHandler, ListDecisionsQuery,
    SimulateDecisionCommand, SimulateDecisionHandler, UpdateDecisionCommand,
    UpdateDecisionHandler,
};
use crate::domain::decision::DecisionError;
use crate::domain::foundation::DecisionId;

use super::dto::{
    CreateDecisionRequest, DecisionResponse, DecisionWithScenariosResponse, ListDecisionsParams,
    SimulateBody, UpdateDecisionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DecisionHandlers {
    create_handler: Arc<CreateDecisionHandler>,
    list_handler: Arc<ListDecisionsHandler>,
    get_handler: Arc<GetDecisionHandler>,
    update_handler: Arc<UpdateDecisionHandler>,
    delete_handler: Arc<DeleteDecisionHandler>,
    simulate_handler: Arc<SimulateDecisionHandler>,
    verbose_errors: bool,
}

impl DecisionHandlers {
    pub fn new(
        create_handler: Arc<CreateDecisionHandler>,
        list_handler: Arc<ListDecisionsHandler>,
        get_handler: Arc<GetDecisionHandler>,
        update_handler: Arc<UpdateDecisionHandler>,
        delete_handler: Arc<DeleteDecisionHandler>,
        simulate_handler: Arc<SimulateDecisionHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
            simulate_handler,
            verbose_errors: false,
        }
    }

    /// Include infrastructure error detail in 500 responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    fn error(&self, error: DecisionError) -> Response {
        decision_error_response(error, self.verbose_errors)
    }
}

fn parse_decision_id(raw: &str) -> Result<DecisionId, Response> {
    raw.parse::<DecisionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid decision ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/decisions - Record a new decision
pub async fn create_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateDecisionRequest>,
) -> Response {
    let cmd = CreateDecisionCommand {
        user_id: user.id,
        title: req.title,
        description: req.description,
        category: req.category,
        context: req.context,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(decision) => {
            (StatusCode::CREATED, Json(DecisionResponse::from(&decision))).into_response()
        }
        Err(e) => handlers.error(e),
    }
}

/// GET /api/v1/decisions - List the caller's decisions, most recent first
pub async fn list_decisions(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListDecisionsParams>,
) -> Response {
    let query = ListDecisionsQuery {
        user_id: user.id,
        skip: params.skip,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(decisions) => {
            let body: Vec<DecisionResponse> = decisions.iter().map(DecisionResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handlers.error(e),
    }
}

/// GET /api/v1/decisions/:id - Decision with its scenarios
pub async fn get_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetDecisionQuery {
        decision_id,
        user_id: user.id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(view) => {
            (StatusCode::OK, Json(DecisionWithScenariosResponse::from(view))).into_response()
        }
        Err(e) => handlers.error(e),
    }
}

/// PUT /api/v1/decisions/:id - Partial update
pub async fn update_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(decision_id): Path<String>,
    Json(req): Json<UpdateDecisionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateDecisionCommand {
        decision_id,
        user_id: user.id,
        title: req.title,
        description: req.description,
        category: req.category,
        context: req.context,
        status: req.status,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(decision) => (StatusCode::OK, Json(DecisionResponse::from(&decision))).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// DELETE /api/v1/decisions/:id - Remove a decision and its scenarios
pub async fn delete_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteDecisionCommand {
        decision_id,
        user_id: user.id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/v1/decisions/:id/simulate - Generate and store scenarios
pub async fn simulate_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(decision_id): Path<String>,
    SimulateBody(req): SimulateBody,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::info!(
        decision_id = %decision_id,
        num_scenarios = req.num_scenarios,
        time_horizon_years = req.time_horizon_years,
        "Simulation requested"
    );

    let cmd = SimulateDecisionCommand {
        decision_id,
        user_id: user.id,
        num_scenarios: req.num_scenarios,
        time_horizon_years: req.time_horizon_years,
    };

    match handlers.simulate_handler.handle(cmd).await {
        Ok(view) => {
            (StatusCode::OK, Json(DecisionWithScenariosResponse::from(view))).into_response()
        }
        Err(e) => handlers.error(e),
    }
}
