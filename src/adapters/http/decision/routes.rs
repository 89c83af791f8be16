//! HTTP routes for decision endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_decision, delete_decision, get_decision, list_decisions, simulate_decision,
    update_decision, DecisionHandlers,
};

/// Creates the decision router, mounted under `/api/v1/decisions`.
pub fn decision_routes(handlers: DecisionHandlers) -> Router {
    Router::new()
        .route("/", post(create_decision).get(list_decisions))
        .route(
            "/:id",
            get(get_decision).put(update_decision).delete(delete_decision),
        )
        .route("/:id/simulate", post(simulate_decision))
        .with_state(handlers)
}
