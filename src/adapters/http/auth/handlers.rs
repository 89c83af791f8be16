//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::user_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    GetCurrentUserHandler, GetCurrentUserQuery, LoginCommand, LoginUserHandler,
    RegisterUserCommand, RegisterUserHandler,
};

use super::dto::{LoginCredentials, RegisterRequest, TokenResponse, UserResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterUserHandler>,
    login_handler: Arc<LoginUserHandler>,
    current_user_handler: Arc<GetCurrentUserHandler>,
    verbose_errors: bool,
}

impl AuthHandlers {
    pub fn new(
        register_handler: Arc<RegisterUserHandler>,
        login_handler: Arc<LoginUserHandler>,
        current_user_handler: Arc<GetCurrentUserHandler>,
    ) -> Self {
        Self {
            register_handler,
            login_handler,
            current_user_handler,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/auth/register - Create an account
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        email: req.email,
        password: req.password,
        full_name: req.full_name,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(user) => (StatusCode::CREATED, Json(UserResponse::from(&user))).into_response(),
        Err(e) => user_error_response(e, handlers.verbose_errors),
    }
}

/// POST /api/v1/auth/login - Exchange credentials for a bearer token
pub async fn login(
    State(handlers): State<AuthHandlers>,
    credentials: LoginCredentials,
) -> Response {
    let cmd = LoginCommand {
        email: credentials.email,
        password: credentials.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(TokenResponse::from(result.token))).into_response(),
        Err(e) => user_error_response(e, handlers.verbose_errors),
    }
}

/// GET /api/v1/auth/me - Account behind the bearer token
pub async fn me(State(handlers): State<AuthHandlers>, RequireAuth(user): RequireAuth) -> Response {
    let query = GetCurrentUserQuery { user_id: user.id };

    match handlers.current_user_handler.handle(query).await {
        Ok(user) => (StatusCode::OK, Json(UserResponse::from(&user))).into_response(),
        Err(e) => user_error_response(e, handlers.verbose_errors),
    }
}
