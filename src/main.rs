//! LifeEcho API server.

use std::sync::Arc;

use http::{HeaderName, HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lifeecho::adapters::auth::{Argon2PasswordHasher, JwtService};
use lifeecho::adapters::http::{api_router, ApiServices};
use lifeecho::adapters::postgres::{
    PostgresDecisionRepository, PostgresHealthCheck, PostgresScenarioRepository,
    PostgresUserRepository,
};
use lifeecho::adapters::scenario::select_scenario_generator;
use lifeecho::config::AppConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server terminated with error");
        std::process::exit(1);
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let jwt = Arc::new(JwtService::new(
        &config.auth.jwt_secret,
        config.auth.issuer.clone(),
        config.auth.token_ttl_minutes,
    ));
    let generator = select_scenario_generator(&config.ai, &config.features)?;
    tracing::info!(generator = generator.name(), "Scenario generator selected");

    let services = ApiServices {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        decisions: Arc::new(PostgresDecisionRepository::new(pool.clone())),
        scenarios: Arc::new(PostgresScenarioRepository::new(pool.clone())),
        generator,
        hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: jwt.clone(),
        sessions: jwt,
        health: Arc::new(PostgresHealthCheck::new(pool)),
        verbose_errors: config.features.verbose_errors,
    };

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let app = api_router(services)
        .layer(cors_layer(&config.server.cors_origins_list()))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "LifeEcho API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
