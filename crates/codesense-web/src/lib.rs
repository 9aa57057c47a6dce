//! CodeSense Web Server
//!
//! Axum-based HTTP API relaying code reviews to the Gemini API.

pub mod error;
pub mod routes;
pub mod state;


use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use codesense_core::{Reviewer, UpstreamConfig};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Origins allowed to call the API from a browser unless configured otherwise.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://codesense-suraj0-11s-projects.vercel.app",
    "http://localhost:5173",
    "http://localhost:3000",
];

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub upstream: UpstreamConfig,
}

/// Build a CORS layer that only admits the given origins.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("Invalid allowed origin: {:?}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Create the application router.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/ping", get(routes::ping::ping))
        .route("/review", post(routes::review::review))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(error::panic_response))
                .layer(cors),
        )
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let cors = cors_layer(&config.allowed_origins)?;
    let state = AppState::new(Reviewer::new(&config.upstream)?);
    let app = create_router(state, cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        origins = ?config.allowed_origins,
        "Web server listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down web server");
}
