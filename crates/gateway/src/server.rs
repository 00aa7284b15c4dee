//! Axum-based HTTP server for the gateway.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use estate_chat_core::{config::AppConfig, traits::Controller, Error, Result};

/// Message returned for every failure that is not the caller's fault.
pub const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again later.";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Browser origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    /// Enable request tracing.
    pub enable_tracing: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            enable_tracing: true,
        }
    }
}

impl GatewayConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            allowed_origins: config.gateway.normalized_origins(),
            enable_tracing: config.gateway.enable_tracing,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Runs one chat message to a final answer.
    pub controller: Arc<dyn Controller>,
}

/// Gateway server.
pub struct GatewayServer {
    config: GatewayConfig,
    state: Arc<AppState>,
    metrics_handle: Option<PrometheusHandle>,
}

impl GatewayServer {
    /// Create a new gateway server.
    pub fn new(config: GatewayConfig, controller: Arc<dyn Controller>) -> Self {
        Self {
            config,
            state: Arc::new(AppState { controller }),
            metrics_handle: None,
        }
    }

    /// Set metrics handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    /// Build the Axum router.
    pub fn build_router(&self) -> Router {
        let mut router = Router::new()
            .route("/health", get(health_handler))
            .route("/chat", post(chat_handler))
            .with_state(self.state.clone());

        if let Some(handle) = &self.metrics_handle {
            let handle = handle.clone();
            router = router.route("/metrics", get(move || async move { handle.render() }));
        }

        router = router.layer(cors_layer(&self.config.allowed_origins));

        if self.config.enable_tracing {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Run the server.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::gateway(format!("Failed to bind: {}", e)))?;

        tracing::info!(
            addr = %addr,
            origins = ?self.config.allowed_origins,
            "Gateway server starting"
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::gateway(format!("Server error: {}", e)))?;

        tracing::info!("Gateway server stopped");
        Ok(())
    }
}

/// CORS for a fixed list of origins with credentials.
///
/// Methods and headers are mirrored from the preflight request: a wildcard is
/// not allowed together with credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Chat request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Chat response: an answer or an error, never both.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ChatResponse {
    Response { response: String },
    Error { error: String },
}

impl ChatResponse {
    fn invalid_input(detail: impl std::fmt::Display) -> Self {
        Self::Error {
            error: format!("Invalid input: {}", detail),
        }
    }

    fn unexpected() -> Self {
        Self::Error {
            error: GENERIC_ERROR.to_string(),
        }
    }
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check handler.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Chat handler.
///
/// Always answers 200; failures are reported in the `error` field.
async fn chat_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let started = Instant::now();
    let trace_id = Uuid::new_v4().to_string();

    let outcome = match payload {
        Err(rejection) => Err(Error::invalid_request(rejection.body_text())),
        Ok(Json(request)) => answer(&state, &request.message, &trace_id).await,
    };

    let (response, label) = match outcome {
        Ok(reply) => (ChatResponse::Response { response: reply }, "answered"),
        Err(Error::InvalidRequest(detail)) => {
            tracing::warn!(trace_id = %trace_id, error = %detail, "Rejected chat request");
            (ChatResponse::invalid_input(detail), "invalid_input")
        }
        Err(e) => {
            tracing::error!(trace_id = %trace_id, error = %e, "Chat request failed");
            (ChatResponse::unexpected(), "failed")
        }
    };

    estate_chat_telemetry::track_request("/chat", label, started.elapsed().as_secs_f64());
    Json(response)
}

async fn answer(state: &AppState, message: &str, trace_id: &str) -> Result<String> {
    if message.trim().is_empty() {
        return Err(Error::invalid_request("message must not be empty"));
    }

    tracing::info!(
        trace_id = %trace_id,
        message_len = message.len(),
        "Processing chat request"
    );
    state.controller.execute(message, trace_id).await
}
