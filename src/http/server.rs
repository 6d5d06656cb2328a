//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, body limit)
//! - Serve the client bundle under its base path with SPA fallback
//! - Bind server to listener and shut down gracefully

use std::future::IntoFuture;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, Method, Request, StatusCode},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::health::{health, HealthState};
use crate::http::relay::relay_endpoint;
use crate::lifecycle::ShutdownSignal;
use crate::relay::error::{ErrorBody, RelayError};
use crate::relay::{RelayHandler, RelayKind};
use crate::upstream::{UpstreamError, WorkflowClient};

/// HTTP front door for the relay.
pub struct HttpServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        let client = WorkflowClient::new(&config.upstream)?;
        let router = Self::build_router(&config, client);
        Ok(Self {
            router,
            config: Arc::new(config),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, client: WorkflowClient) -> Router {
        let base = config.client.base_path.as_str();
        let mut router = Router::new();

        for kind in RelayKind::ALL {
            let handler = Arc::new(RelayHandler::new(kind, config, client.clone()));
            let route = any(relay_endpoint).with_state(handler);
            router = router
                .route(&format!("/api/{}", kind.endpoint()), route.clone())
                .route(&format!("{}/api/{}", base, kind.endpoint()), route);
        }

        let health_state = Arc::new(HealthState::new(config.environment.to_string()));
        let app_root = format!("{}/", base);

        let dist = PathBuf::from(&config.client.dist_dir);
        let client_bundle = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

        router
            .route("/health", get(health).with_state(health_state))
            .route(
                "/",
                get(move || {
                    let target = app_root.clone();
                    async move { Redirect::temporary(&target) }
                }),
            )
            .nest_service(base, client_bundle)
            .fallback(not_found)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(middleware::map_response(json_payload_too_large))
            .layer(cors_layer())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                let request_id = req
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown` fires, then drain for at most the
    /// configured grace period.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.client.base_path,
            "HTTP server starting"
        );

        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);
        let mut drain_signal = shutdown.clone();
        let mut deadline_signal = shutdown;

        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                drain_signal.recv().await;
                tracing::info!("No longer accepting connections; draining");
            })
            .into_future();

        let deadline = async move {
            deadline_signal.recv().await;
            tokio::time::sleep(grace).await;
        };

        tokio::select! {
            result = serve => result?,
            _ = deadline => {
                tracing::warn!(
                    grace_period_secs = grace.as_secs(),
                    "Grace period elapsed; abandoning in-flight requests"
                );
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Permissive cross-origin policy for the relay routes.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Body-limit rejections carry the same `{"error": ...}` shape as relay errors.
async fn json_payload_too_large(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return RelayError::PayloadTooLarge.into_response();
    }
    response
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}
