//! HTTP host: middleware stack, health endpoint and the serve loop.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use horses::HorsesModule;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing::{info, warn};

use crate::config::{AppConfig, ServerConfig};
use crate::{db, shutdown};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Connect, migrate, build the router and serve until a shutdown signal arrives.
///
/// # Errors
/// Fails when the database, the migrations or the listener cannot be set up.
pub async fn run(config: &AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;

    let db = db::connect(&config.database).await?;
    let module = HorsesModule::new(db, config.horses.clone());
    module.init_storage().await?;

    let router = build_router(&module, &config.server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Router with every route and the middleware stack applied.
///
/// Layers run outermost first: `SetRequestId` -> `PropagateRequestId` -> Trace ->
/// Timeout -> CORS -> routes.
pub fn build_router(module: &HorsesModule, cfg: &ServerConfig) -> Router {
    let mut router = Router::new().route(
        "/health",
        get(|| async { Json(json!({ "status": "ok" })) }),
    );
    router = module.register_rest(router);

    if let Some(cors) = build_cors_layer(&cfg.cors_allowed_origins) {
        router = router.layer(cors);
    }

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        cfg.request_timeout,
    ));

    router = apply_trace_layer(router);

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!(parent: span, "request finished");
                },
            ),
    )
}

/// `None` when no origins are configured.
fn build_cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        warn!(
            "CORS is configured with allowed origins ['*']. \
             Any website can make cross-origin requests to the API."
        );
        return Some(layer.allow_origin(Any));
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    Some(layer.allow_origin(parsed))
}
