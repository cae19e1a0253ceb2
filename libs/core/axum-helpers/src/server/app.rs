use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Assemble the public router.
///
/// - `apis` nested under `/api`
/// - `root` merged at the top level (health probes and the like)
/// - OpenAPI JSON at [`OPENAPI_JSON_PATH`], UIs at `/redoc`, `/rapidoc`, `/scalar`
/// - JSON 404/405 fallbacks, request tracing, security headers, CORS and
///   response compression
///
/// Both routers must already have their state applied.
pub fn create_router<T>(apis: Router, root: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::with_openapi(OPENAPI_JSON_PATH, T::openapi()).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(root)
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Serve `router` with graceful shutdown, then run `cleanup` bounded by
/// `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     client.shutdown().await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let signal_watcher = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router)
        .with_graceful_shutdown(async move { signal_watcher.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // Also reached when serve fails; subscribers still get notified.
    coordinator.shutdown();

    info!("Running cleanup (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
