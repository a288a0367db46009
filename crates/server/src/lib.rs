pub mod handler;
pub mod middleware;

use axum::routing::any;
use axum::{Router, middleware as axum_mw};
use hostpulse_core::provider::MetricsProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const HEALTH_PATH: &str = "/health";
pub const CPU_PATH: &str = "/metrics";
pub const MEMORY_PATH: &str = "/metrics/mem";
pub const DISK_PATH: &str = "/metrics/disk";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MetricsProvider>,
    /// Path whose filesystem `/metrics/disk` reports.
    pub disk_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(provider: Arc<dyn MetricsProvider>, disk_path: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            disk_path: Arc::new(disk_path.into()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Every route answers any method
    let metric_routes = Router::new()
        .route(HEALTH_PATH, any(handler::health::health))
        .route(CPU_PATH, any(handler::metrics::cpu_metrics))
        .route(MEMORY_PATH, any(handler::metrics::memory_metrics))
        .route(DISK_PATH, any(handler::metrics::disk_metrics));

    // Anything under a metrics path redirects to the closest canonical path:
    // /metrics/mem/ and /metrics/mem/x go to /metrics/mem, /metrics/cpu to /metrics
    let redirect_routes = [CPU_PATH, MEMORY_PATH, DISK_PATH]
        .into_iter()
        .fold(Router::<AppState>::new(), |router, canonical| {
            router
                .route(
                    &format!("{canonical}/"),
                    handler::redirect::see_other(canonical),
                )
                .route(
                    &format!("{canonical}/{{*rest}}"),
                    handler::redirect::see_other(canonical),
                )
        });

    Router::new()
        .merge(metric_routes)
        .merge(redirect_routes)
        .layer(axum_mw::from_fn(
            middleware::request_trace::request_trace_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
