use crate::AppState;
use axum::Json;
use axum::extract::State;
use hostpulse_core::error::ApiError;
use hostpulse_core::provider::MetricsProvider;
use hostpulse_core::report::{CpuMetrics, DiskMetrics, MemoryMetrics};
use std::sync::Arc;

/// Run a provider query on the blocking pool. A failure only affects this request.
async fn sample<T, F>(provider: Arc<dyn MetricsProvider>, query: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn MetricsProvider) -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || query(provider.as_ref())).await?
}

/// Any method on /metrics.
pub async fn cpu_metrics(State(state): State<AppState>) -> Result<Json<CpuMetrics>, ApiError> {
    let metrics = sample(state.provider, |provider| {
        let usage = provider
            .cpu_percent()
            .map_err(|e| ApiError::provider("CPU usage", e))?;
        let count = provider
            .cpu_count()
            .map_err(|e| ApiError::provider("CPU count", e))?;
        Ok(CpuMetrics::new(usage, count))
    })
    .await?;

    Ok(Json(metrics))
}

/// Any method on /metrics/mem.
pub async fn memory_metrics(
    State(state): State<AppState>,
) -> Result<Json<MemoryMetrics>, ApiError> {
    let snapshot = sample(state.provider, |provider| {
        provider
            .virtual_memory()
            .map_err(|e| ApiError::provider("memory usage", e))
    })
    .await?;

    Ok(Json(MemoryMetrics::from(&snapshot)))
}

/// Any method on /metrics/disk.
pub async fn disk_metrics(State(state): State<AppState>) -> Result<Json<DiskMetrics>, ApiError> {
    let path = state.disk_path.clone();
    let usage = sample(state.provider, move |provider| {
        provider
            .disk_usage(&path)
            .map_err(|e| ApiError::provider("disk usage", e))
    })
    .await?;

    tracing::debug!(mount = %usage.mount_point.display(), "Disk metrics sampled");
    Ok(Json(DiskMetrics::from(&usage)))
}
