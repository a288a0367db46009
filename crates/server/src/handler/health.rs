use axum::Json;
use hostpulse_core::report::HealthStatus;

/// Any method on /health. Always 200 with the current time.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok_now())
}
