//! One-shot liveness check against a running server's `/health` endpoint.

use std::time::Duration;

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Endpoint answered `200 OK`.
    Healthy,
    /// Endpoint answered with any other status.
    Unhealthy(u16),
    /// No HTTP response: connection refused, DNS failure, timeout, ...
    Unreachable(String),
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Process exit code: 0 when healthy, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_healthy() { 0 } else { 1 }
    }
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => f.write_str("healthy"),
            Self::Unhealthy(status) => write!(f, "unhealthy (HTTP {status})"),
            Self::Unreachable(reason) => write!(f, "unreachable: {reason}"),
        }
    }
}

/// Direct connection only: `HTTP_PROXY`/`HTTPS_PROXY` are ignored so a
/// localhost check never detours through a proxy.
fn probe_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
}

/// Issue one GET to `url`. No retries; the whole exchange is bounded by `timeout`.
pub async fn probe(url: &str, timeout: Duration) -> ProbeOutcome {
    let client = match probe_client(timeout) {
        Ok(c) => c,
        Err(e) => return ProbeOutcome::Unreachable(format!("client setup failed: {e}")),
    };

    match client.get(url).send().await {
        Ok(resp) if resp.status() == reqwest::StatusCode::OK => ProbeOutcome::Healthy,
        Ok(resp) => ProbeOutcome::Unhealthy(resp.status().as_u16()),
        Err(e) if e.is_timeout() => {
            ProbeOutcome::Unreachable(format!("request timed out after {timeout:?}"))
        }
        Err(e) if e.is_connect() => ProbeOutcome::Unreachable(format!("connection failed: {e}")),
        Err(e) => ProbeOutcome::Unreachable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/ok", get(|| async { StatusCode::OK }))
            .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/created", get(|| async { StatusCode::CREATED }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    StatusCode::OK
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_probe_healthy() {
        let base = spawn_server().await;
        let outcome = probe(&format!("{base}/ok"), Duration::from_secs(2)).await;
        assert_eq!(outcome, ProbeOutcome::Healthy);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_probe_service_unavailable() {
        let base = spawn_server().await;
        let outcome = probe(&format!("{base}/down"), Duration::from_secs(2)).await;
        assert_eq!(outcome, ProbeOutcome::Unhealthy(503));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_probe_requires_exactly_200() {
        let base = spawn_server().await;
        let outcome = probe(&format!("{base}/created"), Duration::from_secs(2)).await;
        assert_eq!(outcome, ProbeOutcome::Unhealthy(201));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_probe_unreachable() {
        // Reserve a port, then release it so nothing is listening there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let outcome = probe(&format!("http://{addr}/health"), Duration::from_secs(2)).await;
        assert!(matches!(outcome, ProbeOutcome::Unreachable(_)), "{outcome}");
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_probe_times_out() {
        let base = spawn_server().await;
        let outcome = probe(&format!("{base}/slow"), Duration::from_millis(200)).await;
        assert!(matches!(outcome, ProbeOutcome::Unreachable(_)), "{outcome}");
        assert_eq!(outcome.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_health_check_bypasses_proxy_environment() {
        let base = spawn_server().await;
        // SAFETY: every test in this module builds its client with `no_proxy`,
        // so none of them read these variables.
        unsafe {
            std::env::set_var("HTTP_PROXY", "http://127.0.0.1:9");
            std::env::set_var("http_proxy", "http://127.0.0.1:9");
        }
        let outcome = probe(&format!("{base}/ok"), Duration::from_secs(2)).await;
        unsafe {
            std::env::remove_var("HTTP_PROXY");
            std::env::remove_var("http_proxy");
        }
        assert_eq!(outcome, ProbeOutcome::Healthy);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ProbeOutcome::Healthy.to_string(), "healthy");
        assert_eq!(
            ProbeOutcome::Unhealthy(503).to_string(),
            "unhealthy (HTTP 503)"
        );
    }
}
