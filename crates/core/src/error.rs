use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failure reported by a metrics provider while sampling the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("host metrics are not supported on this platform")]
    Unsupported,

    #[error("no CPUs reported by the host")]
    NoCpus,

    #[error("no mounted filesystem contains {0}")]
    MountNotFound(String),

    #[error("sampler state poisoned by a previous panic")]
    Poisoned,

    #[error("sampling failed: {0}")]
    Sampling(String),
}

/// Error returned by HTTP handlers. Scoped to one request; never fatal to the server.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not get {what}: {source}")]
    Provider {
        what: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn provider(what: &'static str, source: ProviderError) -> Self {
        Self::Provider { what, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Provider { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Self::Provider { .. } => "metrics_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(code = self.error_code(), "{self}");

        let body = json!({
            "error": {
                "message": self.to_string(),
                "type": "server_error",
                "code": self.error_code(),
            }
        });

        (
            status,
            [("content-type", "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        if e.is_panic() {
            Self::Internal("sampling task panicked".to_string())
        } else {
            Self::Internal(format!("sampling task cancelled: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_maps_to_500() {
        let err = ApiError::provider("CPU usage", ProviderError::NoCpus);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "metrics_unavailable");
        assert_eq!(
            err.to_string(),
            "could not get CPU usage: no CPUs reported by the host"
        );
    }

    #[test]
    fn test_mount_not_found_message() {
        let err = ProviderError::MountNotFound("/data".into());
        assert_eq!(err.to_string(), "no mounted filesystem contains /data");
    }

    #[tokio::test]
    async fn test_into_response_is_json() {
        let response = ApiError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"]["code"], "internal_error");
        assert_eq!(value["error"]["type"], "server_error");
    }
}
