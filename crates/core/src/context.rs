use axum::http::HeaderMap;
use std::time::Instant;

/// Header carrying the request id, accepted from callers and echoed back.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id that is reused as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Per-request metadata for logging.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Caller's `x-request-id` when usable, else a fresh UUID v4.
    pub request_id: String,
    /// When the request was received.
    pub start_time: Instant,
    /// Client IP from `x-forwarded-for` / `x-real-ip`, if present.
    pub client_ip: Option<String>,
}

impl RequestContext {
    pub fn new(client_ip: Option<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            start_time: Instant::now(),
            client_ip,
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut ctx = Self::new(client_ip(headers));
        if let Some(id) = caller_request_id(headers) {
            ctx.request_id = id;
        }
        ctx
    }

    /// Returns elapsed time since request start.
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First hop of `x-forwarded-for`, falling back to `x-real-ip`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_str(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| header_str(headers, "x-real-ip"))
        .map(str::to_string)
}

fn caller_request_id(headers: &HeaderMap) -> Option<String> {
    header_str(headers, REQUEST_ID_HEADER)
        .filter(|id| id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
}
