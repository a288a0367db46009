use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use hostpulse_core::context::{REQUEST_ID_HEADER, RequestContext};

/// Logs each request on arrival and completion, and echoes its request id
/// back in `x-request-id`.
pub async fn request_trace_middleware(request: Request, next: Next) -> Response {
    let ctx = RequestContext::from_headers(request.headers());

    tracing::info!(
        request_id = %ctx.request_id,
        client_ip = ctx.client_ip.as_deref().unwrap_or("-"),
        method = %request.method(),
        path = request.uri().path(),
        "Request received"
    );

    let mut response = next.run(request).await;

    let status = response.status().as_u16();
    if response.status().is_server_error() {
        tracing::warn!(
            request_id = %ctx.request_id,
            status,
            elapsed_ms = ctx.elapsed_ms() as u64,
            "Request failed"
        );
    } else {
        tracing::info!(
            request_id = %ctx.request_id,
            status,
            elapsed_ms = ctx.elapsed_ms() as u64,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
