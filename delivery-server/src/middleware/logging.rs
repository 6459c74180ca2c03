//! 请求日志中间件
//!
//! 每个请求一行日志: 请求 ID、方法、路由、状态码、耗时

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Route template when matched (`/orders/{order_id}`), raw path otherwise
fn route_of(req: &Request) -> String {
    match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    }
}

/// Log one line per request; rejected requests (4xx / 5xx) at warn
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    // Set by SetRequestIdLayer further out
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = req.method().clone();
    let route = route_of(&req);

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_client_error() || response.status().is_server_error() {
        tracing::warn!(%request_id, %method, %route, status, elapsed_ms, "Request rejected");
    } else {
        tracing::info!(%request_id, %method, %route, status, elapsed_ms, "Request served");
    }
    response
}
