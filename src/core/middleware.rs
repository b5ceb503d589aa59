//! 核心中间件：请求日志与 API Key 校验

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use super::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let span = tracing::info_span!("request", id = %request_id);
    let mut response = next.run(req).instrument(span.clone()).await;
    let status = response.status();
    let duration = start.elapsed();

    span.in_scope(|| {
        info!(
            "{} {} - {} - {}ms - User-Agent: {:?}",
            method,
            uri,
            status,
            duration.as_millis(),
            user_agent
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// 静态 API Key 校验，挂在需要鉴权的路由上（`route_layer`）。
#[derive(Clone)]
pub struct ApiKeyGate {
    api_key: Arc<str>,
}

impl ApiKeyGate {
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        match headers.get(API_KEY_HEADER) {
            None => Err(ApiError::Unauthorized),
            Some(value) if value.as_bytes() == self.api_key.as_bytes() => Ok(()),
            Some(_) => Err(ApiError::Forbidden),
        }
    }
}

/// API Key 中间件：每个经过它的请求都必须带正确的 `X-API-Key`。
pub async fn api_key_middleware(
    State(gate): State<ApiKeyGate>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(err) = gate.check(req.headers()) {
        warn!("rejected {} {}: {:?}", req.method(), req.uri().path(), err);
        return Err(err);
    }

    Ok(next.run(req).await)
}
