//! 应用层

pub mod products;

use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::core::middleware::{request_logging_middleware, ApiKeyGate};
use crate::infrastructure::repository::ProductRepository;
use products::{handler::AppState, service::ProductService};

/// 组装完整路由：产品路由（含 API Key 校验）、日志、超时与 CORS。
pub fn build_router(config: &AppConfig, repository: Arc<dyn ProductRepository>) -> Router {
    let state = AppState {
        product_service: ProductService::new(repository),
        translate_not_found: config.errors.translate_not_found,
    };
    let gate = ApiKeyGate::new(config.security.api_key.as_str());

    products::routes::routes(state, gate).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TimeoutLayer::new(config.http.timeout()))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    )
}
