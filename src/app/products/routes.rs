//! 产品路由

use axum::{middleware, routing::get, Router};

use super::handler::{create_product, get_product, health, list_products, AppState};
use crate::core::middleware::{api_key_middleware, ApiKeyGate};

pub const PRODUCTS_PATH: &str = "/api/v1/products";

/// 只有单个产品查询需要 API Key；健康检查、列表和创建保持开放。
pub fn routes(state: AppState, gate: ApiKeyGate) -> Router {
    Router::new()
        .route("/api/v1/products/health", get(health))
        .route(PRODUCTS_PATH, get(list_products).post(create_product))
        .route(
            "/api/v1/products/:id",
            get(get_product)
                .route_layer(middleware::from_fn_with_state(gate, api_key_middleware)),
        )
        .with_state(state)
}
