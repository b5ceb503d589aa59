//! 产品 HTTP 处理器

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::error;

use super::{
    request::ProductRequest,
    response::{ProductEnvelope, ProductResponse},
    service::{ProductService, ServiceError},
};
use crate::core::{
    error::{ApiError, FieldError, UNEXPECTED_ERROR_MESSAGE},
    extract::ValidatedJson,
};

pub const HEALTH_MESSAGE: &str = "API products V1 is working";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    /// Report a missing product as 404 (true) or as a generic 500 (false).
    pub translate_not_found: bool,
}

impl AppState {
    fn api_error(&self, err: ServiceError) -> ApiError {
        match err {
            ServiceError::NotFound(_) if !self.translate_not_found => {
                ApiError::Internal(err.to_string())
            }
            err => err.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => errors.into(),
            ServiceError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ServiceError::Repository(err) => {
                error!("Repository error: {}", err);
                ApiError::Internal(UNEXPECTED_ERROR_MESSAGE.to_string())
            }
        }
    }
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductEnvelope>), ApiError> {
    let product = state
        .product_service
        .create(request)
        .await
        .map_err(|e| state.api_error(e))?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// 路径中的 id 只接受纯数字（`+1`、`-1` 之类的写法一律拒绝）。
fn parse_product_id(raw: &str) -> Result<i64, ApiError> {
    let invalid = || {
        ApiError::Validation(vec![FieldError::new(
            "id",
            format!("Invalid product id: {}", raw),
        )])
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let Path(raw) = id.map_err(|rejection| {
        ApiError::Validation(vec![FieldError::new("id", rejection.body_text())])
    })?;
    let id = parse_product_id(&raw)?;

    let product = state
        .product_service
        .find_by_id(id)
        .await
        .map_err(|e| state.api_error(e))?;
    Ok(Json(product))
}

/// 列表返回裸对象，不套单项接口的信封。
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state
        .product_service
        .find_all()
        .await
        .map_err(|e| state.api_error(e))?;
    Ok(Json(
        products
            .into_iter()
            .map(ProductEnvelope::into_attributes)
            .collect(),
    ))
}
