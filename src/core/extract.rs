//! 请求提取器

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::{ApiError, FieldError};

/// 在处理器运行前完成解码和校验的 JSON 请求体。
/// 无法解码的请求体记在 `body` 字段上。
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("rejected request body: {}", rejection.body_text());
            ApiError::Validation(vec![FieldError::new("body", rejection.body_text())])
        })?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
