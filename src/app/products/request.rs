//! 产品创建请求及其校验规则

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use super::model::NewProduct;

/// Highest accepted price, 10,000,000.00.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 2);

/// Prices are stored as `NUMERIC(12, 2)`.
pub const PRICE_SCALE: u32 = 2;

pub const NAME_REQUIRED: &str = "Product name is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than zero";
pub const PRICE_TOO_HIGH: &str = "Maximum allowed price is $10,000,000.00";
pub const PRICE_TOO_PRECISE: &str = "Price must have at most 2 decimal places";

/// `POST /api/v1/products` 请求体。
///
/// 所有字段在报文中都可以缺省，
/// 缺少 `name` 或 `price` 时返回字段错误而不是解码错误。
/// `price` 按原始数字文本精确解码，不经过 `f64`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(
        required(message = "Product name is required"),
        custom(function = "check_name")
    )]
    pub name: Option<String>,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[validate(required(message = "Price is required"), custom(function = "check_price"))]
    pub price: Option<Decimal>,

    pub description: Option<String>,
    pub status: Option<bool>,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(violation("required", NAME_REQUIRED));
    }
    Ok(())
}

fn check_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        Err(violation("positive", PRICE_NOT_POSITIVE))
    } else if *price > MAX_PRICE {
        Err(violation("max", PRICE_TOO_HIGH))
    } else if price.normalize().scale() > PRICE_SCALE {
        Err(violation("scale", PRICE_TOO_PRECISE))
    } else {
        Ok(())
    }
}

impl TryFrom<ProductRequest> for NewProduct {
    type Error = ValidationErrors;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        match (request.name, request.price) {
            (Some(name), Some(price)) => Ok(NewProduct::new(name, price, request.description)
                .with_status(request.status.unwrap_or(true))),
            // validate() already rejected missing fields
            _ => Err(ValidationErrors::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn failing_fields(request: &ProductRequest) -> Vec<&'static str> {
        let errors = request.validate().unwrap_err();
        let mut fields: Vec<_> = errors.field_errors().into_keys().collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_request() {
        let request = ProductRequest::new("Widget", price("9.99")).with_description("x");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_max_price_boundary() {
        assert_eq!(MAX_PRICE, price("10000000.00"));
        assert!(ProductRequest::new("Widget", price("10000000.00")).validate().is_ok());
        assert_eq!(
            failing_fields(&ProductRequest::new("Widget", price("10000000.01"))),
            vec!["price"]
        );
    }

    #[test]
    fn test_non_positive_price() {
        for value in ["0", "0.00", "-1", "-0.01"] {
            let request = ProductRequest::new("Widget", price(value));
            let errors = request.validate().unwrap_err();
            let field_errors = errors.field_errors();
            assert_eq!(
                field_errors["price"][0].message.as_deref(),
                Some(PRICE_NOT_POSITIVE)
            );
        }
        assert!(ProductRequest::new("Widget", price("0.01")).validate().is_ok());
    }

    #[test]
    fn test_price_scale() {
        for value in ["0.004", "9.999", "1.001"] {
            let request = ProductRequest::new("Widget", price(value));
            let errors = request.validate().unwrap_err();
            let field_errors = errors.field_errors();
            assert_eq!(
                field_errors["price"][0].message.as_deref(),
                Some(PRICE_TOO_PRECISE)
            );
        }

        // trailing zeros do not count
        assert!(ProductRequest::new("Widget", price("9.9900")).validate().is_ok());
        assert!(ProductRequest::new("Widget", price("0.01")).validate().is_ok());
    }

    #[test]
    fn test_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let request = ProductRequest::new(name, price("1"));
            assert_eq!(failing_fields(&request), vec!["name"]);
        }
    }

    #[test]
    fn test_all_violations_reported() {
        let request = ProductRequest::default();
        assert_eq!(failing_fields(&request), vec!["name", "price"]);

        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["name"][0].message.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(field_errors["price"][0].message.as_deref(), Some(PRICE_REQUIRED));
    }

    #[test]
    fn test_description_and_status_unconstrained() {
        let request = ProductRequest::new("Widget", price("1"))
            .with_description("d".repeat(5000))
            .with_status(false);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_new_product_defaults_status() {
        let product = NewProduct::try_from(ProductRequest::new("Widget", price("9.99"))).unwrap();
        assert!(product.status);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, None);

        let inactive =
            NewProduct::try_from(ProductRequest::new("Widget", price("9.99")).with_status(false))
                .unwrap();
        assert!(!inactive.status);
    }

    #[test]
    fn test_into_new_product_rejects_invalid() {
        assert!(NewProduct::try_from(ProductRequest::new(" ", price("9.99"))).is_err());
    }

    #[test]
    fn test_decodes_json_numbers() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"name":"Widget","price":9.99,"description":"x"}"#).unwrap();
        assert_eq!(request.price, Some(price("9.99")));
        assert_eq!(request.status, None);

        let request: ProductRequest = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert_eq!(request.price, None);

        let request: ProductRequest = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert_eq!(request.price, None);
    }

    #[test]
    fn test_decodes_prices_exactly() {
        let request: ProductRequest =
            serde_json::from_str(r#"{"name":"Over","price":10000000.0000000001}"#).unwrap();
        assert_eq!(request.price, Some(price("10000000.0000000001")));
        assert_eq!(failing_fields(&request), vec!["price"]);

        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["price"][0].message.as_deref(), Some(PRICE_TOO_HIGH));
    }

    #[test]
    fn test_missing_fields_reported_once() {
        let errors = ProductRequest::default().validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["name"].len(), 1);
        assert_eq!(field_errors["price"].len(), 1);
        assert_eq!(field_errors["name"][0].code, "required");
        assert_eq!(field_errors["price"][0].code, "required");
    }
}
