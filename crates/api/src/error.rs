//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{CustomerError, OrderError, ProductError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Order workflow error.
    Order(OrderError),
    /// Customer registration error.
    Customer(CustomerError),
    /// Product registration error.
    Product(ProductError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Order(err) => order_error_to_response(err),
            ApiError::Customer(err) => customer_error_to_response(err),
            ApiError::Product(err) => product_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn order_error_to_response(err: OrderError) -> (StatusCode, String) {
    match &err {
        OrderError::CustomerNotFound { .. }
        | OrderError::NoProductsFound
        | OrderError::ProductNotFound { .. }
        | OrderError::OrderNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        OrderError::InsufficientStock => (StatusCode::CONFLICT, err.to_string()),
        OrderError::Store(_) => internal_error(&err),
    }
}

fn customer_error_to_response(err: CustomerError) -> (StatusCode, String) {
    match &err {
        CustomerError::EmailInUse { .. } => (StatusCode::CONFLICT, err.to_string()),
        CustomerError::Store(_) => internal_error(&err),
    }
}

fn product_error_to_response(err: ProductError) -> (StatusCode, String) {
    match &err {
        ProductError::NameInUse { .. } => (StatusCode::CONFLICT, err.to_string()),
        ProductError::Store(_) => internal_error(&err),
    }
}

fn internal_error(err: &dyn std::fmt::Display) -> (StatusCode, String) {
    tracing::error!(error = %err, "internal server error");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::Order(err)
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        ApiError::Customer(err)
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        ApiError::Product(err)
    }
}
