//! Order creation workflow and related types.

mod commands;
mod service;

pub use commands::{CreateOrder, LineRequest};
pub use service::OrderService;

use common::{CustomerId, OrderId, ProductId};
use store::StoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No customer matched the given ID.
    #[error("Could not find a customer with id {customer_id}")]
    CustomerNotFound { customer_id: CustomerId },

    /// The batch product lookup yielded no result set at all.
    #[error("Could not find any product")]
    NoProductsFound,

    /// At least one requested product ID has no match.
    #[error("Could not find product {product_id}")]
    ProductNotFound { product_id: ProductId },

    /// At least one requested quantity exceeds the available stock.
    #[error("Some products exceed the available quantity")]
    InsufficientStock,

    /// No order matched the given ID.
    #[error("Could not find order {order_id}")]
    OrderNotFound { order_id: OrderId },

    /// An error occurred in a store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
