//! Product registration and listing.

mod service;

pub use service::ProductService;

use store::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Another product is already registered with this name.
    #[error("Product name {name} is already in use")]
    NameInUse { name: String },

    /// An error occurred in a store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
