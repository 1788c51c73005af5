//! Customer registration.

mod service;

pub use service::CustomerService;

use store::StoreError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Another customer is already registered with this email address.
    #[error("Email {email} is already in use")]
    EmailInUse { email: String },

    /// An error occurred in a store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
