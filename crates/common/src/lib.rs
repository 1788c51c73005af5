pub mod types;

pub use types::{CustomerId, Money, OrderId, ProductId};
