pub mod error;
pub mod memory;
pub mod postgres;
pub mod records;
pub mod store;

pub use common::{CustomerId, Money, OrderId, ProductId};
pub use error::{Result, StoreError};
pub use memory::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore};
pub use postgres::{PostgresCustomerStore, PostgresOrderStore, PostgresProductStore};
pub use records::{Customer, NewOrder, Order, OrderLine, Product, StockLevel};
pub use store::{CustomerStore, OrderStore, ProductStore};
