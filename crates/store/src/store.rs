use async_trait::async_trait;

use common::{CustomerId, OrderId, ProductId};

use crate::Result;
use crate::records::{Customer, NewOrder, Order, Product, StockLevel};

/// Store for customer records.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persists a new customer and returns the stored record.
    async fn create(&self, customer: Customer) -> Result<Customer>;

    /// Looks up a customer by ID.
    ///
    /// Returns None if no customer matches.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Looks up a customer by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;
}

/// Store for product records and their stock counts.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a new product and returns the stored record.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Looks up a product by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>>;

    /// Looks up all products matching the given IDs in one batch call.
    ///
    /// Returns `None` when the backend yields no result set at all;
    /// otherwise `Some` with the matching products, which may be fewer
    /// than requested when some IDs have no match.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Option<Vec<Product>>>;

    /// Applies absolute stock quantities as one batch update.
    ///
    /// IDs with no matching product are skipped.
    async fn update_quantities(&self, levels: &[StockLevel]) -> Result<()>;

    /// Returns all products.
    async fn list(&self) -> Result<Vec<Product>>;
}

/// Store for order records.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order with all its lines.
    ///
    /// Creation is atomic: either the full order with all lines is stored,
    /// or none of it is.
    async fn create(&self, new_order: NewOrder) -> Result<Order>;

    /// Loads an order by ID.
    ///
    /// Returns None if the order doesn't exist.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>>;
}
