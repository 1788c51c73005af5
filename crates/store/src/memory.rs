use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use common::{CustomerId, OrderId, ProductId};

use crate::Result;
use crate::records::{Customer, NewOrder, Order, Product, StockLevel};
use crate::store::{CustomerStore, OrderStore, ProductStore};

/// In-memory customer store.
///
/// Stores all customers in a map behind an async lock and provides
/// the same interface as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerStore {
    /// Creates a new empty in-memory customer store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of customers stored.
    pub async fn customer_count(&self) -> usize {
        self.customers.read().await.len()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, customer: Customer) -> Result<Customer> {
        let mut customers = self.customers.write().await;
        customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.values().find(|c| c.email == email).cloned())
    }
}

/// In-memory product store.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductStore {
    /// Creates a new empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current stock quantity for a product, if it exists.
    pub async fn stock_of(&self, id: &ProductId) -> Option<u32> {
        self.products.read().await.get(id).map(|p| p.quantity)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, product: Product) -> Result<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.name == name).cloned())
    }

    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Option<Vec<Product>>> {
        let products = self.products.read().await;
        let found: Vec<Product> = ids
            .iter()
            .filter_map(|id| products.get(id).cloned())
            .collect();
        Ok(Some(found))
    }

    async fn update_quantities(&self, levels: &[StockLevel]) -> Result<()> {
        let mut products = self.products.write().await;
        for level in levels {
            if let Some(product) = products.get_mut(&level.product_id) {
                product.quantity = level.quantity;
            }
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(all)
    }
}

/// In-memory order store.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, new_order: NewOrder) -> Result<Order> {
        let order = Order {
            id: OrderId::new(),
            customer: new_order.customer,
            lines: new_order.lines,
            created_at: Utc::now(),
        };

        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }
}
