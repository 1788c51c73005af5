//! Order service orchestrating creation against the three stores.

use std::collections::HashMap;

use common::{OrderId, ProductId};
use store::{
    CustomerStore, NewOrder, Order, OrderLine, OrderStore, Product, ProductStore, StockLevel,
};

use super::{CreateOrder, OrderError};

/// Service for creating and loading orders.
///
/// Holds the customer, product, and order stores it validates and writes
/// against; all three are injected at construction.
pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerStore,
    P: ProductStore,
    O: OrderStore,
{
    /// Creates a new order service with the given stores.
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Creates an order for a customer.
    ///
    /// Validates, in order: the customer exists, the batch product lookup
    /// yielded a result set, every requested product ID came back, and every
    /// requested quantity fits the current stock. Each requested line is then
    /// stored with the product's price at lookup time, and stock is set to
    /// the lookup-time quantity minus the requested quantity in one batch
    /// update.
    ///
    /// Repeated product IDs are not deduplicated: every occurrence becomes
    /// its own line, priced and stock-checked against the same lookup
    /// snapshot, so their stock updates overlap instead of accumulating.
    ///
    /// The order write and the stock update are two separate store calls
    /// with no surrounding transaction or compensation; a failure between
    /// them leaves the order persisted with stock not yet decremented.
    /// Concurrent invocations are not coordinated and can oversell stock.
    #[tracing::instrument(skip(self))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<Order, OrderError> {
        let customer = self
            .customers
            .find_by_id(cmd.customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound {
                customer_id: cmd.customer_id,
            })?;

        let ids: Vec<ProductId> = cmd.lines.iter().map(|l| l.product_id.clone()).collect();
        let product_list = self
            .products
            .find_all_by_id(&ids)
            .await?
            .ok_or(OrderError::NoProductsFound)?;

        let by_id: HashMap<ProductId, Product> = product_list
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        // First requested line whose product did not come back.
        if let Some(missing) = cmd
            .lines
            .iter()
            .find(|l| !by_id.contains_key(&l.product_id))
        {
            return Err(OrderError::ProductNotFound {
                product_id: missing.product_id.clone(),
            });
        }

        // One aggregate failure even when several lines are short.
        if cmd
            .lines
            .iter()
            .any(|l| by_id[&l.product_id].quantity < l.quantity)
        {
            return Err(OrderError::InsufficientStock);
        }

        let lines: Vec<OrderLine> = cmd
            .lines
            .iter()
            .map(|l| OrderLine::new(l.product_id.clone(), l.quantity, by_id[&l.product_id].price))
            .collect();

        let order = self.orders.create(NewOrder { customer, lines }).await?;

        let levels: Vec<StockLevel> = cmd
            .lines
            .iter()
            .map(|l| {
                StockLevel::new(
                    l.product_id.clone(),
                    by_id[&l.product_id].quantity - l.quantity,
                )
            })
            .collect();
        self.products.update_quantities(&levels).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, lines = order.lines.len(), "order created");

        Ok(order)
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn find_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id })
    }
}
