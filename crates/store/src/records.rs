//! Record types persisted by the customer, product, and order stores.

use chrono::{DateTime, Utc};
use common::{CustomerId, Money, OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer with a generated ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// A product with its live stock count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    /// Units currently in stock.
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
            created_at: Utc::now(),
        }
    }
}

/// A line item on a persisted order.
///
/// The unit price is the product's price captured at order-creation time,
/// decoupled from the live product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(product_id: impl Into<ProductId>, quantity: u32, unit_price: Money) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the total price for this line (quantity * unit_price).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Input for creating an order: the resolved customer plus snapshot lines.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
}

/// A persisted order. Immutable once returned from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    /// Line items in request order. A product id may appear more than once.
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the sum of all line totals.
    pub fn total_amount(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.total_price())
    }
}

/// Absolute stock quantity to apply to a product in a batch update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl StockLevel {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_line_total_price() {
        let line = OrderLine::new("SKU-001", 3, Money::from_cents(1000));
        assert_eq!(line.total_price().cents(), 3000);
    }

    #[test]
    fn order_total_amount_sums_lines() {
        let order = Order {
            id: OrderId::new(),
            customer: Customer::new("Ada", "ada@example.com"),
            lines: vec![
                OrderLine::new("SKU-001", 2, Money::from_cents(1000)),
                OrderLine::new("SKU-002", 1, Money::from_cents(500)),
            ],
            created_at: Utc::now(),
        };
        assert_eq!(order.total_amount().cents(), 2500);
    }

    #[test]
    fn order_serialization_roundtrip() {
        let order = Order {
            id: OrderId::new(),
            customer: Customer::new("Ada", "ada@example.com"),
            lines: vec![OrderLine::new("SKU-001", 2, Money::from_cents(999))],
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
