//! Order commands.

use common::{CustomerId, ProductId};

/// Command to create an order for a customer.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// The customer placing the order.
    pub customer_id: CustomerId,

    /// The requested products and quantities, in request order.
    pub lines: Vec<LineRequest>,
}

impl CreateOrder {
    /// Creates a new CreateOrder command.
    pub fn new(customer_id: CustomerId, lines: Vec<LineRequest>) -> Self {
        Self { customer_id, lines }
    }
}

/// One requested product and quantity.
#[derive(Debug, Clone)]
pub struct LineRequest {
    pub product_id: ProductId,

    /// Requested quantity. Expected to be positive; the workflow does not
    /// validate this, callers do.
    pub quantity: u32,
}

impl LineRequest {
    /// Creates a new line request.
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
