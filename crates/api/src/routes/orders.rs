//! Order creation and lookup endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{CustomerId, OrderId};
use domain::{CreateOrder, CustomerService, LineRequest, OrderService, ProductService};
use serde::{Deserialize, Serialize};
use store::{CustomerStore, Order, OrderStore, ProductStore};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<C, P, O> {
    pub order_service: OrderService<C, P, O>,
    pub customer_service: CustomerService<C>,
    pub product_service: ProductService<P>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer_id: String,
    pub created_at: String,
    pub items: Vec<OrderItemResponse>,
    pub total_cents: i64,
}

#[derive(Serialize)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

fn order_to_response(order: &Order) -> OrderResponse {
    let items = order
        .lines
        .iter()
        .map(|line| OrderItemResponse {
            product_id: line.product_id.to_string(),
            quantity: line.quantity,
            unit_price_cents: line.unit_price.cents(),
        })
        .collect();

    OrderResponse {
        id: order.id.to_string(),
        customer_id: order.customer.id.to_string(),
        created_at: order.created_at.to_rfc3339(),
        items,
        total_cents: order.total_amount().cents(),
    }
}

// -- Handlers --

/// POST /orders — create an order for a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create<C, P, O>(
    State(state): State<Arc<AppState<C, P, O>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError>
where
    C: CustomerStore + 'static,
    P: ProductStore + 'static,
    O: OrderStore + 'static,
{
    let uuid = uuid::Uuid::parse_str(&req.customer_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid customer_id: {e}")))?;
    let customer_id = CustomerId::from_uuid(uuid);

    if req.items.is_empty() {
        return Err(ApiError::BadRequest(
            "Order must contain at least one item".to_string(),
        ));
    }
    if req.items.iter().any(|item| item.quantity == 0) {
        return Err(ApiError::BadRequest(
            "Item quantity must be greater than zero".to_string(),
        ));
    }

    let lines = req
        .items
        .iter()
        .map(|item| LineRequest::new(item.product_id.as_str(), item.quantity))
        .collect();

    let order = state
        .order_service
        .create_order(CreateOrder::new(customer_id, lines))
        .await?;

    Ok((StatusCode::CREATED, Json(order_to_response(&order))))
}

/// GET /orders/:id — load a persisted order by ID.
#[tracing::instrument(skip(state))]
pub async fn get<C, P, O>(
    State(state): State<Arc<AppState<C, P, O>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError>
where
    C: CustomerStore + 'static,
    P: ProductStore + 'static,
    O: OrderStore + 'static,
{
    let uuid = uuid::Uuid::parse_str(&id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))?;

    let order = state
        .order_service
        .find_order(OrderId::from_uuid(uuid))
        .await?;

    Ok(Json(order_to_response(&order)))
}
