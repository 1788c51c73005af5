//! Product registration and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::Money;
use serde::{Deserialize, Serialize};
use store::{CustomerStore, OrderStore, Product, ProductStore};

use super::orders::AppState;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

fn product_to_response(product: &Product) -> ProductResponse {
    ProductResponse {
        id: product.id.to_string(),
        name: product.name.clone(),
        price_cents: product.price.cents(),
        quantity: product.quantity,
    }
}

/// POST /products — register a new product.
#[tracing::instrument(skip(state, req))]
pub async fn create<C, P, O>(
    State(state): State<Arc<AppState<C, P, O>>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError>
where
    C: CustomerStore + 'static,
    P: ProductStore + 'static,
    O: OrderStore + 'static,
{
    let product = state
        .product_service
        .create_product(
            req.id.as_str(),
            req.name,
            Money::from_cents(req.price_cents),
            req.quantity,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product_to_response(&product))))
}

/// GET /products — list all products with current stock.
#[tracing::instrument(skip(state))]
pub async fn list<C, P, O>(
    State(state): State<Arc<AppState<C, P, O>>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError>
where
    C: CustomerStore + 'static,
    P: ProductStore + 'static,
    O: OrderStore + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(Json(products.iter().map(product_to_response).collect()))
}
