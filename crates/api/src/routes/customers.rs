//! Customer registration endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use store::{Customer, CustomerStore, OrderStore, ProductStore};

use super::orders::AppState;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

fn customer_to_response(customer: &Customer) -> CustomerResponse {
    CustomerResponse {
        id: customer.id.to_string(),
        name: customer.name.clone(),
        email: customer.email.clone(),
        created_at: customer.created_at.to_rfc3339(),
    }
}

/// POST /customers — register a new customer.
#[tracing::instrument(skip(state, req))]
pub async fn create<C, P, O>(
    State(state): State<Arc<AppState<C, P, O>>>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError>
where
    C: CustomerStore + 'static,
    P: ProductStore + 'static,
    O: OrderStore + 'static,
{
    let customer = state
        .customer_service
        .create_customer(req.name, req.email)
        .await?;

    Ok((StatusCode::CREATED, Json(customer_to_response(&customer))))
}
