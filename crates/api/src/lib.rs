//! HTTP API server for the order system.
//!
//! Provides REST endpoints for customer and product registration and for
//! order creation and lookup, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain::{CustomerService, OrderService, ProductService};
use store::{
    CustomerStore, InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore, OrderStore,
    ProductStore,
};

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C, P, O>(
    state: Arc<AppState<C, P, O>>,
    metrics_handle: PrometheusHandle,
) -> Router
where
    C: CustomerStore + 'static,
    P: ProductStore + 'static,
    O: OrderStore + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/customers", post(routes::customers::create::<C, P, O>))
        .route("/products", post(routes::products::create::<C, P, O>))
        .route("/products", get(routes::products::list::<C, P, O>))
        .route("/orders", post(routes::orders::create::<C, P, O>))
        .route("/orders/{id}", get(routes::orders::get::<C, P, O>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by the in-memory stores.
pub fn create_default_state()
-> Arc<AppState<InMemoryCustomerStore, InMemoryProductStore, InMemoryOrderStore>> {
    let customers = InMemoryCustomerStore::new();
    let products = InMemoryProductStore::new();
    let orders = InMemoryOrderStore::new();

    Arc::new(AppState {
        order_service: OrderService::new(customers.clone(), products.clone(), orders),
        customer_service: CustomerService::new(customers),
        product_service: ProductService::new(products),
    })
}
