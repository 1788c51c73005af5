//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use common::{CustomerId, Money, OrderId, ProductId};
use store::{
    Customer, CustomerStore, NewOrder, OrderLine, OrderStore, PostgresCustomerStore,
    PostgresOrderStore, PostgresProductStore, Product, ProductStore, StockLevel,
};

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for migrations
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            // Run migrations using raw_sql to execute multiple statements
            sqlx::raw_sql(include_str!("../../../migrations/001_create_shop_tables.sql"))
                .execute(&temp_pool)
                .await
                .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh pool with cleared tables
async fn get_test_pool() -> PgPool {
    let info = get_container_info().await;

    // Create a fresh pool for each test to avoid connection issues
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    // Clear tables for test isolation
    sqlx::query("TRUNCATE TABLE order_lines, orders, products, customers")
        .execute(&pool)
        .await
        .unwrap();

    pool
}

fn widget(id: &str, quantity: u32) -> Product {
    Product::new(id, format!("Widget {id}"), Money::from_cents(1000), quantity)
}

#[tokio::test]
async fn create_and_find_customer() {
    let pool = get_test_pool().await;
    let customers = PostgresCustomerStore::new(pool);

    let created = customers
        .create(Customer::new("Ada", "ada@example.com"))
        .await
        .unwrap();

    let found = customers.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Ada");
    assert_eq!(found.email, "ada@example.com");
}

#[tokio::test]
async fn find_customer_by_email() {
    let pool = get_test_pool().await;
    let customers = PostgresCustomerStore::new(pool);

    customers
        .create(Customer::new("Ada", "ada@example.com"))
        .await
        .unwrap();

    let found = customers.find_by_email("ada@example.com").await.unwrap();
    assert!(found.is_some());

    let missing = customers.find_by_email("nobody@example.com").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn missing_customer_returns_none() {
    let pool = get_test_pool().await;
    let customers = PostgresCustomerStore::new(pool);

    let found = customers.find_by_id(CustomerId::new()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn batch_product_lookup_returns_only_matches() {
    let pool = get_test_pool().await;
    let products = PostgresProductStore::new(pool);

    products.create(widget("SKU-001", 10)).await.unwrap();
    products.create(widget("SKU-002", 5)).await.unwrap();

    let ids = vec![
        ProductId::new("SKU-001"),
        ProductId::new("SKU-002"),
        ProductId::new("SKU-404"),
    ];
    let found = products.find_all_by_id(&ids).await.unwrap().unwrap();
    assert_eq!(found.len(), 2);

    let found_ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
    assert!(found_ids.contains(&"SKU-001"));
    assert!(found_ids.contains(&"SKU-002"));
}

#[tokio::test]
async fn update_quantities_sets_absolute_levels() {
    let pool = get_test_pool().await;
    let products = PostgresProductStore::new(pool);

    products.create(widget("SKU-001", 10)).await.unwrap();
    products.create(widget("SKU-002", 5)).await.unwrap();

    products
        .update_quantities(&[StockLevel::new("SKU-001", 7), StockLevel::new("SKU-002", 0)])
        .await
        .unwrap();

    let all = products.list().await.unwrap();
    assert_eq!(all[0].quantity, 7);
    assert_eq!(all[1].quantity, 0);
}

#[tokio::test]
async fn create_order_with_lines_roundtrips() {
    let pool = get_test_pool().await;
    let customers = PostgresCustomerStore::new(pool.clone());
    let products = PostgresProductStore::new(pool.clone());
    let orders = PostgresOrderStore::new(pool);

    let customer = customers
        .create(Customer::new("Ada", "ada@example.com"))
        .await
        .unwrap();
    products.create(widget("SKU-001", 10)).await.unwrap();
    products.create(widget("SKU-002", 5)).await.unwrap();

    let created = orders
        .create(NewOrder {
            customer: customer.clone(),
            lines: vec![
                OrderLine::new("SKU-001", 3, Money::from_cents(1000)),
                OrderLine::new("SKU-002", 1, Money::from_cents(500)),
            ],
        })
        .await
        .unwrap();

    let loaded = orders.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(loaded.customer.id, customer.id);
    assert_eq!(loaded.lines.len(), 2);
    assert_eq!(loaded.lines[0].product_id.as_str(), "SKU-001");
    assert_eq!(loaded.lines[0].quantity, 3);
    assert_eq!(loaded.lines[0].unit_price.cents(), 1000);
    assert_eq!(loaded.lines[1].product_id.as_str(), "SKU-002");
    assert_eq!(loaded.total_amount().cents(), 3500);
}

#[tokio::test]
async fn order_preserves_duplicate_product_lines_in_order() {
    let pool = get_test_pool().await;
    let customers = PostgresCustomerStore::new(pool.clone());
    let products = PostgresProductStore::new(pool.clone());
    let orders = PostgresOrderStore::new(pool);

    let customer = customers
        .create(Customer::new("Ada", "ada@example.com"))
        .await
        .unwrap();
    products.create(widget("SKU-001", 10)).await.unwrap();

    let created = orders
        .create(NewOrder {
            customer,
            lines: vec![
                OrderLine::new("SKU-001", 2, Money::from_cents(1000)),
                OrderLine::new("SKU-001", 4, Money::from_cents(1000)),
            ],
        })
        .await
        .unwrap();

    let loaded = orders.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(loaded.lines.len(), 2);
    assert_eq!(loaded.lines[0].quantity, 2);
    assert_eq!(loaded.lines[1].quantity, 4);
}

#[tokio::test]
async fn missing_order_returns_none() {
    let pool = get_test_pool().await;
    let orders = PostgresOrderStore::new(pool);

    let found = orders.find_by_id(OrderId::new()).await.unwrap();
    assert!(found.is_none());
}
