use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use common::{CustomerId, Money, OrderId, ProductId};

use crate::Result;
use crate::records::{Customer, NewOrder, Order, OrderLine, Product, StockLevel};
use crate::store::{CustomerStore, OrderStore, ProductStore};

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

fn row_to_customer(row: &PgRow) -> Result<Customer> {
    Ok(Customer {
        id: CustomerId::from_uuid(row.try_get::<Uuid, _>("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_product(row: &PgRow) -> Result<Product> {
    Ok(Product {
        id: ProductId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        price: Money::from_cents(row.try_get::<i64, _>("price_cents")?),
        quantity: row.try_get::<i64, _>("quantity")? as u32,
        created_at: row.try_get("created_at")?,
    })
}

/// PostgreSQL-backed customer store.
#[derive(Clone)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Creates a new PostgreSQL customer store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn create(&self, customer: Customer) -> Result<Customer> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_customer(&r)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, created_at
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_customer(&r)).transpose()
    }
}

/// PostgreSQL-backed product store.
#[derive(Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Creates a new PostgreSQL product store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn create(&self, product: Product) -> Result<Product> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, quantity, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.id.as_str())
        .bind(&product.name)
        .bind(product.price.cents())
        .bind(i64::from(product.quantity))
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price_cents, quantity, created_at
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_product(&r)).transpose()
    }

    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Option<Vec<Product>>> {
        let id_strings: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();

        let rows = sqlx::query(
            r#"
            SELECT id, name, price_cents, quantity, created_at
            FROM products
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&id_strings)
        .fetch_all(&self.pool)
        .await?;

        let products = rows
            .iter()
            .map(row_to_product)
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(products))
    }

    async fn update_quantities(&self, levels: &[StockLevel]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for level in levels {
            sqlx::query("UPDATE products SET quantity = $1 WHERE id = $2")
                .bind(i64::from(level.quantity))
                .bind(level.product_id.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price_cents, quantity, created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect()
    }
}

/// PostgreSQL-backed order store.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn create(&self, new_order: NewOrder) -> Result<Order> {
        let order = Order {
            id: OrderId::new(),
            customer: new_order.customer,
            lines: new_order.lines,
            created_at: chrono::Utc::now(),
        };

        // The order row and all line rows commit together or not at all.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.customer.id.as_uuid())
        .bind(order.created_at)
        .execute(&mut *tx)
        .await?;

        for (line_no, line) in order.lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_lines (order_id, line_no, product_id, quantity, unit_price_cents)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.id.as_uuid())
            .bind(line_no as i64)
            .bind(line.product_id.as_str())
            .bind(i64::from(line.quantity))
            .bind(line.unit_price.cents())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let order_row = sqlx::query(
            r#"
            SELECT o.id, o.created_at,
                   c.id AS customer_id, c.name, c.email, c.created_at AS customer_created_at
            FROM orders o
            JOIN customers c ON c.id = o.customer_id
            WHERE o.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(order_row) = order_row else {
            return Ok(None);
        };

        let line_rows = sqlx::query(
            r#"
            SELECT product_id, quantity, unit_price_cents
            FROM order_lines
            WHERE order_id = $1
            ORDER BY line_no
            "#,
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        let lines = line_rows
            .iter()
            .map(|row| {
                Ok(OrderLine {
                    product_id: ProductId::new(row.try_get::<String, _>("product_id")?),
                    quantity: row.try_get::<i64, _>("quantity")? as u32,
                    unit_price: Money::from_cents(row.try_get::<i64, _>("unit_price_cents")?),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let customer = Customer {
            id: CustomerId::from_uuid(order_row.try_get::<Uuid, _>("customer_id")?),
            name: order_row.try_get("name")?,
            email: order_row.try_get("email")?,
            created_at: order_row.try_get("customer_created_at")?,
        };

        Ok(Some(Order {
            id,
            customer,
            lines,
            created_at: order_row.try_get("created_at")?,
        }))
    }
}
