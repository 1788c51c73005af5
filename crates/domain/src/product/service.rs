use common::{Money, ProductId};
use store::{Product, ProductStore};

use super::ProductError;

/// Service for registering and listing products.
pub struct ProductService<P> {
    products: P,
}

impl<P: ProductStore> ProductService<P> {
    /// Creates a new product service with the given store.
    pub fn new(products: P) -> Self {
        Self { products }
    }

    /// Registers a product, rejecting a name already in use.
    #[tracing::instrument(skip(self, id, name))]
    pub async fn create_product(
        &self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Product, ProductError> {
        let name = name.into();

        if self.products.find_by_name(&name).await?.is_some() {
            return Err(ProductError::NameInUse { name });
        }

        let product = self
            .products
            .create(Product::new(id, name, price, quantity))
            .await?;
        tracing::info!(product_id = %product.id, "product registered");
        Ok(product)
    }

    /// Returns all products with their current stock.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.products.list().await?)
    }
}
