use store::{Customer, CustomerStore};

use super::CustomerError;

/// Service for registering customers.
pub struct CustomerService<C> {
    customers: C,
}

impl<C: CustomerStore> CustomerService<C> {
    /// Creates a new customer service with the given store.
    pub fn new(customers: C) -> Self {
        Self { customers }
    }

    /// Registers a customer, rejecting an email address already in use.
    #[tracing::instrument(skip(self, name, email))]
    pub async fn create_customer(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Customer, CustomerError> {
        let email = email.into();

        if self.customers.find_by_email(&email).await?.is_some() {
            return Err(CustomerError::EmailInUse { email });
        }

        let customer = self.customers.create(Customer::new(name, email)).await?;
        tracing::info!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::InMemoryCustomerStore;

    #[tokio::test]
    async fn registers_a_customer() {
        let store = InMemoryCustomerStore::new();
        let service = CustomerService::new(store.clone());

        let customer = service
            .create_customer("Ada", "ada@example.com")
            .await
            .unwrap();

        assert_eq!(customer.name, "Ada");
        assert_eq!(store.customer_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let store = InMemoryCustomerStore::new();
        let service = CustomerService::new(store.clone());

        service
            .create_customer("Ada", "ada@example.com")
            .await
            .unwrap();
        let result = service.create_customer("Grace", "ada@example.com").await;

        assert!(matches!(result, Err(CustomerError::EmailInUse { .. })));
        assert_eq!(store.customer_count().await, 1);
    }
}
