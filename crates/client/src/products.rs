//! Product endpoints.

use shopsync_core::{Product, ProductId, ProductInput};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// List all products (`GET /products`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.execute(self.get("/products")).await
    }

    /// Fetch a single product with variants (`GET /products/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.execute(self.get(&format!("/products/{id}"))).await
    }

    /// Create a product (`POST /products`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.execute(self.post("/products").json(input)).await
    }

    /// Update a product (`PUT /products/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.execute(self.put(&format!("/products/{id}")).json(input))
            .await
    }

    /// Delete a product (`DELETE /products/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.execute_unit(self.delete(&format!("/products/{id}")))
            .await
    }
}
