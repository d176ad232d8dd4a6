//! Category endpoints.

use shopsync_core::{Category, CategoryId, CategoryInput};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// List all categories (`GET /categories`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.execute(self.get("/categories")).await
    }

    /// Fetch a single category (`GET /categories/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_category(&self, id: &CategoryId) -> Result<Category, ApiError> {
        self.execute(self.get(&format!("/categories/{id}"))).await
    }

    /// Create a category (`POST /categories`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.execute(self.post("/categories").json(input)).await
    }

    /// Update a category (`PUT /categories/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        self.execute(self.put(&format!("/categories/{id}")).json(input))
            .await
    }

    /// Delete a category (`DELETE /categories/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.execute_unit(self.delete(&format!("/categories/{id}")))
            .await
    }
}
