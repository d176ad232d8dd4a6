//! Brand endpoints.

use shopsync_core::{Brand, BrandId, BrandInput};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// List all brands (`GET /brands`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.execute(self.get("/brands")).await
    }

    /// Fetch a single brand (`GET /brands/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_brand(&self, id: &BrandId) -> Result<Brand, ApiError> {
        self.execute(self.get(&format!("/brands/{id}"))).await
    }

    /// Create a brand (`POST /brands`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn create_brand(&self, input: &BrandInput) -> Result<Brand, ApiError> {
        self.execute(self.post("/brands").json(input)).await
    }

    /// Update a brand (`PUT /brands/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_brand(&self, id: &BrandId, input: &BrandInput) -> Result<Brand, ApiError> {
        self.execute(self.put(&format!("/brands/{id}")).json(input))
            .await
    }

    /// Delete a brand (`DELETE /brands/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn delete_brand(&self, id: &BrandId) -> Result<(), ApiError> {
        self.execute_unit(self.delete(&format!("/brands/{id}")))
            .await
    }
}
