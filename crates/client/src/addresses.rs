//! Address endpoints.

use shopsync_core::{Address, AddressId, AddressInput, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// List one user's addresses (`GET /addresses/user/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_addresses_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Address>, ApiError> {
        self.execute(self.get(&format!("/addresses/user/{user_id}")))
            .await
    }

    /// Fetch a single address (`GET /addresses/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_address(&self, id: &AddressId) -> Result<Address, ApiError> {
        self.execute(self.get(&format!("/addresses/{id}"))).await
    }

    /// Create an address (`POST /addresses`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn create_address(&self, input: &AddressInput) -> Result<Address, ApiError> {
        self.execute(self.post("/addresses").json(input)).await
    }

    /// Update an address (`PUT /addresses/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_address(
        &self,
        id: &AddressId,
        input: &AddressInput,
    ) -> Result<Address, ApiError> {
        self.execute(self.put(&format!("/addresses/{id}")).json(input))
            .await
    }

    /// Delete an address (`DELETE /addresses/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn delete_address(&self, id: &AddressId) -> Result<(), ApiError> {
        self.execute_unit(self.delete(&format!("/addresses/{id}")))
            .await
    }
}
