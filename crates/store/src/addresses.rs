//! Address-book operations for the signed-in user.

use shopsync_core::{Address, AddressId, AddressInput};

use crate::error::StoreError;
use crate::Store;

impl Store {
    /// Load the signed-in user's addresses. No-ops when nobody is signed in.
    pub async fn load_addresses(&self) {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            return;
        };

        self.inner().addresses.write().await.loading = true;
        let result = self.inner().api.fetch_addresses_for_user(&user_id).await;

        let mut slice = self.inner().addresses.write().await;
        slice.loading = false;
        match result {
            Ok(items) => slice.items = items,
            Err(err) => {
                slice.items = Vec::new();
                drop(slice);
                tracing::warn!(user = %user_id, error = %err, "failed to load addresses");
                self.inner().notifier.error("Could not load your addresses.");
            }
        }
    }

    /// Fetch one address into `selected`. No-ops on an empty id.
    pub async fn load_address_detail(&self, id: &AddressId) -> Option<Address> {
        if id.is_empty() {
            return None;
        }
        self.inner().addresses.write().await.detail_loading = true;
        let result = self.inner().api.fetch_address(id).await;

        let mut slice = self.inner().addresses.write().await;
        slice.detail_loading = false;
        match result {
            Ok(address) => {
                slice.selected = Some(address.clone());
                Some(address)
            }
            Err(err) => {
                slice.selected = None;
                drop(slice);
                tracing::warn!(address = %id, error = %err, "failed to load address detail");
                self.inner().notifier.error("Could not load the address.");
                None
            }
        }
    }

    /// Save a new address for the signed-in user, then reload the list. The
    /// owner is always the current session; any `user_id` on the input is
    /// overwritten.
    ///
    /// Unauthenticated callers get an informational prompt and `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn create_address(
        &self,
        input: &AddressInput,
    ) -> Result<Option<Address>, StoreError> {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            self.inner().notifier.info("Sign in to save an address.");
            return Ok(None);
        };

        let mut input = input.clone();
        input.user_id = Some(user_id);

        match self.inner().api.create_address(&input).await {
            Ok(address) => {
                self.inner().notifier.success("Address saved.");
                self.load_addresses().await;
                Ok(Some(address))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create address");
                self.inner().notifier.error("Could not save the address.");
                Err(err.into())
            }
        }
    }

    /// Update an address, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_address(
        &self,
        id: &AddressId,
        input: &AddressInput,
    ) -> Result<Address, StoreError> {
        match self.inner().api.update_address(id, input).await {
            Ok(address) => {
                self.inner().notifier.info("Address updated.");
                self.load_addresses().await;
                Ok(address)
            }
            Err(err) => {
                tracing::error!(address = %id, error = %err, "failed to update address");
                self.inner().notifier.error("Could not update the address.");
                Err(err.into())
            }
        }
    }

    /// Delete an address, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn delete_address(&self, id: &AddressId) -> Result<(), StoreError> {
        match self.inner().api.delete_address(id).await {
            Ok(()) => {
                self.inner().notifier.info("Address removed.");
                self.load_addresses().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(address = %id, error = %err, "failed to delete address");
                self.inner().notifier.error("Could not remove the address.");
                Err(err.into())
            }
        }
    }
}
