//! Cart operations, keyed to the signed-in user.
//!
//! The server is authoritative for every computed field, so each mutation
//! replaces the whole slice with the cart the endpoint returns.

use shopsync_core::{Cart, CartItemRequest, VariantId};

use crate::error::StoreError;
use crate::Store;

impl Store {
    /// Load the signed-in user's cart. No-ops when nobody is signed in;
    /// failures are swallowed (the slice resets to empty).
    pub async fn load_cart(&self) {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            return;
        };

        self.inner().cart.write().await.loading = true;
        let result = self.inner().api.fetch_cart(&user_id).await;

        let mut slice = self.inner().cart.write().await;
        slice.loading = false;
        match result {
            Ok(cart) => slice.cart = Some(cart),
            Err(err) => {
                slice.cart = None;
                drop(slice);
                tracing::warn!(user = %user_id, error = %err, "failed to load cart");
            }
        }
    }

    /// Add a variant to the cart.
    ///
    /// Unauthenticated callers get an informational prompt and `Ok(None)`
    /// without any network traffic.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn add_to_cart(
        &self,
        variant_id: &VariantId,
        quantity: u32,
    ) -> Result<Option<Cart>, StoreError> {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            self.inner()
                .notifier
                .info("Sign in to add items to your cart.");
            return Ok(None);
        };

        let item = CartItemRequest {
            variant_id: variant_id.clone(),
            quantity,
        };
        match self.inner().api.add_cart_item(&user_id, &item).await {
            Ok(cart) => {
                self.inner().cart.write().await.cart = Some(cart.clone());
                self.inner().notifier.success("Added to your cart.");
                Ok(Some(cart))
            }
            Err(err) => {
                tracing::error!(variant = %variant_id, error = %err, "failed to add to cart");
                self.inner()
                    .notifier
                    .error("Could not add the item. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Change a line's quantity. Silently no-ops when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_cart_item(
        &self,
        variant_id: &VariantId,
        quantity: u32,
    ) -> Result<Option<Cart>, StoreError> {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            return Ok(None);
        };

        let item = CartItemRequest {
            variant_id: variant_id.clone(),
            quantity,
        };
        match self.inner().api.update_cart_item(&user_id, &item).await {
            Ok(cart) => {
                self.inner().cart.write().await.cart = Some(cart.clone());
                self.inner().notifier.info("Quantity updated.");
                Ok(Some(cart))
            }
            Err(err) => {
                tracing::error!(variant = %variant_id, error = %err, "failed to update cart line");
                self.inner().notifier.error("Could not update the quantity.");
                Err(err.into())
            }
        }
    }

    /// Remove a variant's line from the cart. Silently no-ops when nobody is
    /// signed in.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn remove_cart_item(
        &self,
        variant_id: &VariantId,
    ) -> Result<Option<Cart>, StoreError> {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            return Ok(None);
        };

        match self.inner().api.remove_cart_item(&user_id, variant_id).await {
            Ok(cart) => {
                self.inner().cart.write().await.cart = Some(cart.clone());
                self.inner().notifier.info("Item removed from your cart.");
                Ok(Some(cart))
            }
            Err(err) => {
                tracing::error!(variant = %variant_id, error = %err, "failed to remove cart line");
                self.inner().notifier.error("Could not remove the item.");
                Err(err.into())
            }
        }
    }

    /// Empty the cart. Silently no-ops when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn clear_cart(&self) -> Result<Option<Cart>, StoreError> {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            return Ok(None);
        };

        match self.inner().api.clear_cart(&user_id).await {
            Ok(cart) => {
                self.inner().cart.write().await.cart = Some(cart.clone());
                self.inner().notifier.info("Your cart is now empty.");
                Ok(Some(cart))
            }
            Err(err) => {
                tracing::error!(user = %user_id, error = %err, "failed to clear cart");
                self.inner().notifier.error("Could not empty your cart.");
                Err(err.into())
            }
        }
    }
}
