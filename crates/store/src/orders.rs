//! Order operations, including the order/cart choreography.

use shopsync_core::{Order, OrderId, OrderRequest, OrderStatus};

use crate::error::StoreError;
use crate::Store;

impl Store {
    /// Load the signed-in user's orders. No-ops when nobody is signed in.
    pub async fn load_orders(&self) {
        let Some(user_id) = self.inner().session.read().await.user_id() else {
            return;
        };

        self.inner().orders.write().await.loading = true;
        let result = self.inner().api.fetch_orders_for_user(&user_id).await;

        let mut slice = self.inner().orders.write().await;
        slice.loading = false;
        match result {
            Ok(items) => slice.items = items,
            Err(err) => {
                slice.items = Vec::new();
                drop(slice);
                tracing::warn!(user = %user_id, error = %err, "failed to load orders");
                self.inner().notifier.error("Could not load your orders.");
            }
        }
    }

    /// Fetch one order into `selected`. No-ops on an empty id; failures are
    /// swallowed.
    pub async fn load_order_detail(&self, id: &OrderId) -> Option<Order> {
        if id.is_empty() {
            return None;
        }
        self.inner().orders.write().await.loading = true;
        let result = self.inner().api.fetch_order(id).await;

        let mut slice = self.inner().orders.write().await;
        slice.loading = false;
        match result {
            Ok(order) => {
                slice.selected = Some(order.clone());
                Some(order)
            }
            Err(err) => {
                slice.selected = None;
                drop(slice);
                tracing::warn!(order = %id, error = %err, "failed to load order detail");
                None
            }
        }
    }

    /// Load every order in the system into the admin slice. Uses its own
    /// loading flag so it cannot race a user-scoped fetch.
    pub async fn load_all_orders(&self) {
        self.inner().orders.write().await.admin_loading = true;
        let result = self.inner().api.fetch_all_orders().await;

        let mut slice = self.inner().orders.write().await;
        slice.admin_loading = false;
        match result {
            Ok(items) => slice.admin_items = items,
            Err(err) => {
                slice.admin_items = Vec::new();
                drop(slice);
                tracing::warn!(error = %err, "failed to load the order list");
                self.inner().notifier.error("Could not load the order list.");
            }
        }
    }

    /// Place an order.
    ///
    /// On success the user's order list is reloaded and every ordered
    /// variant is removed from the cart, one best-effort call per line: a
    /// failed removal is logged and skipped so it can neither undo the
    /// recorded order nor block the remaining removals.
    ///
    /// Unauthenticated callers get an informational prompt and `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`] when the
    /// order itself cannot be placed.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Option<Order>, StoreError> {
        if self.inner().session.read().await.user_id().is_none() {
            self.inner().notifier.info("Sign in to place an order.");
            return Ok(None);
        }

        self.inner().orders.write().await.loading = true;
        let result = self.inner().api.create_order(request).await;
        self.inner().orders.write().await.loading = false;

        match result {
            Ok(order) => {
                self.inner().notifier.success("Order placed.");
                self.load_orders().await;

                for line in &request.items {
                    if let Err(err) = self.remove_cart_item(&line.variant_id).await {
                        tracing::warn!(
                            variant = %line.variant_id,
                            error = %err,
                            "could not remove ordered variant from cart"
                        );
                    }
                }

                Ok(Some(order))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to place order");
                self.inner()
                    .notifier
                    .error("Could not place the order. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Move an order to a new status, then reload the user's order list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        match self.inner().api.update_order_status(id, status).await {
            Ok(order) => {
                self.inner()
                    .notifier
                    .info(format!("Order {id} status set to {status}."));
                self.load_orders().await;
                Ok(order)
            }
            Err(err) => {
                tracing::error!(order = %id, error = %err, "failed to update order status");
                self.inner()
                    .notifier
                    .error("Could not update the order status.");
                Err(err.into())
            }
        }
    }

    /// Update an order's payment status, then reload the user's order list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_payment_status(
        &self,
        id: &OrderId,
        status: &str,
    ) -> Result<Order, StoreError> {
        match self.inner().api.update_payment_status(id, status).await {
            Ok(order) => {
                self.inner()
                    .notifier
                    .info(format!("Payment for order {id} marked {status}."));
                self.load_orders().await;
                Ok(order)
            }
            Err(err) => {
                tracing::error!(order = %id, error = %err, "failed to update payment status");
                self.inner()
                    .notifier
                    .error("Could not update the payment status.");
                Err(err.into())
            }
        }
    }
}
