//! Order endpoints.

use shopsync_core::{Order, OrderId, OrderRequest, OrderStatus, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Place an order (`POST /orders`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Order, ApiError> {
        self.execute(self.post("/orders").json(request)).await
    }

    /// List every order in the system (`GET /orders`, admin-scoped).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.execute(self.get("/orders")).await
    }

    /// List one user's orders (`GET /orders/user/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_orders_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, ApiError> {
        self.execute(self.get(&format!("/orders/user/{user_id}")))
            .await
    }

    /// Fetch a single order (`GET /orders/{id}`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.execute(self.get(&format!("/orders/{id}"))).await
    }

    /// Move an order to a new status (`PUT /orders/{id}/status?status=`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.execute(
            self.put(&format!("/orders/{id}/status"))
                .query(&[("status", status.as_str())]),
        )
        .await
    }

    /// Update an order's payment status (`PUT /orders/{id}/payment?status=`).
    ///
    /// Payment statuses are free-form strings on the wire, unlike order
    /// statuses.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_payment_status(
        &self,
        id: &OrderId,
        status: &str,
    ) -> Result<Order, ApiError> {
        self.execute(
            self.put(&format!("/orders/{id}/payment"))
                .query(&[("status", status)]),
        )
        .await
    }
}
