//! Cart endpoints. Every mutation returns the full server-computed cart.

use serde::Deserialize;
use serde_json::json;

use shopsync_core::{Cart, CartItemRequest, UserId, VariantId};

use crate::error::ApiError;
use crate::http::ApiClient;

/// The remove endpoint sometimes nests the cart under an extra `result` key
/// and sometimes returns it directly. Normalize both shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoveCartPayload {
    Wrapped { result: Cart },
    Direct(Cart),
}

impl RemoveCartPayload {
    fn into_cart(self) -> Cart {
        match self {
            Self::Wrapped { result } | Self::Direct(result) => result,
        }
    }
}

impl ApiClient {
    /// Fetch the user's cart (`GET /carts/{userId}`). The backend creates an
    /// empty cart on first access.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn fetch_cart(&self, user_id: &UserId) -> Result<Cart, ApiError> {
        self.execute(self.get(&format!("/carts/{user_id}"))).await
    }

    /// Add a variant to the cart (`POST /carts/{userId}/add`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn add_cart_item(
        &self,
        user_id: &UserId,
        item: &CartItemRequest,
    ) -> Result<Cart, ApiError> {
        self.execute(self.post(&format!("/carts/{user_id}/add")).json(item))
            .await
    }

    /// Change a line's quantity (`PUT /carts/{userId}/update`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_cart_item(
        &self,
        user_id: &UserId,
        item: &CartItemRequest,
    ) -> Result<Cart, ApiError> {
        self.execute(self.put(&format!("/carts/{user_id}/update")).json(item))
            .await
    }

    /// Remove a variant's line (`DELETE /carts/{userId}/remove`, body-carrying
    /// DELETE).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn remove_cart_item(
        &self,
        user_id: &UserId,
        variant_id: &VariantId,
    ) -> Result<Cart, ApiError> {
        let payload: RemoveCartPayload = self
            .execute(
                self.delete(&format!("/carts/{user_id}/remove"))
                    .json(&json!({ "variantId": variant_id })),
            )
            .await?;
        Ok(payload.into_cart())
    }

    /// Empty the cart (`DELETE /carts/{userId}/clear`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn clear_cart(&self, user_id: &UserId) -> Result<Cart, ApiError> {
        self.execute(self.delete(&format!("/carts/{user_id}/clear")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_json() -> serde_json::Value {
        json!({
            "id": "cart-1",
            "userId": "u-1",
            "totalPrice": 10.0,
            "items": []
        })
    }

    #[test]
    fn remove_payload_accepts_direct_cart() {
        let payload: RemoveCartPayload =
            serde_json::from_value(cart_json()).expect("direct shape");
        assert_eq!(payload.into_cart().id, shopsync_core::CartId::new("cart-1"));
    }

    #[test]
    fn remove_payload_accepts_nested_result() {
        let payload: RemoveCartPayload =
            serde_json::from_value(json!({ "result": cart_json() })).expect("nested shape");
        assert_eq!(payload.into_cart().id, shopsync_core::CartId::new("cart-1"));
    }
}
