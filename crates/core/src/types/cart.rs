//! Cart mirror types.
//!
//! The server owns every computed field here (line prices, totals); the
//! client never recomputes them, it just swaps in whatever cart the server
//! returns from a mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CartId, CartLineId, ProductId, UserId, VariantId};

/// The server-computed cart for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub total_price: Decimal,
    #[serde(default)]
    pub items: Vec<CartLine>,
}

impl Cart {
    /// Whether the cart holds a line for the given variant.
    #[must_use]
    pub fn contains_variant(&self, variant_id: &VariantId) -> bool {
        self.items.iter().any(|line| &line.variant_id == variant_id)
    }
}

/// One cart line: a variant reference plus a denormalized snapshot of
/// name/price/image at the time the server built the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartLineId,
    pub variant_id: VariantId,
    pub variant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Line total (unit price times quantity), server-computed.
    pub price: Decimal,
    pub quantity: u32,
}

/// Body for cart add/update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub variant_id: VariantId,
    pub quantity: u32,
}
