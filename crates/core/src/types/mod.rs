//! Core types for shopsync.
//!
//! Entity mirrors match the backend's JSON wire shapes field for field;
//! everything serializes camelCase unless a field is explicitly renamed.

pub mod address;
pub mod cart;
pub mod catalog;
pub mod envelope;
pub mod id;
pub mod order;
pub mod user;

pub use address::{Address, AddressInput};
pub use cart::{Cart, CartItemRequest, CartLine};
pub use catalog::{Brand, BrandInput, Category, CategoryInput, Product, ProductInput, Variant, VariantInput};
pub use envelope::{ApiEnvelope, SUCCESS_CODE};
pub use id::*;
pub use order::{Order, OrderLine, OrderLineRequest, OrderRequest, OrderStatus, Payment, ShippingInfo};
pub use user::{IntrospectResult, PasswordChange, ProfileUpdate, RegisterOutcome, RegisterRequest, TokenGrant, User};
