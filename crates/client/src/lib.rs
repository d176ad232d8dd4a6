//! Shopsync Client - Remote resource clients for the catalog backend.
//!
//! # Architecture
//!
//! Everything HTTP goes through [`ApiClient`], a cheaply cloneable wrapper
//! over `reqwest`. One async method per backend operation, grouped one module
//! per resource collection. Each method:
//!
//! - attaches the bearer token from the [`CredentialVault`] when present
//! - unwraps the backend's `{ code, message, result }` envelope and returns
//!   `result`
//! - logs the envelope `message` on error
//!
//! A `401` anywhere clears the vault and fires the registered forced
//! sign-out hooks. This is the single chokepoint for that side effect; no
//! store operation duplicates it.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopsync_client::{ApiClient, CredentialVault};
//!
//! let vault = CredentialVault::in_memory();
//! let api = ApiClient::new("http://localhost:8080/api", timeout, vault)?;
//!
//! let grant = api.login("ada@example.com", "hunter22").await?;
//! let profile = api.me().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod addresses;
mod auth;
mod brands;
mod cart;
mod categories;
mod error;
mod http;
mod orders;
mod products;
mod users;
mod vault;

pub use error::ApiError;
pub use http::ApiClient;
pub use vault::CredentialVault;
