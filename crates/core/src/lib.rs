//! Shopsync Core - Shared types library.
//!
//! This crate provides common types used across all shopsync components:
//! - `client` - HTTP resource clients for the remote catalog backend
//! - `store` - Shared resource store consumed by the view layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no shared
//! state. Everything here is a client-side mirror of a server record: the
//! server assigns identity, the client only caches.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, entity mirrors, request payloads, and the
//!   backend response envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
