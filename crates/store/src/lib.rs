//! Shopsync Store - shared application state for the storefront and admin
//! console.
//!
//! # Architecture
//!
//! One [`Store`] is constructed at application start and handed (by clone -
//! it is an `Arc` handle) to the view tree's root. It is the single source of
//! truth for every remotely-backed collection: auth session, categories,
//! brands, products, cart, orders and addresses. Each operation combines a
//! remote call through [`shopsync_client::ApiClient`] with a deterministic
//! local state transition, and funnels user-facing outcomes through the
//! [`notify::Notifier`].
//!
//! The view layer never talks to the HTTP client directly; it reads slice
//! snapshots and invokes store operations.
//!
//! # Concurrency
//!
//! Operations suspend only at the remote call. Slices live behind
//! `tokio::sync::RwLock`; concurrent operations on different slices are
//! independent, and concurrent loads of the *same* slice are tolerated with
//! last-response-wins semantics (no request fencing).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopsync_store::{Store, StoreConfig};
//!
//! let store = Store::new(&StoreConfig::from_env()?)?;
//! store.bootstrap().await;
//!
//! store.login("ada@example.com", "hunter22").await?;
//! store.add_to_cart(&variant_id, 1).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod addresses;
mod cart;
mod catalog;
mod config;
mod error;
pub mod notify;
mod orders;
mod session;
mod slices;

use std::sync::Arc;

use tokio::sync::RwLock;

use shopsync_client::{ApiClient, CredentialVault};
use shopsync_core::{Address, Brand, Category, Product};

pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use notify::{Notifier, Severity};
pub use slices::{AddressSlice, CartSlice, CollectionSlice, OrderSlice, Session};

/// Shared resource store. Cheaply cloneable; all clones observe the same
/// state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

pub(crate) struct StoreInner {
    pub(crate) api: ApiClient,
    pub(crate) notifier: Notifier,
    pub(crate) session: RwLock<Session>,
    pub(crate) categories: RwLock<CollectionSlice<Category>>,
    pub(crate) brands: RwLock<CollectionSlice<Brand>>,
    pub(crate) products: RwLock<CollectionSlice<Product>>,
    pub(crate) cart: RwLock<CartSlice>,
    pub(crate) orders: RwLock<OrderSlice>,
    pub(crate) addresses: RwLock<AddressSlice>,
}

impl Store {
    /// Build a store from configuration: credential vault, HTTP client,
    /// notifier, empty slices.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let vault = config.credentials_path.as_ref().map_or_else(
            CredentialVault::in_memory,
            CredentialVault::persistent,
        );
        let api = ApiClient::new(&config.api_base_url, config.request_timeout, vault)?;
        Ok(Self::with_api(api, Notifier::new()))
    }

    /// Build a store around an existing client and notifier. Used by tests
    /// and by shells that share one client across stores.
    #[must_use]
    pub fn with_api(api: ApiClient, notifier: Notifier) -> Self {
        let inner = Arc::new(StoreInner {
            api,
            notifier,
            session: RwLock::new(Session::default()),
            categories: RwLock::new(CollectionSlice::default()),
            brands: RwLock::new(CollectionSlice::default()),
            products: RwLock::new(CollectionSlice::default()),
            cart: RwLock::new(CartSlice::default()),
            orders: RwLock::new(OrderSlice::default()),
            addresses: RwLock::new(CollectionSlice::default()),
        });

        // The transport owns 401 handling (credential clearing, shell
        // navigation); the store only has to bring its own slices in line.
        // The hook fires inside a request future, so a runtime handle is
        // available there.
        let weak = Arc::downgrade(&inner);
        inner.api.on_forced_signout(move || {
            let Some(inner) = weak.upgrade() else { return };
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                handle.spawn(async move {
                    StoreInner::revoke_session(&inner).await;
                });
            }
        });

        Self { inner }
    }

    /// Bootstrap sequence run once at application start: a silent session
    /// probe, then the catalog lists the landing page needs, fetched
    /// concurrently.
    pub async fn bootstrap(&self) {
        self.check_session().await;
        tokio::join!(self.load_categories(), self.load_products());
    }

    /// The notification sink, for the view to render.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// The underlying HTTP client. Exposed so the shell can register its own
    /// forced sign-out hook (navigation to the sign-in page).
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    // ------------------------------------------------------------------
    // Slice snapshots
    // ------------------------------------------------------------------

    pub async fn session(&self) -> Session {
        self.inner.session.read().await.clone()
    }

    pub async fn categories(&self) -> CollectionSlice<Category> {
        self.inner.categories.read().await.clone()
    }

    pub async fn brands(&self) -> CollectionSlice<Brand> {
        self.inner.brands.read().await.clone()
    }

    pub async fn products(&self) -> CollectionSlice<Product> {
        self.inner.products.read().await.clone()
    }

    pub async fn cart(&self) -> CartSlice {
        self.inner.cart.read().await.clone()
    }

    pub async fn orders(&self) -> OrderSlice {
        self.inner.orders.read().await.clone()
    }

    pub async fn addresses(&self) -> CollectionSlice<Address> {
        self.inner.addresses.read().await.clone()
    }

    pub(crate) fn inner(&self) -> &StoreInner {
        &self.inner
    }
}

impl StoreInner {
    /// Reset session-scoped state after the transport rejected the token.
    /// `auth_checked` stays latched; the probe already ran.
    pub(crate) async fn revoke_session(inner: &Arc<Self>) {
        tracing::warn!("session revoked; resetting session and cart slices");
        {
            let mut session = inner.session.write().await;
            session.is_authenticated = false;
            session.user = None;
        }
        *inner.cart.write().await = CartSlice::default();
    }
}
