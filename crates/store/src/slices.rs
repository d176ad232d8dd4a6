//! State slices held by the store.
//!
//! Each slice is one named sub-region of the state tree with its own loading
//! flag. The view reads cloned snapshots; only store operations mutate the
//! originals. Loading booleans are advisory busy indicators, not mutexes -
//! they never prevent re-entrant calls.

use shopsync_core::{Address, Cart, Order, User, UserId};

/// Authentication state.
///
/// `auth_checked` latches to `true` exactly once per process lifetime, after
/// the initial token probe settles. Until then no consumer may trust
/// `is_authenticated`. Logout and forced sign-out reset everything else but
/// leave `auth_checked` latched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub auth_checked: bool,
    pub user: Option<User>,
}

impl Session {
    /// Id of the signed-in user, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|user| user.id.clone())
    }
}

/// Generic list/detail slice shared by categories, brands, products and
/// addresses.
#[derive(Debug, Clone)]
pub struct CollectionSlice<T> {
    /// Entities in the order the backend returned them. Sorting is a
    /// presentation concern, not a slice concern.
    pub items: Vec<T>,
    pub selected: Option<T>,
    pub loading: bool,
    pub detail_loading: bool,
}

// Manual impl: `T` itself need not be `Default`.
impl<T> Default for CollectionSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            detail_loading: false,
        }
    }
}

/// Cart slice, keyed to the signed-in user. `cart` is `None` whenever nobody
/// is authenticated.
#[derive(Debug, Clone, Default)]
pub struct CartSlice {
    pub cart: Option<Cart>,
    pub loading: bool,
}

/// Orders slice. The admin list is deliberately separate from the user list,
/// with its own loading flag, so a concurrent admin fetch cannot race a
/// user-scoped fetch.
#[derive(Debug, Clone, Default)]
pub struct OrderSlice {
    pub items: Vec<Order>,
    pub selected: Option<Order>,
    pub loading: bool,
    pub admin_items: Vec<Order>,
    pub admin_loading: bool,
}

/// Address slice alias, for readability at call sites.
pub type AddressSlice = CollectionSlice<Address>;

#[cfg(test)]
mod tests {
    use super::*;
    use shopsync_core::Category;

    #[test]
    fn fresh_slices_are_idle_and_empty() {
        let slice = CollectionSlice::<Category>::default();
        assert!(slice.items.is_empty());
        assert!(slice.selected.is_none());
        assert!(!slice.loading);
        assert!(!slice.detail_loading);

        let session = Session::default();
        assert!(!session.auth_checked);
        assert!(session.user_id().is_none());
    }
}
