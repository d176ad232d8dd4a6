//! Session operations: bootstrap probe, login, registration, logout and
//! profile maintenance.

use shopsync_core::{
    PasswordChange, ProfileUpdate, RegisterOutcome, RegisterRequest, TokenGrant, User, UserId,
};

use crate::error::StoreError;
use crate::{CartSlice, Store};

impl Store {
    /// Silent bootstrap probe, invoked once at process start.
    ///
    /// With no stored token this settles immediately; otherwise the token is
    /// introspected and, when valid, the profile is fetched and the cart
    /// loaded. Every path ends with `auth_checked == true` and emits no
    /// notification - the user did nothing to be told about.
    pub async fn check_session(&self) {
        if !self.inner().api.vault().has_token() {
            self.inner().session.write().await.auth_checked = true;
            return;
        }

        let valid = match self.inner().api.introspect().await {
            Ok(result) => result.valid,
            Err(err) => {
                tracing::warn!(error = %err, "session probe failed");
                false
            }
        };

        if valid {
            match self.inner().api.me().await {
                Ok(user) => {
                    {
                        let mut session = self.inner().session.write().await;
                        session.user = Some(user);
                        session.is_authenticated = true;
                        session.auth_checked = true;
                    }
                    // Session just became authenticated: bring the cart in.
                    self.load_cart().await;
                    return;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "profile fetch failed during session probe");
                }
            }
        }

        let mut session = self.inner().session.write().await;
        session.user = None;
        session.is_authenticated = false;
        session.auth_checked = true;
    }

    /// Exchange credentials for a session.
    ///
    /// On success the profile is fetched and the cart loaded. On failure the
    /// session is marked unauthenticated and the error re-thrown; login
    /// messaging is the caller's job (the store stays silent here so a
    /// redirecting sign-in flow does not double-message).
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenGrant, StoreError> {
        let grant = match self.inner().api.login(email, password).await {
            Ok(grant) => grant,
            Err(err) => {
                tracing::error!(error = %err, "login failed");
                self.inner().session.write().await.is_authenticated = false;
                return Err(err.into());
            }
        };

        if !grant.token.is_empty() {
            match self.inner().api.me().await {
                Ok(user) => {
                    {
                        let mut session = self.inner().session.write().await;
                        session.user = Some(user);
                        session.is_authenticated = true;
                    }
                    self.load_cart().await;
                }
                Err(err) => {
                    tracing::error!(error = %err, "profile fetch failed after login");
                    self.inner().session.write().await.is_authenticated = false;
                    return Err(err.into());
                }
            }
        }

        Ok(grant)
    }

    /// Create an account. Stateless with respect to the session: the caller
    /// still has to sign in afterwards.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterOutcome, StoreError> {
        match self.inner().api.register(request).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                tracing::error!(error = %err, "registration failed");
                Err(err.into())
            }
        }
    }

    /// Sign out. The remote invalidation is best-effort: local credentials
    /// and session state are cleared whether or not the endpoint answers,
    /// because a dead network must never leave the client believing it is
    /// still signed in.
    pub async fn logout(&self) {
        let remote = self.inner().api.logout().await;

        {
            let mut session = self.inner().session.write().await;
            session.user = None;
            session.is_authenticated = false;
            session.auth_checked = true;
        }
        // Session left authenticated state: drop the user-scoped cart.
        *self.inner().cart.write().await = CartSlice::default();

        match remote {
            Ok(()) => {
                self.inner().notifier.success("You have been signed out.");
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote logout failed; local session cleared anyway");
                self.inner()
                    .notifier
                    .info("Signed out locally; the session service did not respond.");
            }
        }
    }

    /// Best-effort profile refresh. Failures are logged and swallowed; this
    /// is not a validity check and never clears the session.
    pub async fn refresh_user(&self) -> Option<User> {
        match self.inner().api.me().await {
            Ok(user) => {
                self.inner().session.write().await.user = Some(user.clone());
                Some(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile refresh failed");
                None
            }
        }
    }

    /// Update profile fields. When the updated user is the signed-in one,
    /// the local profile is refreshed from the server's response.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`] so the view
    /// can keep its form open.
    pub async fn update_profile(
        &self,
        id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<User, StoreError> {
        match self.inner().api.update_profile(id, update).await {
            Ok(user) => {
                let mut session = self.inner().session.write().await;
                if session.user.as_ref().is_some_and(|u| u.id == user.id) {
                    session.user = Some(user.clone());
                }
                Ok(user)
            }
            Err(err) => {
                tracing::error!(error = %err, "profile update failed");
                Err(err.into())
            }
        }
    }

    /// Change the password. Leaves the cached profile untouched - the
    /// password is never part of client-side state.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn change_password(
        &self,
        id: &UserId,
        change: &PasswordChange,
    ) -> Result<(), StoreError> {
        match self.inner().api.change_password(id, change).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "password change failed");
                Err(err.into())
            }
        }
    }
}
