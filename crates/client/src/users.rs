//! User profile endpoints.

use shopsync_core::{PasswordChange, ProfileUpdate, User, UserId};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Fetch the authenticated user's profile (`GET /users/me`).
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.execute(self.get("/users/me")).await
    }

    /// Update profile fields (`PUT /users/{id}`), returning the updated
    /// profile.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn update_profile(
        &self,
        id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<User, ApiError> {
        self.execute(self.put(&format!("/users/{id}")).json(update))
            .await
    }

    /// Change the password (`PUT /users/{id}/password`). No payload comes
    /// back; the password is never cached client-side.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors; a wrong current password
    /// arrives as [`ApiError::Api`].
    pub async fn change_password(
        &self,
        id: &UserId,
        change: &PasswordChange,
    ) -> Result<(), ApiError> {
        self.execute_unit(self.put(&format!("/users/{id}/password")).json(change))
            .await
    }
}
