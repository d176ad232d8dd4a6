//! Authentication endpoints.

use secrecy::ExposeSecret;
use serde_json::json;

use shopsync_core::{IntrospectResult, RegisterOutcome, RegisterRequest, TokenGrant};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Exchange credentials for a bearer token (`POST /auth/token`).
    ///
    /// On success the token and email are stored in the vault, so subsequent
    /// requests pick the token up automatically.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors; bad credentials arrive as
    /// [`ApiError::Api`].
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenGrant, ApiError> {
        let grant: TokenGrant = self
            .execute(
                self.post("/auth/token")
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;

        if !grant.token.is_empty() {
            self.vault().store_session(&grant.token, email);
        }

        Ok(grant)
    }

    /// Create an account (`POST /auth/register`). Never authenticates the
    /// caller and never touches the vault.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterOutcome, ApiError> {
        self.execute(self.post("/auth/register").json(request)).await
    }

    /// Ask the backend whether the stored token is still valid
    /// (`POST /auth/introspect`).
    ///
    /// With no stored token this short-circuits to `valid: false` without a
    /// network call.
    ///
    /// # Errors
    ///
    /// Propagates transport and envelope errors.
    pub async fn introspect(&self) -> Result<IntrospectResult, ApiError> {
        let Some(token) = self.vault().token() else {
            return Ok(IntrospectResult { valid: false });
        };

        self.execute(
            self.post("/auth/introspect")
                .json(&json!({ "token": token.expose_secret() })),
        )
        .await
    }

    /// Invalidate the session remotely (`POST /auth/logout`), then clear the
    /// vault whatever the outcome.
    ///
    /// With no stored token there is nothing to invalidate; the vault is
    /// still cleared and the call reports success.
    ///
    /// # Errors
    ///
    /// Returns the remote error after clearing the vault, so the caller can
    /// distinguish an API-confirmed logout from a local-only one.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let Some(token) = self.vault().token() else {
            self.vault().clear();
            return Ok(());
        };

        let outcome = self
            .execute_unit(
                self.post("/auth/logout")
                    .json(&json!({ "token": token.expose_secret() })),
            )
            .await;

        // Local credentials go regardless; a dead session endpoint must not
        // leave the client believing it is signed in.
        self.vault().clear();
        outcome
    }
}
