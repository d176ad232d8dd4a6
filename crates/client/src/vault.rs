//! Persisted credential storage.
//!
//! Mirrors what a browser client keeps in local storage: the bearer token and
//! the last-known email, under fixed keys. Persistence is best-effort - a
//! failed write is logged and the in-memory copy stays authoritative, the
//! same way local storage failures never break a page.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Fixed storage key for the bearer token.
pub(crate) const TOKEN_KEY: &str = "accessToken";
/// Fixed storage key for the last-known email.
pub(crate) const EMAIL_KEY: &str = "email";

/// Credential storage shared between the client and the store.
///
/// Cheaply cloneable; all clones observe the same state. `clear()` removes
/// the token and email together, so a reader can never observe a half-cleared
/// vault.
#[derive(Clone)]
pub struct CredentialVault {
    inner: Arc<VaultInner>,
}

struct VaultInner {
    path: Option<PathBuf>,
    state: Mutex<VaultState>,
}

#[derive(Default)]
struct VaultState {
    token: Option<SecretString>,
    email: Option<String>,
}

#[derive(Deserialize, Default)]
struct PersistedVault {
    #[serde(rename = "accessToken")]
    token: Option<String>,
    email: Option<String>,
}

impl CredentialVault {
    /// Create a vault with no persistence. Used in tests and anywhere a
    /// session should not outlive the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(VaultInner {
                path: None,
                state: Mutex::new(VaultState::default()),
            }),
        }
    }

    /// Create a vault persisted at `path`, loading any previously stored
    /// credentials. A missing or unreadable file starts the vault empty.
    #[must_use]
    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<PersistedVault>(&raw) {
                Ok(persisted) => VaultState {
                    token: persisted.token.map(SecretString::from),
                    email: persisted.email,
                },
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt credential file");
                    VaultState::default()
                }
            },
            Err(_) => VaultState::default(),
        };

        Self {
            inner: Arc::new(VaultInner {
                path: Some(path),
                state: Mutex::new(state),
            }),
        }
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.lock().token.clone()
    }

    /// The last-known email, if any.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.lock().email.clone()
    }

    /// Whether a token is currently stored.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.lock().token.is_some()
    }

    /// Store a fresh token and the email it was granted for.
    pub fn store_session(&self, token: &str, email: &str) {
        {
            let mut state = self.lock();
            state.token = Some(SecretString::from(token));
            state.email = Some(email.to_owned());
        }
        self.persist();
    }

    /// Clear the token and email together.
    pub fn clear(&self) {
        {
            let mut state = self.lock();
            state.token = None;
            state.email = None;
        }
        self.persist();
    }

    fn lock(&self) -> MutexGuard<'_, VaultState> {
        // A poisoned lock only means another thread panicked mid-write;
        // the state itself is still a plain pair of options.
        self.inner
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn persist(&self) {
        let Some(path) = &self.inner.path else {
            return;
        };
        let payload = {
            let state = self.lock();
            serde_json::json!({
                TOKEN_KEY: state.token.as_ref().map(|t| t.expose_secret().to_owned()),
                EMAIL_KEY: state.email,
            })
        };
        if let Err(err) = fs::write(path, payload.to_string()) {
            tracing::warn!(path = %path.display(), error = %err, "failed to persist credentials");
        }
    }
}

impl std::fmt::Debug for CredentialVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("CredentialVault")
            .field("token", &state.token.as_ref().map(|_| "[REDACTED]"))
            .field("email", &state.email)
            .finish()
    }
}
