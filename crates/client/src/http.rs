//! Core HTTP plumbing shared by all resource clients.
//!
//! Every backend call funnels through [`ApiClient::execute`], which owns the
//! envelope unwrapping and the central 401 handling.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use shopsync_core::ApiEnvelope;

use crate::error::ApiError;
use crate::vault::CredentialVault;

/// Callback fired when the backend rejects the bearer token. The view shell
/// registers navigation here; the store registers its session reset.
type SignoutHook = Box<dyn Fn() + Send + Sync>;

/// Client for the catalog backend's HTTP API.
///
/// Cheaply cloneable via `Arc`; all clones share the underlying connection
/// pool, credential vault and sign-out hooks.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    vault: CredentialVault,
    signout_hooks: Mutex<Vec<SignoutHook>>,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    ///
    /// The timeout applies per request; the store layer adds no timeout of
    /// its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        vault: CredentialVault,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url,
                vault,
                signout_hooks: Mutex::new(Vec::new()),
            }),
        })
    }

    /// The credential vault this client reads tokens from.
    #[must_use]
    pub fn vault(&self) -> &CredentialVault {
        &self.inner.vault
    }

    /// Register a hook to run when any request comes back `401`.
    ///
    /// Hooks run after the vault has been cleared, in registration order.
    pub fn on_forced_signout(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.inner
            .signout_hooks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Box::new(hook));
    }

    /// Build a request with the bearer token attached when one is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let mut builder = self.inner.http.request(method, url);
        if let Some(token) = self.inner.vault.token() {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send a request and unwrap the envelope, returning its `result`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        self.execute_envelope(builder)
            .await?
            .result
            .ok_or(ApiError::MissingResult)
    }

    /// Send a request expecting no payload (`result` absent or ignored).
    pub(crate) async fn execute_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute_envelope::<serde_json::Value>(builder)
            .await
            .map(|_| ())
    }

    async fn execute_envelope<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.force_signout();
            return Err(ApiError::Unauthorized);
        }

        // Read the body as text first for better error diagnostics.
        let body = response.text().await?;

        if !status.is_success() {
            // Error responses usually still carry an envelope with a
            // machine code and message; fall back to the bare status.
            return match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
                Ok(envelope) => {
                    let message = envelope.message.unwrap_or_default();
                    tracing::error!(code = envelope.code, %message, %status, "backend error envelope");
                    Err(ApiError::Api {
                        code: envelope.code,
                        message,
                    })
                }
                Err(_) => {
                    tracing::error!(
                        %status,
                        body = %body.chars().take(200).collect::<String>(),
                        "backend returned non-success status without an envelope"
                    );
                    Err(ApiError::Status { status })
                }
            };
        }

        let envelope: ApiEnvelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    body = %body.chars().take(200).collect::<String>(),
                    "failed to parse response envelope"
                );
                return Err(ApiError::Parse(err));
            }
        };

        if !envelope.is_success() {
            let message = envelope.message.clone().unwrap_or_default();
            tracing::error!(code = envelope.code, %message, "backend reported failure");
            return Err(ApiError::Api {
                code: envelope.code,
                message,
            });
        }

        Ok(envelope)
    }

    /// Clear credentials and fire the registered sign-out hooks.
    fn force_signout(&self) {
        tracing::warn!("bearer token rejected; clearing credentials");
        self.inner.vault.clear();
        let hooks = self
            .inner
            .signout_hooks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for hook in hooks.iter() {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5), CredentialVault::in_memory())
            .expect("client")
    }

    #[tokio::test]
    async fn unwraps_success_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 1000,
                "result": {"ok": true}
            })))
            .mount(&server)
            .await;

        let api = client(&server.uri());
        let value: serde_json::Value = api.execute(api.get("/ping")).await.expect("result");
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn error_envelope_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": 1004,
                "message": "INVALID_REQUEST"
            })))
            .mount(&server)
            .await;

        let api = client(&server.uri());
        let err = api
            .execute::<serde_json::Value>(api.get("/boom"))
            .await
            .expect_err("error");
        match err {
            ApiError::Api { code, message } => {
                assert_eq!(code, 1004);
                assert_eq!(message, "INVALID_REQUEST");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_clears_vault_and_fires_hooks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/private"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = client(&server.uri());
        api.vault().store_session("tok", "a@b.c");

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        api.on_forced_signout(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = api
            .execute::<serde_json::Value>(api.get("/private"))
            .await
            .expect_err("error");
        assert!(err.is_unauthorized());
        assert!(!api.vault().has_token());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn success_without_result_is_missing_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"code": 1000})),
            )
            .mount(&server)
            .await;

        let api = client(&server.uri());
        let err = api
            .execute::<serde_json::Value>(api.get("/empty"))
            .await
            .expect_err("error");
        assert!(matches!(err, ApiError::MissingResult));

        // The same response is fine for side-effect endpoints.
        api.execute_unit(api.get("/empty")).await.expect("unit");
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth-echo"))
            .and(wiremock::matchers::header("authorization", "Bearer tok-9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 1000,
                "result": {}
            })))
            .mount(&server)
            .await;

        let api = client(&server.uri());
        api.vault().store_session("tok-9", "a@b.c");
        api.execute::<serde_json::Value>(api.get("/auth-echo"))
            .await
            .expect("authorized call");
    }
}
