//! Shared fixtures for the end-to-end store tests.
//!
//! Each test spins up a [`wiremock::MockServer`] standing in for the catalog
//! backend, builds a [`Store`] around it, and drives store operations the way
//! the view layer would.

use std::sync::Once;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopsync_client::{ApiClient, CredentialVault};
use shopsync_store::{Notifier, Store};

static INIT: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary. Controlled
/// by `RUST_LOG`, silent by default.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Wrap a payload in the backend's success envelope.
#[must_use]
pub fn envelope(result: serde_json::Value) -> serde_json::Value {
    json!({ "code": 1000, "message": "Success", "result": result })
}

/// A store backed by an in-memory vault and the given mock backend.
#[must_use]
pub fn store_for(server: &MockServer) -> Store {
    init_tracing();
    let api = ApiClient::new(
        server.uri(),
        Duration::from_secs(5),
        CredentialVault::in_memory(),
    )
    .expect("client");
    Store::with_api(api, Notifier::new())
}

/// The canonical signed-in test user.
#[must_use]
pub fn user_json() -> serde_json::Value {
    json!({
        "id": "u-1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "roles": ["ROLE_USER"]
    })
}

/// Mount the auth endpoints and sign the store in as [`user_json`].
///
/// The cart fetch that follows a successful login is mounted too, returning
/// the given cart payload.
pub async fn sign_in(store: &Store, server: &MockServer, cart: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "token": "tok-1",
            "authenticated": true
        }))))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_json())))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(cart)))
        .mount(server)
        .await;

    store
        .login("ada@example.com", "pw")
        .await
        .expect("login fixture");
}

/// An empty server-side cart for the canonical user.
#[must_use]
pub fn empty_cart_json() -> serde_json::Value {
    json!({
        "id": "cart-1",
        "userId": "u-1",
        "totalPrice": 0.0,
        "items": []
    })
}

/// A cart line in the backend's denormalized shape.
#[must_use]
pub fn cart_line_json(line_id: &str, variant_id: &str) -> serde_json::Value {
    json!({
        "id": line_id,
        "variantId": variant_id,
        "variantName": format!("Variant {variant_id}"),
        "price": 10.0,
        "quantity": 1
    })
}

/// Current notification messages, in insertion order.
#[must_use]
pub fn messages(store: &Store) -> Vec<String> {
    store
        .notifier()
        .snapshot()
        .into_iter()
        .map(|n| n.message)
        .collect()
}
