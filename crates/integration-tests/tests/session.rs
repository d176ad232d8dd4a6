//! Session lifecycle against a mocked backend: bootstrap probe, logout
//! guarantees, profile maintenance and the central forced sign-out.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopsync_core::{PasswordChange, ProfileUpdate, UserId};
use shopsync_integration_tests::{empty_cart_json, envelope, messages, sign_in, store_for};

#[tokio::test]
async fn session_probe_without_token_settles_offline() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    store.check_session().await;

    let session = store.session().await;
    assert!(session.auth_checked);
    assert!(!session.is_authenticated);
    assert!(
        server.received_requests().await.expect("recording").is_empty(),
        "no token means no network traffic"
    );
}

#[tokio::test]
async fn session_probe_with_stale_token_ends_checked_and_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/introspect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"valid": false}))))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.api().vault().store_session("stale-token", "ada@example.com");

    store.check_session().await;

    let session = store.session().await;
    assert!(session.auth_checked);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

#[tokio::test]
async fn session_probe_survives_introspection_outage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/introspect"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.api().vault().store_session("tok", "ada@example.com");

    store.check_session().await;

    let session = store.session().await;
    assert!(session.auth_checked, "probe must settle on any path");
    assert!(!session.is_authenticated);
}

#[tokio::test]
async fn bootstrap_probes_the_session_then_loads_the_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"id": "c-1", "name": "Phones"}
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"id": "p-1", "name": "Phone", "origin_price": 999.0}
        ]))))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.bootstrap().await;

    assert!(store.session().await.auth_checked);
    assert_eq!(store.categories().await.items.len(), 1);
    assert_eq!(store.products().await.items.len(), 1);
}

#[tokio::test]
async fn logout_clears_credentials_even_when_remote_fails() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, empty_cart_json()).await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    store.logout().await;

    assert!(!store.api().vault().has_token());
    let session = store.session().await;
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
    assert!(store.cart().await.cart.is_none());
    assert!(messages(&store)
        .contains(&"Signed out locally; the session service did not respond.".to_owned()));
}

#[tokio::test]
async fn logout_reports_success_when_remote_confirms() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, empty_cart_json()).await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1000})))
        .mount(&server)
        .await;

    store.logout().await;

    assert!(!store.api().vault().has_token());
    assert!(!store.session().await.is_authenticated);
    assert!(messages(&store).contains(&"You have been signed out.".to_owned()));
}

#[tokio::test]
async fn profile_update_refreshes_the_cached_user() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, empty_cart_json()).await;
    Mock::given(method("PUT"))
        .and(path("/users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": "u-1",
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "ada@example.com",
            "roles": ["ROLE_USER"]
        }))))
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        phone: None,
        roles: None,
    };
    store
        .update_profile(&UserId::new("u-1"), &update)
        .await
        .expect("profile update");

    let user = store.session().await.user.expect("user");
    assert_eq!(user.first_name, "Grace");
    assert_eq!(user.last_name, "Hopper");
}

#[tokio::test]
async fn password_change_leaves_the_cached_user_untouched() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, empty_cart_json()).await;
    Mock::given(method("PUT"))
        .and(path("/users/u-1/password"))
        .and(body_json(json!({
            "currentPassword": "pw",
            "newPassword": "pw2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1000})))
        .mount(&server)
        .await;

    let change = PasswordChange {
        current_password: "pw".into(),
        new_password: "pw2".into(),
    };
    store
        .change_password(&UserId::new("u-1"), &change)
        .await
        .expect("password change");

    let user = store.session().await.user.expect("user");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
}

#[tokio::test]
async fn rejected_token_forces_a_full_sign_out() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, empty_cart_json()).await;
    Mock::given(method("GET"))
        .and(path("/orders/user/u-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    store.load_orders().await;
    // The session reset runs on a spawned task; give it a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!store.api().vault().has_token());
    let session = store.session().await;
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
    assert!(store.cart().await.cart.is_none());
}
