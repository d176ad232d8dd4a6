//! Catalog slice behavior: load settlement, reload-after-mutate, and the
//! tolerated same-slice concurrency race.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopsync_core::{CategoryId, CategoryInput};
use shopsync_integration_tests::{envelope, messages, store_for};

fn product_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "origin_price": 999.0,
        "quantity": 3
    })
}

#[tokio::test]
async fn load_products_settles_with_the_fetched_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            product_json("p-1", "Phone"),
            product_json("p-2", "Laptop")
        ]))))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.load_products().await;

    let slice = store.products().await;
    assert!(!slice.loading);
    assert_eq!(slice.items.len(), 2);
    assert_eq!(slice.items[0].name, "Phone");
}

#[tokio::test]
async fn load_products_failure_empties_the_slice_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.load_products().await;

    let slice = store.products().await;
    assert!(!slice.loading, "loading must settle on failure too");
    assert!(slice.items.is_empty());
    assert!(messages(&store).contains(&"Could not load products.".to_owned()));
}

#[tokio::test]
async fn create_category_reloads_the_list_with_the_server_assigned_id() {
    let server = MockServer::start().await;
    let created = json!({"id": "c-9", "name": "Phones", "description": "Handhelds"});
    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_json(json!({"name": "Phones", "description": "Handhelds"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(created.clone())))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([created]))))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    let input = CategoryInput {
        name: "Phones".into(),
        description: Some("Handhelds".into()),
        image: None,
    };
    store.create_category(&input).await.expect("create");

    let slice = store.categories().await;
    assert_eq!(slice.items.len(), 1);
    assert_eq!(slice.items[0].id, CategoryId::new("c-9"));
    assert_eq!(slice.items[0].name, "Phones");
    assert!(messages(&store).contains(&"Category created.".to_owned()));
}

#[tokio::test]
async fn concurrent_brand_loads_keep_the_last_resolved_response() {
    let server = MockServer::start().await;
    // The first matching request consumes the slow mock; its response lands
    // last and must win.
    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(300))
                .set_body_json(envelope(json!([{"id": "b-slow", "name": "Slow"}]))),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([{"id": "b-fast", "name": "Fast"}]))),
        )
        .mount(&server)
        .await;

    let store = store_for(&server);
    tokio::join!(store.load_brands(), store.load_brands());

    let slice = store.brands().await;
    assert!(!slice.loading);
    assert_eq!(slice.items.len(), 1);
    assert_eq!(slice.items[0].name, "Slow");
}

#[tokio::test]
async fn detail_load_with_empty_id_stays_offline() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    let detail = store.load_category_detail(&CategoryId::new("")).await;

    assert!(detail.is_none());
    assert!(
        server.received_requests().await.expect("recording").is_empty(),
        "an empty id must not hit the backend"
    );
}
