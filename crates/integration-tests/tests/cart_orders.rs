//! Cart and order behavior, including the order/cart choreography.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopsync_core::{OrderId, OrderLineRequest, OrderRequest, UserId, VariantId};
use shopsync_integration_tests::{
    cart_line_json, empty_cart_json, envelope, messages, sign_in, store_for,
};

fn cart_with(lines: &[(&str, &str)]) -> serde_json::Value {
    json!({
        "id": "cart-1",
        "userId": "u-1",
        "totalPrice": 10.0 * lines.len() as f64,
        "items": lines
            .iter()
            .map(|(line_id, variant_id)| cart_line_json(line_id, variant_id))
            .collect::<Vec<_>>()
    })
}

#[tokio::test]
async fn add_to_cart_while_signed_out_stays_offline() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    let outcome = store
        .add_to_cart(&VariantId::new("v-1"), 1)
        .await
        .expect("gated call");

    assert!(outcome.is_none());
    assert!(store.cart().await.cart.is_none());
    assert!(
        server.received_requests().await.expect("recording").is_empty(),
        "the gate must fire before any network call"
    );
    assert!(messages(&store).contains(&"Sign in to add items to your cart.".to_owned()));
}

#[tokio::test]
async fn add_to_cart_replaces_the_slice_with_the_server_cart() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, empty_cart_json()).await;
    Mock::given(method("POST"))
        .and(path("/carts/u-1/add"))
        .and(body_json(json!({"variantId": "v-1", "quantity": 2})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(cart_with(&[("line-1", "v-1")]))),
        )
        .mount(&server)
        .await;

    let cart = store
        .add_to_cart(&VariantId::new("v-1"), 2)
        .await
        .expect("add")
        .expect("cart");

    assert!(cart.contains_variant(&VariantId::new("v-1")));
    let slice = store.cart().await;
    assert_eq!(slice.cart.expect("slice cart").items.len(), 1);
    assert!(messages(&store).contains(&"Added to your cart.".to_owned()));
}

#[tokio::test]
async fn placing_an_order_reloads_orders_and_drains_the_cart_best_effort() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(
        &store,
        &server,
        cart_with(&[("line-1", "v-1"), ("line-2", "v-2"), ("line-3", "v-3")]),
    )
    .await;

    let order = json!({
        "id": "o-9",
        "totalAmount": 30.0,
        "status": "PENDING",
        "userId": "u-1",
        "items": [
            {"variantId": "v-1", "quantity": 1, "price": 10.0},
            {"variantId": "v-2", "quantity": 1, "price": 10.0},
            {"variantId": "v-3", "quantity": 1, "price": 10.0}
        ]
    });
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(order.clone())))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/user/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([order]))))
        .expect(1)
        .mount(&server)
        .await;

    // Removal of the middle variant fails; the other two must still land.
    Mock::given(method("DELETE"))
        .and(path("/carts/u-1/remove"))
        .and(body_json(json!({"variantId": "v-1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(cart_with(&[("line-2", "v-2"), ("line-3", "v-3")]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/carts/u-1/remove"))
        .and(body_json(json!({"variantId": "v-2"})))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/carts/u-1/remove"))
        .and(body_json(json!({"variantId": "v-3"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(cart_with(&[("line-2", "v-2")]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = OrderRequest {
        user_id: UserId::new("u-1"),
        address_id: None,
        shipping_info: None,
        items: ["v-1", "v-2", "v-3"]
            .into_iter()
            .map(|variant| OrderLineRequest {
                variant_id: VariantId::new(variant),
                quantity: 1,
                price: Decimal::from(10),
            })
            .collect(),
    };
    let placed = store
        .create_order(&request)
        .await
        .expect("create")
        .expect("order");
    assert_eq!(placed.id, OrderId::new("o-9"));

    let orders = store.orders().await;
    assert!(!orders.loading);
    assert_eq!(orders.items.len(), 1);
    assert_eq!(orders.items[0].id, OrderId::new("o-9"));

    // v-1 and v-3 are gone; v-2's removal was attempted but the server
    // refused, so its line survives.
    let cart = store.cart().await.cart.expect("cart");
    assert!(!cart.contains_variant(&VariantId::new("v-1")));
    assert!(cart.contains_variant(&VariantId::new("v-2")));
    assert!(!cart.contains_variant(&VariantId::new("v-3")));
    assert!(messages(&store).contains(&"Order placed.".to_owned()));
}

#[tokio::test]
async fn order_placement_while_signed_out_is_gated() {
    let server = MockServer::start().await;
    let store = store_for(&server);

    let request = OrderRequest {
        user_id: UserId::new("u-1"),
        address_id: None,
        shipping_info: None,
        items: vec![],
    };
    let outcome = store.create_order(&request).await.expect("gated call");

    assert!(outcome.is_none());
    assert!(server.received_requests().await.expect("recording").is_empty());
    assert!(messages(&store).contains(&"Sign in to place an order.".to_owned()));
}

#[tokio::test]
async fn clearing_the_cart_takes_the_server_response() {
    let server = MockServer::start().await;
    let store = store_for(&server);
    sign_in(&store, &server, cart_with(&[("line-1", "v-1")])).await;
    Mock::given(method("DELETE"))
        .and(path("/carts/u-1/clear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(empty_cart_json())))
        .mount(&server)
        .await;

    let cart = store.clear_cart().await.expect("clear").expect("cart");

    assert!(cart.items.is_empty());
    let slice = store.cart().await;
    assert!(slice.cart.expect("slice cart").items.is_empty());
    assert!(messages(&store).contains(&"Your cart is now empty.".to_owned()));
}
