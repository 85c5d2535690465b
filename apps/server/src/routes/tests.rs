//! Router-level tests: each route driven end to end through the axum
//! service, asserting status codes and exact response shapes.

use std::fs;
use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use minimart_core::Catalog;
use minimart_store::FileStore;

use crate::state::AppState;

/// Unique scratch data file per test; removed on drop.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "minimart-server-{}-{}.json",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        ScratchFile(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
        let _ = fs::remove_file(self.0.with_extension("json.tmp"));
    }
}

fn test_app(tag: &str) -> (Router, ScratchFile) {
    let scratch = ScratchFile::new(tag);
    let store = FileStore::new(&scratch.0);
    let document = store.load().expect("seed load");
    let state = AppState::new(Catalog::seed(), document, store);
    (super::router().with_state(state), scratch)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn products_listing_includes_derived_images() {
    let (app, _scratch) = test_app("products");

    let (status, body) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(
        products[0],
        json!({"id": 1, "name": "Headphones", "price": 1200, "image": "/images/headphones.jpg"})
    );
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn add_to_cart_returns_updated_lines_and_persists() {
    let (app, scratch) = test_app("add");

    let (status, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({"productId": 1, "qty": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Headphones", "price": 1200, "qty": 2}])
    );

    // merged on repeat
    let (_, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({"productId": 1, "qty": 3})),
    )
    .await;
    assert_eq!(body[0]["qty"], json!(5));

    // the mutation reached the disk, not just memory
    let reloaded = FileStore::new(&scratch.0).load().unwrap();
    assert_eq!(reloaded.cart.lines()[0].qty, 5);
}

#[tokio::test]
async fn add_to_cart_validates_body() {
    let (app, _scratch) = test_app("add-invalid");
    let expected = json!({"error": "productId (number) and qty (positive number) required"});

    for body in [
        json!({"qty": 2}),
        json!({"productId": 1}),
        json!({"productId": "1", "qty": 2}),
        json!({"productId": 1, "qty": "2"}),
        json!({"productId": 1, "qty": 0}),
        json!({"productId": 1.5, "qty": 2}),
    ] {
        let (status, response) = send(&app, "POST", "/api/cart", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, expected);
    }

    // nothing was added by any of the rejected requests
    let (_, cart) = send(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["total"], json!(0));
}

#[tokio::test]
async fn add_to_cart_rejects_oversized_qty_and_stays_serviceable() {
    let (app, _scratch) = test_app("add-oversized");

    send(&app, "POST", "/api/cart", Some(json!({"productId": 1, "qty": 2}))).await;

    // a single astronomical adjustment, and a merge that would blow the
    // per-line cap, are both 400s that leave the line as it was
    for qty in [i64::MAX, i64::MIN, 1_000_000_000] {
        let (status, response) = send(
            &app,
            "POST",
            "/api/cart",
            Some(json!({"productId": 1, "qty": qty})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "qty out of range"}));
    }

    // in-range qty, but the merged line would exceed the per-line cap
    let (status, response) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({"productId": 1, "qty": 1_000_000})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({"error": "qty out of range"}));

    // the rejections did not wedge the shared state
    let (status, cart) = send(&app, "GET", "/api/cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["cart"][0]["qty"], json!(2));
    assert_eq!(cart["total"], json!(2400));
}

#[tokio::test]
async fn add_to_cart_unknown_product_is_404() {
    let (app, _scratch) = test_app("add-unknown");

    let (status, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({"productId": 42, "qty": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Product not found"}));
}

#[tokio::test]
async fn negative_adjustment_drains_line() {
    let (app, _scratch) = test_app("drain");

    send(&app, "POST", "/api/cart", Some(json!({"productId": 1, "qty": 2}))).await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/cart",
        Some(json!({"productId": 1, "qty": -2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_cart_reports_lines_and_total() {
    let (app, _scratch) = test_app("get");

    send(&app, "POST", "/api/cart", Some(json!({"productId": 1, "qty": 2}))).await;
    send(&app, "POST", "/api/cart", Some(json!({"productId": 3, "qty": 3}))).await;

    let (status, body) = send(&app, "GET", "/api/cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(3900));
    assert_eq!(body["cart"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn remove_from_cart_success_and_not_found() {
    let (app, _scratch) = test_app("remove");

    send(&app, "POST", "/api/cart", Some(json!({"productId": 2, "qty": 1}))).await;

    let (status, body) = send(&app, "DELETE", "/api/cart/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item removed", "cart": []}));

    let (status, body) = send(&app, "DELETE", "/api/cart/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Item not found"}));
}

#[tokio::test]
async fn remove_from_cart_rejects_non_numeric_id() {
    let (app, _scratch) = test_app("remove-bad-id");

    let (status, body) = send(&app, "DELETE", "/api/cart/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid product id: abc"));
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn checkout_requires_cart_items() {
    let (app, _scratch) = test_app("checkout-invalid");

    // the server cart has content that must survive a failed checkout
    send(&app, "POST", "/api/cart", Some(json!({"productId": 1, "qty": 1}))).await;

    for body in [
        json!({}),
        json!({"cartItems": []}),
        json!({"cartItems": "nope"}),
        json!({"cartItems": [{"name": "no price or qty"}]}),
    ] {
        let (status, response) = send(&app, "POST", "/api/checkout", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "cartItems array required"}));
    }

    let (_, cart) = send(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["total"], json!(1200));
}

#[tokio::test]
async fn checkout_returns_receipt_and_clears_cart() {
    let (app, scratch) = test_app("checkout");

    send(&app, "POST", "/api/cart", Some(json!({"productId": 4, "qty": 1}))).await;

    let (status, receipt) = send(
        &app,
        "POST",
        "/api/checkout",
        Some(json!({
            "cartItems": [{"id": 3, "name": "Mouse", "price": 500, "qty": 2}],
            "name": "Ada",
            "email": "ada@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["message"], json!("Checkout successful"));
    // total comes from the SUBMITTED items, not the server cart
    assert_eq!(receipt["total"], json!(1000));
    assert_eq!(
        receipt["customer"],
        json!({"name": "Ada", "email": "ada@example.com"})
    );
    assert_eq!(
        receipt["items"],
        json!([{"id": 3, "name": "Mouse", "price": 500, "qty": 2}])
    );
    assert!(receipt["timestamp"].is_string());

    // cart cleared, in memory and on disk
    let (_, cart) = send(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart, json!({"cart": [], "total": 0}));
    assert!(FileStore::new(&scratch.0).load().unwrap().cart.is_empty());
}

#[tokio::test]
async fn checkout_defaults_customer_to_guest() {
    let (app, _scratch) = test_app("checkout-guest");

    let (status, receipt) = send(
        &app,
        "POST",
        "/api/checkout",
        Some(json!({"cartItems": [{"price": 100, "qty": 1}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["customer"], json!({"name": "Guest", "email": null}));
}

#[tokio::test]
async fn checkout_keeps_whitespace_name_and_nulls_empty_email() {
    let (app, _scratch) = test_app("checkout-customer-edges");

    let (status, receipt) = send(
        &app,
        "POST",
        "/api/checkout",
        Some(json!({
            "cartItems": [{"price": 100, "qty": 1}],
            "name": "  ",
            "email": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["customer"], json!({"name": "  ", "email": null}));
}

// =============================================================================
// Reset
// =============================================================================

#[tokio::test]
async fn reset_empties_the_cart() {
    let (app, _scratch) = test_app("reset");

    send(&app, "POST", "/api/cart", Some(json!({"productId": 5, "qty": 2}))).await;

    let (status, body) = send(&app, "POST", "/api/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let (_, cart) = send(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart, json!({"cart": [], "total": 0}));
}
