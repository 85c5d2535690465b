//! # Cart Routes
//!
//! ## Mutation Pattern
//! Every mutating handler runs the whole read-mutate-persist cycle under
//! the shop lock:
//!
//! ```text
//! decode params ──► lock ──► cart operation ──► store.save ──► unlock
//!                     │            │
//!                     │            └── typed error: nothing persisted,
//!                     │                cart untouched
//!                     └── responses serialize the post-save cart
//! ```

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use minimart_core::validation::parse_product_id;
use minimart_core::{Cart, Money};

use crate::error::ApiError;
use crate::state::AppState;

/// Response for `GET /api/cart`: the line list and its total.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub cart: Cart,
    pub total: Money,
}

/// `GET /api/cart` — current lines and Σ price × qty.
pub async fn get_cart(State(state): State<AppState>) -> Json<CartView> {
    debug!("get_cart");
    state.with_shop(|shop| {
        Json(CartView {
            cart: shop.document.cart.clone(),
            total: shop.document.cart.total(),
        })
    })
}

/// `POST /api/cart` `{productId, qty}` — add or merge a quantity
/// adjustment, then persist.
///
/// `productId` and `qty` must both be integers and `qty` nonzero;
/// anything else is a 400 with the canonical message. An unknown product
/// is a 404. On success the response is the full updated line list.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Cart>, ApiError> {
    let (product_id, qty) = match (
        body.get("productId").and_then(Value::as_i64),
        body.get("qty").and_then(Value::as_i64),
    ) {
        (Some(product_id), Some(qty)) => (product_id, qty),
        _ => {
            return Err(ApiError::invalid(
                "productId (number) and qty (positive number) required",
            ))
        }
    };

    debug!(product_id, qty, "add_to_cart");

    state.with_shop_mut(|shop| {
        shop.document
            .cart
            .add_or_update(&state.catalog, product_id, qty)?;
        shop.store.save(&shop.document)?;

        info!(product_id, qty, lines = shop.document.cart.lines().len(), "Cart updated");
        Ok(Json(shop.document.cart.clone()))
    })
}

/// `DELETE /api/cart/{id}` — remove one line, then persist.
///
/// A non-numeric id is rejected as a 400, never coerced. A missing line
/// is a 404 `{"message": "Item not found"}`.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let product_id = parse_product_id(&raw_id)?;
    debug!(product_id, "remove_from_cart");

    state.with_shop_mut(|shop| {
        shop.document.cart.remove_line(product_id)?;
        shop.store.save(&shop.document)?;

        info!(product_id, "Item removed from cart");
        Ok(Json(json!({
            "message": "Item removed",
            "cart": shop.document.cart,
        })))
    })
}
