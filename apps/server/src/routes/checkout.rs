//! # Checkout Route

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info};

use minimart_core::{Receipt, SubmittedItem};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/checkout` `{cartItems, name?, email?}` — produce a receipt
/// and empty the server cart.
///
/// The total comes from the *submitted* items, which are echoed verbatim
/// on the receipt. A missing, non-array, empty, or malformed `cartItems`
/// is a 400 and leaves the server cart untouched. On success the cart is
/// cleared and persisted unconditionally, whether or not the submitted
/// snapshot matched it.
pub async fn checkout(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Receipt>, ApiError> {
    let items: Vec<SubmittedItem> = match body.get("cartItems") {
        Some(Value::Array(raw)) if !raw.is_empty() => {
            serde_json::from_value(Value::Array(raw.clone()))
                .map_err(|_| ApiError::invalid("cartItems array required"))?
        }
        _ => return Err(ApiError::invalid("cartItems array required")),
    };

    let name = body
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);
    let email = body
        .get("email")
        .and_then(Value::as_str)
        .map(str::to_string);

    debug!(items = items.len(), "checkout");

    let receipt = minimart_core::checkout(items, name, email)?;

    state.with_shop_mut(|shop| {
        shop.document.cart.clear();
        shop.store.save(&shop.document)
    })?;

    info!(
        receipt_id = %receipt.id,
        total = %receipt.total,
        customer = %receipt.customer.name,
        "Checkout complete, cart cleared"
    );

    Ok(Json(receipt))
}
