//! # Administrative Routes
//!
//! Dev-only surface. There is no authorization check here; the reset
//! endpoint is a known gap and must not ship to production as-is.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/reset` — unconditionally empty and persist the cart.
pub async fn reset(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.with_shop_mut(|shop| {
        shop.document.cart.clear();
        shop.store.save(&shop.document)
    })?;

    info!("Cart reset");
    Ok(Json(json!({ "ok": true })))
}
