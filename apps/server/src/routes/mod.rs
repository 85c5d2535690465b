//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/products    - Catalog listing (with derived image paths)
//! GET    /api/cart        - Current cart lines and total
//! POST   /api/cart        - Add/merge a quantity adjustment
//! DELETE /api/cart/{id}   - Remove one cart line
//! POST   /api/checkout    - Produce a receipt, clear the cart
//! POST   /api/reset       - Empty the cart (dev/admin only, no auth)
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod products;

#[cfg(test)]
mod tests;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route("/api/cart/{id}", delete(cart::remove_from_cart))
        .route("/api/checkout", post(checkout::checkout))
        .route("/api/reset", post(admin::reset))
}
