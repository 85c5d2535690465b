//! # State Document
//!
//! The single persisted record: seed catalog plus the current cart.
//!
//! ## Persisted Layout
//! ```json
//! {
//!   "products": [ { "id": 1, "name": "Headphones", "price": 1200 }, ... ],
//!   "cart":     [ { "id": 1, "name": "Headphones", "price": 1200, "qty": 2 } ]
//! }
//! ```
//!
//! `products` is informational seed data; the authoritative catalog lives
//! in minimart-core. `cart` is the ordered line list and is the part that
//! changes over the process lifetime.

use serde::{Deserialize, Serialize};

use minimart_core::catalog::seed_products;
use minimart_core::{Cart, Product};

/// The whole persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    /// Seed catalog, written once at initialization.
    pub products: Vec<Product>,

    /// The server-held cart, persisted after every mutation.
    pub cart: Cart,
}

impl StateDocument {
    /// The bootstrap document: seed catalog, empty cart.
    pub fn seed() -> Self {
        StateDocument {
            products: seed_products(),
            cart: Cart::new(),
        }
    }
}

impl Default for StateDocument {
    fn default() -> Self {
        StateDocument::seed()
    }
}
