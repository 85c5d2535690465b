//! # Catalog Module
//!
//! The fixed product catalog.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog                                        │
//! │                                                                         │
//! │  • Fixed size, fixed order, defined at construction                     │
//! │  • No mutation operations - products are never edited or deleted        │
//! │  • list() and find() never fail                                         │
//! │                                                                         │
//! │  id  name        price                                                  │
//! │  ──  ──────────  ─────                                                  │
//! │   1  Headphones   1200                                                  │
//! │   2  Keyboard      800                                                  │
//! │   3  Mouse         500                                                  │
//! │   4  Monitor      7000                                                  │
//! │   5  Webcam       2000                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
///
/// Products are created at catalog definition time and never mutated.
/// The `id` is a positive integer, unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the catalog.
    pub id: i64,

    /// Display name (non-empty).
    pub name: String,

    /// Price in minor units. On the wire this field is `price`; the
    /// persisted document and the API are minor-unit-agnostic.
    #[serde(rename = "price")]
    pub price_cents: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Derives the presentation image path from the product identity.
    ///
    /// Deterministic and never persisted; the transport layer appends it
    /// to product listings at response time.
    pub fn image_path(&self) -> String {
        format!("/images/{}.jpg", self.name.to_lowercase())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The immutable list of purchasable products.
///
/// ## Contract
/// - `list()` returns an ordered sequence, fixed size, fixed order
/// - `find()` resolves a product id to a product, if any
/// - no mutation operations exist; construction is the only write
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The fixed demo catalog.
    pub fn seed() -> Self {
        Catalog::new(seed_products())
    }

    /// Returns all products, in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::seed()
    }
}

/// The seed product list, shared with the persisted state document.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product { id: 1, name: "Headphones".to_string(), price_cents: 1200 },
        Product { id: 2, name: "Keyboard".to_string(), price_cents: 800 },
        Product { id: 3, name: "Mouse".to_string(), price_cents: 500 },
        Product { id: 4, name: "Monitor".to_string(), price_cents: 7000 },
        Product { id: 5, name: "Webcam".to_string(), price_cents: 2000 },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
