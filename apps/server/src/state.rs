//! # Shared Application State
//!
//! One `Shop` instance behind a mutex: the cart, the document it lives in,
//! and the store that persists it.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      State Locking Model                                │
//! │                                                                         │
//! │  axum handles requests concurrently, but the cart invariants assume    │
//! │  serialized access. One Mutex therefore covers the WHOLE               │
//! │  read-mutate-persist cycle:                                            │
//! │                                                                         │
//! │    lock ──► mutate cart ──► store.save(document) ──► unlock            │
//! │                                                                         │
//! │  The save is a bounded small-file write, so holding the lock across    │
//! │  it is cheap, and no operation awaits while holding it.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use minimart_core::Catalog;
use minimart_store::{FileStore, StateDocument};

/// The mutable half of the application: state document plus its store.
#[derive(Debug)]
pub struct Shop {
    /// The persisted document; `document.cart` is the server-held cart.
    pub document: StateDocument,

    /// Persistence for the document.
    pub store: FileStore,
}

/// Shared state handed to every route handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The immutable catalog. Read-only after startup, so no lock.
    pub catalog: Arc<Catalog>,

    shop: Arc<Mutex<Shop>>,
}

impl AppState {
    /// Creates the application state from a loaded document and its store.
    pub fn new(catalog: Catalog, document: StateDocument, store: FileStore) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            shop: Arc::new(Mutex::new(Shop { document, store })),
        }
    }

    /// Executes a function with read access to the shop.
    pub fn with_shop<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Shop) -> R,
    {
        let shop = self.shop.lock().expect("shop mutex poisoned");
        f(&shop)
    }

    /// Executes a function with write access to the shop.
    ///
    /// The closure should mutate the document AND persist it before
    /// returning, so no other request observes an unpersisted cart.
    pub fn with_shop_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Shop) -> R,
    {
        let mut shop = self.shop.lock().expect("shop mutex poisoned");
        f(&mut shop)
    }
}
