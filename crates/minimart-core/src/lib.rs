//! # minimart-core: Pure Business Logic for Minimart
//!
//! This crate is the **heart** of Minimart. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Minimart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/server)                       │   │
//! │  │    GET /api/products ──► POST /api/cart ──► POST /api/checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ minimart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Receipt  │  │   │
//! │  │   │  Catalog  │  │  totals   │  │ CartLine  │  │ customer  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                minimart-store (Persistence Layer)               │   │
//! │  │             JSON state document, full rewrite per save          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - Cart state machine (merge, remove, totals)
//! - [`checkout`] - Receipt construction from submitted items
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic over its inputs
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use minimart_core::Cart` instead of
// `use minimart_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Product};
pub use checkout::{checkout, Customer, Receipt, SubmittedItem};
pub use error::{CoreError, CoreResult};
pub use money::Money;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Customer name used on receipts when the client supplies none.
pub const GUEST_CUSTOMER_NAME: &str = "Guest";
