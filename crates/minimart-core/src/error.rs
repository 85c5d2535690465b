//! # Error Types
//!
//! Domain-specific error types for minimart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  minimart-core errors (this file)                                      │
//! │  └── CoreError        - Validation and lookup failures                 │
//! │                                                                         │
//! │  minimart-store errors (separate crate)                                │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError         - What the client sees (serialized)              │
//! │                                                                         │
//! │  Flow: CoreError / StoreError → ApiError → HTTP status + JSON body     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Operations that fail leave the cart untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Each variant maps to a status class at the transport boundary:
/// `InvalidRequest` is client error (400), the two not-found variants are
/// 404. Persistence failures live in minimart-store, not here.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or missing input.
    ///
    /// ## When This Occurs
    /// - `qty == 0` on a cart adjustment (does not mean "remove")
    /// - non-numeric product id in a removal path
    /// - empty or non-array `cartItems` at checkout
    #[error("{0}")]
    InvalidRequest(String),

    /// Product id does not resolve against the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// No cart line exists for the given product id.
    #[error("Item not found: {0}")]
    ItemNotFound(i64),
}

impl CoreError {
    /// Creates an `InvalidRequest` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidRequest(message.into())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
