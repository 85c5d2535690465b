//! # minimart-store: Persistence Layer for Minimart
//!
//! This crate provides durable storage for the shop state: a single JSON
//! document holding the seed catalog and the cart, fully rewritten on
//! every mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Minimart Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (POST /api/cart)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   minimart-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐          ┌────────────────────────┐        │   │
//! │  │   │   FileStore   │          │     StateDocument      │        │   │
//! │  │   │  (store.rs)   │◄────────►│    (document.rs)       │        │   │
//! │  │   │               │          │                        │        │   │
//! │  │   │ load / save   │          │ { products, cart }     │        │   │
//! │  │   └───────────────┘          └────────────────────────┘        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.json (whole-document rewrite, write-then-rename)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`document`] - The persisted state document layout
//! - [`store`] - File-backed load/save
//! - [`error`] - Persistence error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use document::StateDocument;
pub use error::{StoreError, StoreResult};
pub use store::FileStore;
