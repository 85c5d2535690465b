//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the document path and category        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the server) ← generic 500, details stay in the logs      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Persistence errors.
///
/// Both variants are unexpected at request time and surface as a generic
/// internal error at the HTTP boundary. Neither is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted data exists but cannot be parsed as a valid state
    /// document.
    ///
    /// ## When This Occurs
    /// - truncated or hand-edited db.json
    /// - a document written by an incompatible version
    ///
    /// The store never recovers from this on its own; whether to
    /// re-initialize is the caller's explicit policy.
    #[error("corrupt state document at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The underlying medium could not be read or written.
    ///
    /// ## When This Occurs
    /// - directory missing or permission denied
    /// - disk full during a save
    #[error("persistence I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
