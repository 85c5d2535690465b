//! # File Store
//!
//! File-backed load/save for the state document.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         FileStore                                       │
//! │                                                                         │
//! │  load()                                                                 │
//! │  ├── no file yet ──► seed document written, then returned               │
//! │  ├── file parses ──► StateDocument                                      │
//! │  └── file broken ──► StoreError::Corrupt (caller decides recovery)      │
//! │                                                                         │
//! │  save(doc)                                                              │
//! │  ├── serializes the WHOLE document (no partial/delta writes)            │
//! │  ├── writes a sibling temp file, then renames over the target           │
//! │  └── I/O failure ──► StoreError::Io, propagated, never retried          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are blocking and bounded (one small document); callers invoke
//! them synchronously while holding the shop lock, which is what
//! serializes read-mutate-persist cycles.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document::StateDocument;
use crate::error::{StoreError, StoreResult};

/// File-backed store for the state document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the given document path. No I/O happens until
    /// [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// The document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state document.
    ///
    /// On the first ever invocation (no file) the seed document is
    /// materialized, persisted, and returned. A file that exists but does
    /// not parse yields [`StoreError::Corrupt`]; recovery is the caller's
    /// explicit policy, never applied silently here.
    pub fn load(&self) -> StoreResult<StateDocument> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No state document yet, seeding");
                let doc = StateDocument::seed();
                self.save(&doc)?;
                return Ok(doc);
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let doc = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %self.path.display(), "State document loaded");
        Ok(doc)
    }

    /// Persists the state document, fully replacing prior state.
    ///
    /// The document is written to a sibling temp file and renamed over the
    /// target, so a crash mid-write leaves the previous document intact.
    pub fn save(&self, doc: &StateDocument) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(doc)
            .map_err(|e| StoreError::Io(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), lines = doc.cart.lines().len(), "State document saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
