//! # Storage Layer
//!
//! Persistence in todoz is deliberately dumb: a [`BlobStore`] maps a string key
//! to a string value, the same shape as browser local storage. The todo
//! collection is serialized as one JSON blob under one key; the store never
//! looks inside it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - Each key is a file, `<root>/<key>.json`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! ~/.local/share/todoz/
//! ├── todos.json      # JSON array of todo records
//! └── config.json     # User configuration (see config.rs)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for key/value blob storage.
pub trait BlobStore {
    /// Returns the blob stored under `key`, or `Ok(None)` if there is none.
    /// Returns Err only on actual I/O errors.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
