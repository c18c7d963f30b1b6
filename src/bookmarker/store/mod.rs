//! # Storage Layer
//!
//! Persistence is a plain key-value contract: whole blobs are read and
//! written under fixed keys, the way a browser's local storage works. The
//! [`StorageBackend`] trait is that contract; the typed stores on top of it
//! know which key they own and how to encode it.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one `<key>.json` file per key
//!   inside the data directory, written atomically (tmp file + rename).
//! - [`memory::MemBackend`]: in-memory storage for tests. Clones share the
//!   same map so a test can keep a handle and inspect what was persisted.
//!
//! ## Typed Stores
//!
//! - [`records::RecordStore`]: the saved-page collection under `savedPages`.
//! - [`settings::SettingsStore`]: the preferences object under `settings`.
//!
//! ```text
//! <data dir>/
//! ├── savedPages.json     # JSON array of saved pages ("[]" when emptied)
//! └── settings.json       # {"autoDelete": false}
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod records;
pub mod settings;

pub const SAVED_PAGES_KEY: &str = "savedPages";
pub const SETTINGS_KEY: &str = "settings";

/// Raw blob storage keyed by name.
///
/// All methods take `&self`; implementations that mutate in memory use
/// interior mutability since the application is single-threaded.
pub trait StorageBackend {
    /// Read the blob stored under `key`. `Ok(None)` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`.
    /// MUST be atomic: a reader sees either the old or the new value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
