//! # Bookmarker
//!
//! Bookmarker keeps a list of pages you meant to come back to, each with a
//! short reminder of why. It is a library first; the `bookmarker` binary is
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, renders results, owns stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade; turns "1", "2-4" or a UUID into selectors   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One operation each; outcome plus notifications           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Managers (manager.rs, settings.rs)                         │
//! │  - Own the in-memory collection and the preferences         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - Key/value StorageBackend: FileBackend, MemBackend        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward writes to the terminal. Diagnostics go
//! through `tracing`; user-facing outcomes travel back in
//! [`commands::CmdResult`].
//!
//! ## Identity
//!
//! Pages are stored under a UUID. Users refer to them by display index:
//! 1 is the most recently saved page. See `index.rs`.
//!
//! ## Testing
//!
//! Commands and managers are tested against `MemBackend`, which can be told
//! to fail writes. Filesystem behavior is tested with temporary directories
//! and the binary end to end under `tests/`.

pub mod api;
pub mod capture;
pub mod codec;
pub mod commands;
pub mod error;
pub mod index;
pub mod init;
pub mod manager;
pub mod model;
pub mod opener;
pub mod settings;
pub mod store;
