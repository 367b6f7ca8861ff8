//! # HR Bookmarks
//!
//! Explicit bookmark store for the HR dashboard, replacing ambient global
//! state with an object that is passed to whoever needs it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │            Views (employee list, detail, analytics)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  load / add / remove / contains
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      BookmarkStore                           │
//! │        (in-memory list, rewritten to storage on change)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────┐   ┌──────────────────────────────┐
//! │     MemoryStorage       │   │        FileStorage            │
//! │  (tests, ephemeral)     │   │   (one JSON file per key)     │
//! └─────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hr_bookmarks::{BookmarkStore, FileStorage};
//!
//! let mut store = BookmarkStore::load(FileStorage::new(".hr-dashboard"))?;
//! store.add(employee)?;
//! assert!(store.contains(employee_id));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod error;
pub mod store;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};
pub use error::{BookmarkError, Result};
pub use store::{BookmarkStore, BOOKMARKS_KEY};
