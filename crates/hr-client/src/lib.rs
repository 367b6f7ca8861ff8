//! # HR Dashboard Client
//!
//! Loads user records from the upstream users API, enriches them into
//! employees and serves the dashboard views from a terminal.
//!
//! ## Features
//!
//! - **Record Loading**: DummyJSON users over HTTP, or an offline roster file
//! - **Search & Filters**: Free-text search with department and rating facets
//! - **Bookmarks**: Persisted across runs in the data directory
//! - **Analytics**: Department performance and bookmark trends
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  hr-dashboard (clap CLI)                    │
//! │        list | show | facets | bookmark | analytics          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Dashboard                             │
//! │         (EmployeeLoader, QueryEngine, BookmarkStore)        │
//! └─────────────────────────────────────────────────────────────┘
//!          │                    │                    │
//!          ▼                    ▼                    ▼
//! ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐
//! │   UserSource    │  │ RecordEnricher  │  │ StorageBackend  │
//! │ (HTTP / static) │  │ (random/fixed)  │  │  (file/memory)  │
//! └─────────────────┘  └─────────────────┘  └─────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod source;

pub use app::{Dashboard, ListQuery, ReportFormat};
pub use config::Config;
pub use error::{DashboardError, LoadError};
pub use loader::EmployeeLoader;
pub use source::{DummyJsonSource, StaticSource, UserSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
