//! # HR Query
//!
//! In-memory query engine behind the employee list, bookmark list and
//! analytics views.
//!
//! ## Features
//!
//! - Case-insensitive substring search over name, email and department
//! - Department and rating facets (OR within a facet, AND across facets)
//! - Per-department counts and average ratings
//! - Analytics reports as JSON or Markdown

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod engine;
pub mod error;
pub mod reports;
pub mod search;

pub use engine::{
    aggregate_by_category, available_departments, available_ratings, filter, matches,
    CategoryStats, QueryEngine,
};
pub use error::QueryError;
pub use reports::{AnalyticsReport, DepartmentRow};
pub use search::{Page, SearchState};
