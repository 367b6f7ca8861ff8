//! # HR Enricher
//!
//! Turns raw user records from the upstream API into employee records by
//! attaching HR attributes.
//!
//! ## Features
//!
//! - `RecordEnricher` seam so callers never depend on a concrete generator
//! - Randomized enrichment with optional seeding for reproducible runs
//! - Deterministic fixture enrichment for tests and demos
//! - Mock six-month bookmark trend data

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod enricher;
pub mod fixture;
pub mod random;
pub mod trends;

pub use enricher::RecordEnricher;
pub use fixture::FixtureEnricher;
pub use random::RandomEnricher;
pub use trends::generate_bookmark_trends;
