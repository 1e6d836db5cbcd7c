//! # Bibliotek Analytics Engine
//!
//! This crate answers the library's operational questions: which books have
//! ever been issued, who the most active readers are, which publishers
//! dominate a year's circulation, and which books are gathering dust.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` holds nothing but the
//!   collation rules it was constructed with. Every report takes a borrowed
//!   `LibrarySnapshot` and returns freshly built results, so calls are
//!   idempotent and may run concurrently.
//! - **Degrade, Don't Fail:** Reversed date ranges and dangling foreign keys
//!   produce empty or shorter results, never errors. The only fallible step
//!   is constructing the engine for an unknown collation locale.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the five report operations.
//! - `TopReaderEntry`, `TopPublisherEntry`, `BookPopularityEntry`: report rows.
//! - `TextOrder`: the locale-aware comparison used for all string ordering.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

pub mod collation;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use collation::{DEFAULT_LOCALE, TextOrder};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{BookPopularityEntry, TopPublisherEntry, TopReaderEntry};
