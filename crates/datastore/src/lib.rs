//! # Bibliotek Datastore
//!
//! This crate is the data-access boundary of the system: the place the
//! analytics layer obtains its fully materialized entity snapshots from.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** Everything storage-specific lives here, behind the
//!   `SnapshotSource` trait. Callers see five "read all" operations and a
//!   composed `snapshot()`; they never see locks or collection internals.
//! - **Snapshot Semantics:** Reads clone the collections out under a read
//!   lock, so a report computation holds an immutable point-in-time copy and
//!   is never affected by writes that land after the read.
//!
//! ## Public API
//!
//! - `SnapshotSource`: the read-side interface consumed by callers.
//! - `MemoryStore`: the in-memory implementation, with minimal write
//!   operations for the ingestion side.
//! - `SeedData`: the reference data set for demos and acceptance tests.
//! - `StoreError`: the specific error types that can be returned from this
//!   crate.

pub mod error;
pub mod seed;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use seed::SeedData;
pub use store::{MemoryStore, SnapshotSource};
