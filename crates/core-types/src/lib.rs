//! # Bibliotek Core Types
//!
//! This crate defines the shared vocabulary of the system: the five domain
//! entities of a library circulation catalog and the `LibrarySnapshot`
//! aggregate that carries fully materialized copies of their collections.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate sits at the bottom of the dependency graph. It
//!   has no knowledge of storage, transport, or reporting logic.
//! - **Plain Data:** Entities are plain structs with public fields. They hold
//!   no behavior beyond what `derive` provides, so every layer above can read
//!   them without ceremony.
//!
//! ## Public API
//!
//! - `Book`, `Publisher`, `EditionType`, `Reader`, `BookLoan`: the entities.
//! - `LibrarySnapshot`: the five collections of one consistent point in time.

pub mod entities;
pub mod snapshot;

// Re-export the core types to provide a clean public API.
pub use entities::{Book, BookLoan, EditionType, Publisher, Reader};
pub use snapshot::LibrarySnapshot;
