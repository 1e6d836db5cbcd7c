use crate::entities::{Book, BookLoan, EditionType, Publisher, Reader};
use serde::{Deserialize, Serialize};

/// Fully materialized, point-in-time copies of the five entity collections.
///
/// A snapshot is read once from the data-access layer and then borrowed,
/// immutably, for the duration of one report computation. Nothing in the
/// system mutates a snapshot after it has been handed out, so any number of
/// report computations may share one (or hold their own) without coordination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub publishers: Vec<Publisher>,
    pub edition_types: Vec<EditionType>,
    pub readers: Vec<Reader>,
    pub loans: Vec<BookLoan>,
}
