use core_types::{Book, Publisher, Reader};
use serde::{Deserialize, Serialize};

/// One row of the top-readers-by-books-read report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopReaderEntry {
    pub reader: Reader,
    /// Loans issued to this reader inside the requested period.
    pub books_read: usize,
}

/// One row of the top-publishers-by-year report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPublisherEntry {
    pub publisher: Publisher,
    /// Loans of this publisher's books issued during the requested year.
    pub issued_count: usize,
}

/// One row of the least-popular-books-by-year report.
///
/// Unlike the other reports this one spans the whole catalog: a book with no
/// loans at all in the requested year appears with `loan_count == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPopularityEntry {
    pub book: Book,
    pub loan_count: usize,
}
