use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalogued book held by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    /// The library's own stock number for this physical copy.
    pub inventory_number: u32,
    /// The shelf classification code (e.g., "Б-001").
    pub catalog_code: String,
    pub authors: String,
    pub title: String,
    pub edition_type_id: Uuid,
    pub publisher_id: Uuid,
    /// Year of publication.
    pub year: i32,
}

/// A publishing house referenced by books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: Uuid,
    pub name: String,
}

/// A classification of a book's edition (novel, textbook, journal, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionType {
    pub id: Uuid,
    pub name: String,
}

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: Uuid,
    pub full_name: String,
    pub address: Option<String>,
    pub phone: String,
    pub registration_date: NaiveDate,
}

/// A single issuance of a book to a reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLoan {
    pub id: Uuid,
    pub book_id: Uuid,
    pub reader_id: Uuid,
    pub loan_date: NaiveDate,
    /// The agreed loan period in days. Absent when no period was fixed at
    /// issue time; this is distinct from a period of zero days.
    pub loan_days: Option<u32>,
    /// Absent while the book is still out.
    pub return_date: Option<NaiveDate>,
}
