use crate::collation::{DEFAULT_LOCALE, TextOrder};
use crate::error::AnalyticsError;
use crate::report::{BookPopularityEntry, TopPublisherEntry, TopReaderEntry};
use chrono::{Datelike, NaiveDate};
use core_types::{Book, BookLoan, LibrarySnapshot, Publisher, Reader};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

/// Every ranked report truncates to this many rows.
const TOP_N: usize = 5;

/// A stateless calculator for circulation reports over a `LibrarySnapshot`.
///
/// The engine owns only its collation rules, built once at construction.
/// Each report is a staged pipeline — filter, group, aggregate, rank, join,
/// truncate — over the borrowed snapshot; the staging order is part of the
/// contract, since swapping join and filter steps changes which ties survive
/// truncation.
#[derive(Debug)]
pub struct AnalyticsEngine {
    order: TextOrder,
}

impl AnalyticsEngine {
    /// Creates an engine with the default (Russian) collation tailoring.
    pub fn new() -> Result<Self, AnalyticsError> {
        Self::with_locale(DEFAULT_LOCALE)
    }

    /// Creates an engine that orders text for the given BCP-47 locale tag.
    pub fn with_locale(locale: &str) -> Result<Self, AnalyticsError> {
        Ok(Self {
            order: TextOrder::new(locale)?,
        })
    }

    /// Every book that appears in at least one loan, in title order.
    ///
    /// Inner join: loans referencing a book missing from the snapshot are
    /// silently excluded. No truncation.
    pub fn issued_book_titles(&self, snapshot: &LibrarySnapshot) -> Vec<Book> {
        let issued_ids: HashSet<Uuid> = snapshot.loans.iter().map(|l| l.book_id).collect();

        let mut books: Vec<Book> = snapshot
            .books
            .iter()
            .filter(|b| issued_ids.contains(&b.id))
            .cloned()
            .collect();
        books.sort_by(|a, b| self.order.cmp(&a.title, &b.title));

        debug!(count = books.len(), "computed issued book titles");
        books
    }

    /// The (at most) five readers with the most loans issued in the inclusive
    /// date range, listed alphabetically with their loan counts.
    ///
    /// Selection ranks by count descending; ties keep snapshot order (stable
    /// sort over first-appearance grouping). The surviving five are then
    /// re-sorted by full name — display order is deliberately a different key
    /// than selection order. A reversed range selects nothing.
    pub fn top_readers_by_books_read(
        &self,
        snapshot: &LibrarySnapshot,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<TopReaderEntry> {
        let mut counts = count_by_first_seen(
            snapshot
                .loans
                .iter()
                .filter(|l| l.loan_date >= start_date && l.loan_date <= end_date)
                .map(|l| l.reader_id),
        );
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(TOP_N);

        let readers = by_id(&snapshot.readers, |r: &Reader| r.id);
        let mut rows: Vec<TopReaderEntry> = counts
            .into_iter()
            .filter_map(|(reader_id, books_read)| {
                readers.get(&reader_id).map(|r| TopReaderEntry {
                    reader: (*r).clone(),
                    books_read,
                })
            })
            .collect();
        rows.sort_by(|a, b| self.order.cmp(&a.reader.full_name, &b.reader.full_name));

        debug!(
            count = rows.len(),
            %start_date,
            %end_date,
            "computed top readers by books read"
        );
        rows
    }

    /// The (at most) five readers whose single longest agreed loan period is
    /// the greatest, listed alphabetically.
    ///
    /// A reader whose every loan has no `loan_days` value has an absent
    /// maximum, which ranks after every present value — it is not coerced to
    /// zero, which would let such readers outrank nobody yet still tie with
    /// genuine zero-day loans.
    pub fn readers_by_longest_max_loan_period(&self, snapshot: &LibrarySnapshot) -> Vec<Reader> {
        let mut maxima = max_loan_days_by_first_seen(&snapshot.loans);
        maxima.sort_by(|a, b| cmp_desc_absent_last(a.1, b.1));
        maxima.truncate(TOP_N);

        let readers = by_id(&snapshot.readers, |r: &Reader| r.id);
        let mut rows: Vec<Reader> = maxima
            .into_iter()
            .filter_map(|(reader_id, _)| readers.get(&reader_id).map(|r| (*r).clone()))
            .collect();
        rows.sort_by(|a, b| self.order.cmp(&a.full_name, &b.full_name));

        debug!(count = rows.len(), "computed readers by longest max loan period");
        rows
    }

    /// The (at most) five publishers whose books were loaned most during the
    /// calendar year, ranked by loan count with a name tie-break.
    ///
    /// Loans referencing a missing book, and publisher ids missing from the
    /// snapshot, are silently excluded before ranking.
    pub fn top_publishers_by_year(
        &self,
        snapshot: &LibrarySnapshot,
        year: i32,
    ) -> Vec<TopPublisherEntry> {
        let books = by_id(&snapshot.books, |b: &Book| b.id);
        let counts = count_by_first_seen(
            snapshot
                .loans
                .iter()
                .filter(|l| l.loan_date.year() == year)
                .filter_map(|l| books.get(&l.book_id).map(|b| b.publisher_id)),
        );

        let publishers = by_id(&snapshot.publishers, |p: &Publisher| p.id);
        let mut rows: Vec<TopPublisherEntry> = counts
            .into_iter()
            .filter_map(|(publisher_id, issued_count)| {
                publishers.get(&publisher_id).map(|p| TopPublisherEntry {
                    publisher: (*p).clone(),
                    issued_count,
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.issued_count
                .cmp(&a.issued_count)
                .then_with(|| self.order.cmp(&a.publisher.name, &b.publisher.name))
        });
        rows.truncate(TOP_N);

        debug!(count = rows.len(), year, "computed top publishers by year");
        rows
    }

    /// The (at most) five books loaned least during the calendar year, ranked
    /// by loan count ascending with a title tie-break.
    ///
    /// Outer join over the whole catalog: a book with zero loans that year is
    /// eligible and counts as zero.
    pub fn least_popular_books_by_year(
        &self,
        snapshot: &LibrarySnapshot,
        year: i32,
    ) -> Vec<BookPopularityEntry> {
        let mut year_counts: HashMap<Uuid, usize> = HashMap::new();
        for loan in snapshot.loans.iter().filter(|l| l.loan_date.year() == year) {
            *year_counts.entry(loan.book_id).or_insert(0) += 1;
        }

        let mut rows: Vec<BookPopularityEntry> = snapshot
            .books
            .iter()
            .map(|b| BookPopularityEntry {
                book: b.clone(),
                loan_count: year_counts.get(&b.id).copied().unwrap_or(0),
            })
            .collect();
        rows.sort_by(|a, b| {
            a.loan_count
                .cmp(&b.loan_count)
                .then_with(|| self.order.cmp(&a.book.title, &b.book.title))
        });
        rows.truncate(TOP_N);

        debug!(count = rows.len(), year, "computed least popular books by year");
        rows
    }
}

/// Builds an id lookup table for a snapshot collection.
fn by_id<T, F: Fn(&T) -> Uuid>(items: &[T], id: F) -> HashMap<Uuid, &T> {
    items.iter().map(|item| (id(item), item)).collect()
}

/// Groups keys and counts occurrences, preserving first-appearance order.
///
/// The returned order is what makes selection ties stable: a later stable
/// sort by count leaves equal-count groups in the order their keys first
/// appeared in the snapshot.
fn count_by_first_seen(keys: impl Iterator<Item = Uuid>) -> Vec<(Uuid, usize)> {
    let mut slots: HashMap<Uuid, usize> = HashMap::new();
    let mut groups: Vec<(Uuid, usize)> = Vec::new();
    for key in keys {
        match slots.entry(key) {
            Entry::Occupied(slot) => groups[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((key, 1));
            }
        }
    }
    groups
}

/// Per reader, the maximum of the present `loan_days` values, in
/// first-appearance order. The maximum is absent only when every loan in the
/// group has no value.
fn max_loan_days_by_first_seen(loans: &[BookLoan]) -> Vec<(Uuid, Option<u32>)> {
    let mut slots: HashMap<Uuid, usize> = HashMap::new();
    let mut groups: Vec<(Uuid, Option<u32>)> = Vec::new();
    for loan in loans {
        let slot = match slots.entry(loan.reader_id) {
            Entry::Occupied(slot) => *slot.get(),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((loan.reader_id, None));
                groups.len() - 1
            }
        };
        let max = &mut groups[slot].1;
        *max = match (*max, loan.loan_days) {
            (Some(current), Some(days)) => Some(current.max(days)),
            (Some(current), None) => Some(current),
            (None, days) => days,
        };
    }
    groups
}

/// Descending order over optional values, with absent values after all
/// present ones.
fn cmp_desc_absent_last(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(name: &str) -> Reader {
        Reader {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            address: None,
            phone: "+70000000000".to_string(),
            registration_date: date(2023, 1, 1),
        }
    }

    fn loan(reader_id: Uuid, book_id: Uuid, on: NaiveDate, days: Option<u32>) -> BookLoan {
        BookLoan {
            id: Uuid::new_v4(),
            book_id,
            reader_id,
            loan_date: on,
            loan_days: days,
            return_date: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn count_grouping_preserves_first_appearance_order() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let groups = count_by_first_seen([b, a, b, c, a, b].into_iter());
        assert_eq!(groups, vec![(b, 3), (a, 2), (c, 1)]);
    }

    #[test]
    fn absent_loan_days_rank_after_all_present_values() {
        assert_eq!(cmp_desc_absent_last(Some(0), None), Ordering::Less);
        assert_eq!(cmp_desc_absent_last(None, Some(90)), Ordering::Greater);
        assert_eq!(cmp_desc_absent_last(Some(7), Some(90)), Ordering::Greater);
        assert_eq!(cmp_desc_absent_last(None, None), Ordering::Equal);
    }

    #[test]
    fn max_loan_days_is_absent_only_when_all_values_absent() {
        let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());
        let book = Uuid::new_v4();
        let loans = vec![
            loan(r1, book, date(2024, 1, 1), None),
            loan(r1, book, date(2024, 2, 1), Some(14)),
            loan(r1, book, date(2024, 3, 1), None),
            loan(r2, book, date(2024, 1, 5), None),
        ];
        assert_eq!(
            max_loan_days_by_first_seen(&loans),
            vec![(r1, Some(14)), (r2, None)]
        );
    }

    #[test]
    fn top_reader_selection_ties_keep_snapshot_order() {
        // Six readers with one loan each in-range forces an all-way tie
        // across the cut to five.
        let readers: Vec<Reader> = (0..6).map(|i| reader(&format!("Читатель {i}"))).collect();
        let book = Uuid::new_v4();
        let loans: Vec<BookLoan> = readers
            .iter()
            .map(|r| loan(r.id, book, date(2024, 6, 1), Some(7)))
            .collect();
        let snapshot = LibrarySnapshot {
            readers: readers.clone(),
            loans,
            ..Default::default()
        };

        let engine = AnalyticsEngine::new().unwrap();
        let rows =
            engine.top_readers_by_books_read(&snapshot, date(2024, 1, 1), date(2024, 12, 31));

        // All six tie on count = 1; the five whose loans appear first win.
        let mut expected: Vec<Uuid> = readers.iter().take(5).map(|r| r.id).collect();
        expected.sort();
        let mut selected: Vec<Uuid> = rows.iter().map(|e| e.reader.id).collect();
        selected.sort();
        assert_eq!(selected, expected);
    }

    #[test]
    fn reader_missing_from_snapshot_is_dropped_after_selection() {
        let known = reader("Иванов Иван Иванович");
        let dangling = Uuid::new_v4();
        let book = Uuid::new_v4();
        let snapshot = LibrarySnapshot {
            readers: vec![known.clone()],
            loans: vec![
                loan(known.id, book, date(2024, 3, 1), Some(7)),
                loan(dangling, book, date(2024, 3, 2), Some(7)),
            ],
            ..Default::default()
        };

        let engine = AnalyticsEngine::new().unwrap();
        let rows =
            engine.top_readers_by_books_read(&snapshot, date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].reader.id, known.id);
    }

    #[test]
    fn reversed_date_range_selects_nothing() {
        let r = reader("Петров Петр Петрович");
        let snapshot = LibrarySnapshot {
            readers: vec![r.clone()],
            loans: vec![loan(r.id, Uuid::new_v4(), date(2024, 6, 1), Some(7))],
            ..Default::default()
        };

        let engine = AnalyticsEngine::new().unwrap();
        let rows =
            engine.top_readers_by_books_read(&snapshot, date(2024, 12, 31), date(2024, 1, 1));
        assert!(rows.is_empty());
    }
}
