use chrono::NaiveDate;
use core_types::{Book, BookLoan, EditionType, LibrarySnapshot, Publisher, Reader};
use uuid::Uuid;

/// The reference data set: ten of each entity, with cross-references filled
/// in. The demo CLI and the acceptance tests both run against this fixture,
/// so its titles, names and dates are load-bearing.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub edition_types: Vec<EditionType>,
    pub publishers: Vec<Publisher>,
    pub books: Vec<Book>,
    pub readers: Vec<Reader>,
    pub loans: Vec<BookLoan>,
}

impl SeedData {
    /// Generates the fixture with freshly minted identifiers.
    pub fn generate() -> Self {
        let edition_types = edition_types();
        let publishers = publishers();
        let readers = readers();
        let books = books(&edition_types, &publishers);
        let loans = loans(&books, &readers);
        Self {
            edition_types,
            publishers,
            books,
            readers,
            loans,
        }
    }

    /// Materializes the fixture as a `LibrarySnapshot` without going through
    /// a store.
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            books: self.books.clone(),
            publishers: self.publishers.clone(),
            edition_types: self.edition_types.clone(),
            readers: self.readers.clone(),
            loans: self.loans.clone(),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn named<T>(names: &[&str], build: impl Fn(String) -> T) -> Vec<T> {
    names.iter().map(|n| build((*n).to_string())).collect()
}

fn edition_types() -> Vec<EditionType> {
    named(
        &[
            "Роман",
            "Повесть",
            "Учебник",
            "Сборник рассказов",
            "Монография",
            "Энциклопедия",
            "Художественная литература",
            "Научная литература",
            "Документальная проза",
            "Журнал",
        ],
        |name| EditionType {
            id: Uuid::new_v4(),
            name,
        },
    )
}

fn publishers() -> Vec<Publisher> {
    named(
        &[
            "Эксмо",
            "АСТ",
            "Питер",
            "Манн Иванов Фербер",
            "Наука",
            "Просвещение",
            "Феникс",
            "Лабиринт",
            "Вита",
            "Мир",
        ],
        |name| Publisher {
            id: Uuid::new_v4(),
            name,
        },
    )
}

fn readers() -> Vec<Reader> {
    let rows: [(&str, &str, &str, NaiveDate); 10] = [
        ("Иванов Иван Иванович", "ул Ленина 1", "+79990000001", date(2023, 1, 10)),
        ("Петров Петр Петрович", "ул Ленина 2", "+79990000002", date(2022, 11, 5)),
        ("Сидорова Анна Михайловна", "ул Октябрьская 3", "+79990000003", date(2023, 3, 22)),
        ("Кузнецов Алексей Сергеевич", "ул Молодежная 4", "+79990000004", date(2021, 9, 14)),
        ("Орлова Мария Андреевна", "ул Чехова 5", "+79990000005", date(2024, 2, 1)),
        ("Соболев Кирилл Игоревич", "ул Новая 6", "+79990000006", date(2023, 12, 10)),
        ("Волкова Екатерина Дмитриевна", "ул Садовая 7", "+79990000007", date(2022, 7, 8)),
        ("Федоров Николай Павлович", "ул Кирова 8", "+79990000008", date(2024, 1, 17)),
        ("Семенова Ольга Степановна", "ул Полевая 9", "+79990000009", date(2021, 5, 30)),
        ("Громов Андрей Константинович", "ул Центральная 10", "+79990000010", date(2022, 3, 19)),
    ];
    rows.into_iter()
        .map(|(full_name, address, phone, registration_date)| Reader {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            address: Some(address.to_string()),
            phone: phone.to_string(),
            registration_date,
        })
        .collect()
}

fn books(edition_types: &[EditionType], publishers: &[Publisher]) -> Vec<Book> {
    // (inventory, catalog code, authors, title, edition type idx, publisher idx, year)
    let rows: [(u32, &str, &str, &str, usize, usize, i32); 10] = [
        (101, "Б-001", "М А Булгаков", "Мастер и Маргарита", 0, 0, 1967),
        (102, "Д-002", "Ф М Достоевский", "Преступление и наказание", 0, 1, 1866),
        (103, "Т-003", "Л Н Толстой", "Война и мир", 0, 2, 1869),
        (104, "Р-004", "Э М Ремарк", "Три товарища", 1, 3, 1937),
        (105, "К-005", "С Кинг", "Сияние", 6, 4, 1977),
        (106, "Б-006", "М А Булгаков", "Белая гвардия", 1, 5, 1925),
        (107, "О-007", "Д Оруэлл", "1984", 6, 0, 1949),
        (108, "К-008", "С Кинг", "Оно", 6, 7, 1986),
        (109, "Г-009", "Д Роулинг", "Гарри Поттер и философский камень", 6, 8, 1997),
        (110, "Л-010", "Д Лондон", "Мартин Иден", 0, 9, 1909),
    ];
    rows.into_iter()
        .map(
            |(inventory_number, catalog_code, authors, title, et, p, year)| Book {
                id: Uuid::new_v4(),
                inventory_number,
                catalog_code: catalog_code.to_string(),
                authors: authors.to_string(),
                title: title.to_string(),
                edition_type_id: edition_types[et].id,
                publisher_id: publishers[p].id,
                year,
            },
        )
        .collect()
}

fn loans(books: &[Book], readers: &[Reader]) -> Vec<BookLoan> {
    // (book idx, reader idx, loan date, loan days, return date)
    let rows: [(usize, usize, NaiveDate, Option<u32>, Option<NaiveDate>); 10] = [
        (0, 0, date(2024, 1, 5), Some(14), Some(date(2024, 1, 20))),
        (1, 1, date(2024, 2, 10), Some(30), None),
        (2, 2, date(2023, 12, 1), Some(21), Some(date(2023, 12, 22))),
        (3, 3, date(2024, 2, 15), Some(10), Some(date(2024, 2, 25))),
        (4, 4, date(2024, 3, 1), Some(7), None),
        (5, 0, date(2024, 1, 15), Some(14), Some(date(2024, 1, 29))),
        (6, 0, date(2024, 2, 15), Some(14), None),
        (7, 1, date(2024, 3, 10), Some(60), None),
        (8, 2, date(2024, 1, 12), Some(5), Some(date(2024, 1, 17))),
        (9, 3, date(2023, 11, 20), Some(90), None),
    ];
    rows.into_iter()
        .map(|(b, r, loan_date, loan_days, return_date)| BookLoan {
            id: Uuid::new_v4(),
            book_id: books[b].id,
            reader_id: readers[r].id,
            loan_date,
            loan_days,
            return_date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_references_are_consistent() {
        let data = SeedData::generate();

        let book_ids: HashSet<_> = data.books.iter().map(|b| b.id).collect();
        let reader_ids: HashSet<_> = data.readers.iter().map(|r| r.id).collect();
        let publisher_ids: HashSet<_> = data.publishers.iter().map(|p| p.id).collect();
        let edition_type_ids: HashSet<_> = data.edition_types.iter().map(|e| e.id).collect();

        assert!(data.loans.iter().all(|l| book_ids.contains(&l.book_id)));
        assert!(data.loans.iter().all(|l| reader_ids.contains(&l.reader_id)));
        assert!(
            data.books
                .iter()
                .all(|b| publisher_ids.contains(&b.publisher_id))
        );
        assert!(
            data.books
                .iter()
                .all(|b| edition_type_ids.contains(&b.edition_type_id))
        );
    }

    #[test]
    fn every_collection_has_ten_entries() {
        let data = SeedData::generate();
        assert_eq!(data.edition_types.len(), 10);
        assert_eq!(data.publishers.len(), 10);
        assert_eq!(data.books.len(), 10);
        assert_eq!(data.readers.len(), 10);
        assert_eq!(data.loans.len(), 10);
    }
}
