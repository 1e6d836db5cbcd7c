use crate::error::StoreError;
use crate::seed::SeedData;
use core_types::{Book, BookLoan, EditionType, LibrarySnapshot, Publisher, Reader};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// The read-side interface of the data-access layer.
///
/// One "read all" operation per entity type, each returning a fully
/// materialized copy of the current collection, plus a composed `snapshot()`
/// that reads all five. Implementations must hand out copies the caller can
/// hold immutably for the duration of a report computation.
pub trait SnapshotSource {
    fn read_books(&self) -> impl Future<Output = Result<Vec<Book>, StoreError>> + Send;
    fn read_publishers(&self) -> impl Future<Output = Result<Vec<Publisher>, StoreError>> + Send;
    fn read_edition_types(
        &self,
    ) -> impl Future<Output = Result<Vec<EditionType>, StoreError>> + Send;
    fn read_readers(&self) -> impl Future<Output = Result<Vec<Reader>, StoreError>> + Send;
    fn read_loans(&self) -> impl Future<Output = Result<Vec<BookLoan>, StoreError>> + Send;

    /// Materializes all five collections into one `LibrarySnapshot`.
    fn snapshot(&self) -> impl Future<Output = Result<LibrarySnapshot, StoreError>> + Send
    where
        Self: Sync,
    {
        async {
            Ok(LibrarySnapshot {
                books: self.read_books().await?,
                publishers: self.read_publishers().await?,
                edition_types: self.read_edition_types().await?,
                readers: self.read_readers().await?,
                loans: self.read_loans().await?,
            })
        }
    }
}

#[derive(Debug, Default)]
struct Collections {
    books: Vec<Book>,
    publishers: Vec<Publisher>,
    edition_types: Vec<EditionType>,
    readers: Vec<Reader>,
    loans: Vec<BookLoan>,
}

/// An in-memory implementation of `SnapshotSource`.
///
/// The collections live behind one async `RwLock`, so the minimal write
/// operations used by the ingestion side never interleave with a read that is
/// materializing a snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the reference data set.
    pub fn seeded() -> Self {
        let data = SeedData::generate();
        debug!(
            books = data.books.len(),
            readers = data.readers.len(),
            loans = data.loans.len(),
            "seeded in-memory store"
        );
        Self {
            inner: Arc::new(RwLock::new(Collections {
                books: data.books,
                publishers: data.publishers,
                edition_types: data.edition_types,
                readers: data.readers,
                loans: data.loans,
            })),
        }
    }

    pub async fn insert_book(&self, book: Book) {
        self.inner.write().await.books.push(book);
    }

    pub async fn insert_publisher(&self, publisher: Publisher) {
        self.inner.write().await.publishers.push(publisher);
    }

    pub async fn insert_edition_type(&self, edition_type: EditionType) {
        self.inner.write().await.edition_types.push(edition_type);
    }

    pub async fn insert_reader(&self, reader: Reader) {
        self.inner.write().await.readers.push(reader);
    }

    pub async fn insert_loan(&self, loan: BookLoan) {
        self.inner.write().await.loans.push(loan);
    }
}

impl SnapshotSource for MemoryStore {
    async fn read_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.inner.read().await.books.clone())
    }

    async fn read_publishers(&self) -> Result<Vec<Publisher>, StoreError> {
        Ok(self.inner.read().await.publishers.clone())
    }

    async fn read_edition_types(&self) -> Result<Vec<EditionType>, StoreError> {
        Ok(self.inner.read().await.edition_types.clone())
    }

    async fn read_readers(&self) -> Result<Vec<Reader>, StoreError> {
        Ok(self.inner.read().await.readers.clone())
    }

    async fn read_loans(&self) -> Result<Vec<BookLoan>, StoreError> {
        Ok(self.inner.read().await.loans.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn seeded_store_materializes_the_full_fixture() {
        let store = MemoryStore::seeded();
        let snapshot = store.snapshot().await.unwrap();

        assert_eq!(snapshot.books.len(), 10);
        assert_eq!(snapshot.publishers.len(), 10);
        assert_eq!(snapshot.edition_types.len(), 10);
        assert_eq!(snapshot.readers.len(), 10);
        assert_eq!(snapshot.loans.len(), 10);
    }

    #[tokio::test]
    async fn snapshot_is_unaffected_by_later_writes() {
        let store = MemoryStore::seeded();
        let before = store.snapshot().await.unwrap();

        store
            .insert_publisher(Publisher {
                id: Uuid::new_v4(),
                name: "Азбука".to_string(),
            })
            .await;

        // The copy handed out earlier does not see the write; a fresh read does.
        assert_eq!(before.publishers.len(), 10);
        let after = store.snapshot().await.unwrap();
        assert_eq!(after.publishers.len(), 11);
    }
}
