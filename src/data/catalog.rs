// catalog.rs - In-memory book catalog for one merge run

use crate::data::record::{compare_ids, BookRecord};
use serde_json::Value;

/// The ordered collection of book records produced by one run, together with
/// the run-scoped list of ids already seen for duplicate detection.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    seen_ids: Vec<Value>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning `true` if its id was already seen.
    ///
    /// Duplicates are tolerated: the record is appended either way, the
    /// return value only drives the warning.
    pub fn push(&mut self, record: BookRecord) -> bool {
        let id = record.id().clone();
        let duplicate = self.seen_ids.iter().any(|seen| *seen == id);
        if !duplicate {
            self.seen_ids.push(id);
        }
        self.books.push(record);
        duplicate
    }

    /// Sort ascending by id. Stable, so records sharing an id keep scan order.
    pub fn sort_by_id(&mut self) {
        self.books.sort_by(|a, b| compare_ids(a.id(), b.id()));
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }
}
