//! Storage abstraction for saving and loading a book.

use crate::error::PersistenceResult;
use crate::models::ContactBook;

/// Repository for saving and loading a whole contact book.
///
/// Provides abstraction over book storage, enabling different
/// implementations (local file, in-memory for tests).
pub trait BookRepository {
    /// Persist the entire book, replacing any earlier copy.
    fn save(&self, book: &ContactBook) -> PersistenceResult<()>;

    /// Load the most recently saved book.
    fn load(&self) -> PersistenceResult<ContactBook>;
}
