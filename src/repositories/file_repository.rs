//! Single-file storage for a contact book.

use crate::error::{PersistenceError, PersistenceResult};
use crate::models::ContactBook;
use crate::repositories::format::{decode, encode, Encoding};
use crate::repositories::traits::BookRepository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Book repository backed by a single local file.
///
/// The whole book is written on every save. Failures are logged and returned
/// to the caller as [`PersistenceError`] values.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    path: PathBuf,
    encoding: Encoding,
}

impl FileBookRepository {
    /// Create a repository for `path`, choosing the encoding from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let encoding = Encoding::from_path(&path);
        Self { path, encoding }
    }

    /// Create a repository with an explicit encoding.
    pub fn with_encoding(path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        Self {
            path: path.into(),
            encoding,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl BookRepository for FileBookRepository {
    fn save(&self, book: &ContactBook) -> PersistenceResult<()> {
        let result = encode(book, self.encoding)
            .and_then(|bytes| fs::write(&self.path, bytes).map_err(|e| self.io_error(e)));
        match &result {
            Ok(()) => info!(
                path = %self.path.display(),
                records = book.len(),
                "Address book saved"
            ),
            Err(e) => error!(path = %self.path.display(), "Failed to save the address book: {}", e),
        }
        result
    }

    fn load(&self) -> PersistenceResult<ContactBook> {
        let result = fs::read(&self.path)
            .map_err(|e| self.io_error(e))
            .and_then(|bytes| decode(&bytes, self.encoding));
        match &result {
            Ok(book) => info!(
                path = %self.path.display(),
                records = book.len(),
                "Address book loaded"
            ),
            Err(e) => error!(path = %self.path.display(), "Failed to load the address book: {}", e),
        }
        result
    }
}

/// Save `book` to `path`, with the encoding picked from the extension.
pub fn save_address_book(path: impl AsRef<Path>, book: &ContactBook) -> PersistenceResult<()> {
    FileBookRepository::new(path.as_ref()).save(book)
}

/// Load a book from `path`, with the encoding picked from the extension.
pub fn load_address_book(path: impl AsRef<Path>) -> PersistenceResult<ContactBook> {
    FileBookRepository::new(path.as_ref()).load()
}
