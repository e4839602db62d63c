use contact_book::error::{PersistenceError, PersistenceResult};
use contact_book::models::ContactBook;
use contact_book::repositories::{format, BookRepository, Encoding};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock book repository for testing.
///
/// Keeps the last saved book as encoded bytes, so loads go through the same
/// validation as a real file, and tracks method calls for verification.
#[allow(dead_code)]
pub struct MockBookRepository {
    stored: RefCell<Option<Vec<u8>>>,
    fail_saves: bool,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(None),
            fail_saves: false,
            call_counts: RefCell::new(HashMap::new()),
        }
    }

    /// Create a repository whose saves always fail.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    /// Replace the stored bytes directly.
    pub fn set_raw(&self, bytes: Vec<u8>) {
        *self.stored.borrow_mut() = Some(bytes);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn record_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn save(&self, book: &ContactBook) -> PersistenceResult<()> {
        self.record_call("save");
        if self.fail_saves {
            return Err(PersistenceError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        let bytes = format::encode(book, Encoding::Binary)?;
        self.set_raw(bytes);
        Ok(())
    }

    fn load(&self) -> PersistenceResult<ContactBook> {
        self.record_call("load");
        match self.stored.borrow().as_deref() {
            Some(bytes) => format::decode(bytes, Encoding::Binary),
            None => Err(PersistenceError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing saved"),
            }),
        }
    }
}
