//! Persistence for contact books: the saved file format and where it is stored.

mod file_repository;
pub mod format;
mod traits;

pub use file_repository::{load_address_book, save_address_book, FileBookRepository};
pub use format::Encoding;
pub use traits::BookRepository;
