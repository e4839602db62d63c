//! Contact Book - a personal address book for names, phone numbers and birthdays.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: Contact records and the book that owns them
//! - **search**: Keyword search over a book's records
//! - **repositories**: Versioned file persistence for a whole book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, PersistenceError, RecordError};
pub use models::{ContactBook, Pages, Record};
pub use repositories::{
    load_address_book, save_address_book, BookRepository, Encoding, FileBookRepository,
};
pub use search::{MatchedField, SearchHit, SearchResults};
