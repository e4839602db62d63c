//! Data models for the contact book.
//!
//! This module contains the contact record and the book that owns all records.

pub mod book;
pub mod record;

pub use book::{ContactBook, Pages};
pub use record::Record;
