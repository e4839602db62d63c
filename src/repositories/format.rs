//! On-disk representation of a contact book.
//!
//! The file holds a versioned envelope with one entry per record. Fields are
//! stored as plain text and validated again when the book is rebuilt.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::{ContactBook, Record};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version written by this build.
pub const FORMAT_VERSION: u32 = 1;

/// Encoding used for the saved file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Compact binary (bincode)
    #[default]
    Binary,
    /// Pretty-printed JSON
    Json,
}

impl Encoding {
    /// Pick the encoding from a file extension: `.json` is JSON, anything else binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Binary,
        }
    }
}

/// Top-level saved document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookFile {
    pub format_version: u32,
    pub records: Vec<StoredRecord>,
}

/// One saved contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredRecord {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(Phone::to_string).collect(),
            birthday: record.birthday().map(Birthday::to_string),
        }
    }
}

impl TryFrom<StoredRecord> for Record {
    type Error = PersistenceError;

    fn try_from(stored: StoredRecord) -> PersistenceResult<Self> {
        let invalid = |e: crate::domain::ValidationError| {
            PersistenceError::Decode(format!("record {:?}: {}", stored.name, e))
        };
        let name = Name::new(stored.name.clone()).map_err(invalid)?;
        let phones = stored
            .phones
            .iter()
            .map(|phone| Phone::new(phone.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;
        let birthday = stored
            .birthday
            .as_deref()
            .map(Birthday::new)
            .transpose()
            .map_err(invalid)?;
        Ok(Record::from_parts(name, phones, birthday))
    }
}

impl From<&ContactBook> for BookFile {
    fn from(book: &ContactBook) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            records: book.iter().map(StoredRecord::from).collect(),
        }
    }
}

impl TryFrom<BookFile> for ContactBook {
    type Error = PersistenceError;

    fn try_from(file: BookFile) -> PersistenceResult<Self> {
        if file.format_version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: file.format_version,
                expected: FORMAT_VERSION,
            });
        }
        let mut book = ContactBook::new();
        for stored in file.records {
            let record = Record::try_from(stored)?;
            if book.find(record.name().as_str()).is_some() {
                return Err(PersistenceError::Decode(format!(
                    "duplicate record {:?}",
                    record.name().as_str()
                )));
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

/// Encode a book into bytes.
pub fn encode(book: &ContactBook, encoding: Encoding) -> PersistenceResult<Vec<u8>> {
    let file = BookFile::from(book);
    match encoding {
        Encoding::Binary => {
            bincode::serialize(&file).map_err(|e| PersistenceError::Encode(e.to_string()))
        }
        Encoding::Json => {
            serde_json::to_vec_pretty(&file).map_err(|e| PersistenceError::Encode(e.to_string()))
        }
    }
}

/// Decode bytes written by [`encode`], validating every field.
pub fn decode(bytes: &[u8], encoding: Encoding) -> PersistenceResult<ContactBook> {
    let file: BookFile = match encoding {
        Encoding::Binary => {
            bincode::deserialize(bytes).map_err(|e| PersistenceError::Decode(e.to_string()))?
        }
        Encoding::Json => {
            serde_json::from_slice(bytes).map_err(|e| PersistenceError::Decode(e.to_string()))?
        }
    };
    ContactBook::try_from(file)
}
