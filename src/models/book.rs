//! The address book: records keyed by name.

use crate::models::Record;
use crate::search::{search_records, SearchResults};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// A keyed collection of contact records.
///
/// Keys are the plain text of each record's name. Iteration follows first
/// insertion; overwriting a record keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    records: IndexMap<String, Record>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "adding record");
        self.records.insert(key, record)
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, returning it if it was present.
    ///
    /// Later records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            debug!(name, "deleted record");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in book order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Record names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Split the book into ordered pages of at most `page_size` records.
    ///
    /// Each call starts from the first record. A page size of 0 is treated as 1.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.values(),
            page_size: page_size.max(1),
        }
    }

    /// Records whose name or phone list contains `keyword`.
    pub fn search(&self, keyword: &str) -> SearchResults<'_> {
        let results = search_records(self.iter(), keyword);
        debug!(keyword, hits = results.len(), "searched book");
        results
    }

    /// Records with a birthday within `within_days` of `today`, soonest first.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<_> = self
            .iter()
            .filter_map(|record| {
                let days = record.days_to_birthday_from(today).ok()?;
                (days <= within_days).then_some((record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }
}

impl FromIterator<Record> for ContactBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, record) in &self.records {
            writeln!(f, "{}: {}", name, record)?;
        }
        Ok(())
    }
}

/// Lazy iterator over pages of a [`ContactBook`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: indexmap::map::Values<'a, String, Record>,
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<_> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}
