//! Keyword search over the records of a book.
//!
//! A record matches when the keyword is a case-insensitive substring of its
//! name, or an exact substring of its `"; "`-joined phone list.

use crate::models::Record;
use std::fmt;

/// Which part of a record matched the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    /// Contact name
    Name,
    /// Contact phone list
    Phone,
}

impl MatchedField {
    /// Get display name for the field type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }
}

/// A record that matched, with the field that matched first.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub record: &'a Record,
    pub matched: MatchedField,
}

/// The records matching a keyword, in book order.
///
/// Displays as one `<name>: <record>` line per hit, and as nothing when empty.
#[derive(Debug, Clone, Default)]
pub struct SearchResults<'a> {
    hits: Vec<SearchHit<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn hits(&self) -> &[SearchHit<'a>] {
        &self.hits
    }

    /// The matching records without match details.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.hits.iter().map(|hit| hit.record)
    }
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.hits {
            writeln!(f, "{}: {}", hit.record.name(), hit.record)?;
        }
        Ok(())
    }
}

/// Decide whether `record` matches `keyword`, and on which field.
pub fn match_record(record: &Record, keyword: &str) -> Option<MatchedField> {
    let name = record.name().as_str().to_lowercase();
    if name.contains(&keyword.to_lowercase()) {
        return Some(MatchedField::Name);
    }
    if record.joined_phones().contains(keyword) {
        return Some(MatchedField::Phone);
    }
    None
}

/// Collect every record matching `keyword`.
pub fn search_records<'a, I>(records: I, keyword: &str) -> SearchResults<'a>
where
    I: IntoIterator<Item = &'a Record>,
{
    let hits = records
        .into_iter()
        .filter_map(|record| {
            match_record(record, keyword).map(|matched| SearchHit { record, matched })
        })
        .collect();
    SearchResults { hits }
}
