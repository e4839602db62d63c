//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical text layout of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// Day and month may be written with one or two digits, the year with four.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})$").expect("valid birthday regex")
});

/// A date of birth written as DD-MM-YYYY.
///
/// The value must be a real calendar date. It is kept as a [`NaiveDate`] and
/// rendered in the canonical zero-padded form, so `10-3-1991` becomes
/// `10-03-1991`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("10-3-1991").unwrap();
/// assert_eq!(birthday.to_string(), "10-03-1991");
/// assert!(Birthday::new("31-02-2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a DD-MM-YYYY birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the format or names a date that does not exist.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        Self::parse(value)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(value.to_string()))
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        let caps = BIRTHDAY_PATTERN.captures(value)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        if year == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday as observed in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
    }

    /// The first birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.in_year(today.year() + 1)
        }
    }

    /// Whole days from `today` until the next birthday, 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("05-11-1987").unwrap();
        assert_eq!(birthday.date(), date(1987, 11, 5));
        assert_eq!(birthday.to_string(), "05-11-1987");
    }

    #[test]
    fn test_birthday_canonicalizes_short_fields() {
        assert_eq!(Birthday::new("1-2-2000").unwrap().to_string(), "01-02-2000");
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1991-03-10").is_err());
        assert!(Birthday::new("10/03/1991").is_err());
        assert!(Birthday::new("10-03-91").is_err());
        assert!(Birthday::new("010-03-1991").is_err());
        assert!(Birthday::new(" 10-03-1991").is_err());
        assert!(Birthday::new("10-03-1991x").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31-02-2020").is_err());
        assert!(Birthday::new("29-02-2019").is_err());
        assert!(Birthday::new("00-01-2000").is_err());
        assert!(Birthday::new("15-13-2000").is_err());
        assert!(Birthday::new("01-01-0000").is_err());
        assert!(Birthday::new("29-02-2020").is_ok());
    }

    #[test]
    fn test_days_until_same_day_is_zero() {
        let birthday = Birthday::new("18-10-1990").unwrap();
        assert_eq!(birthday.days_until(date(2026, 10, 18)), Some(0));
    }

    #[test]
    fn test_days_until_later_this_year() {
        let birthday = Birthday::new("25-12-1990").unwrap();
        assert_eq!(birthday.days_until(date(2026, 12, 1)), Some(24));
    }

    #[test]
    fn test_days_until_rolls_to_next_year() {
        let birthday = Birthday::new("10-03-1991").unwrap();
        // 2027 is not a leap year
        assert_eq!(birthday.days_until(date(2026, 3, 11)), Some(364));
        // 2028 is
        assert_eq!(birthday.days_until(date(2027, 3, 11)), Some(365));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::new("29-02-2000").unwrap();
        assert_eq!(birthday.in_year(2026), Some(date(2026, 2, 28)));
        assert_eq!(birthday.in_year(2028), Some(date(2028, 2, 29)));
        assert_eq!(birthday.days_until(date(2026, 2, 28)), Some(0));
    }

    #[test]
    fn test_birthday_serde_uses_canonical_text() {
        let birthday = Birthday::new("1-1-2001").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01-01-2001\"");

        let back: Birthday = serde_json::from_str("\"01-01-2001\"").unwrap();
        assert_eq!(back, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"31-04-2001\"");
        assert!(bad.is_err());
    }
}
