//! A single contact: name, phone numbers and an optional birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use std::fmt;
use tracing::debug;

/// One contact's full data.
///
/// Phones keep insertion order and may repeat. Mutations validate their input
/// before touching the record, so a failed call leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and no phones.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record with a name and a DD-MM-YYYY birthday.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name)?;
        record.birthday = Some(Birthday::new(birthday)?);
        Ok(record)
    }

    /// Assemble a record from already validated parts.
    pub fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: impl AsRef<str>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not ten digits.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(number)?;
        debug!(name = %self.name, phone = %phone, "adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    ///
    /// Returns whether a phone was removed. An absent number is not an error.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.position_of(number) {
            Some(index) => {
                self.phones.remove(index);
                debug!(name = %self.name, phone = number, "removed phone");
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::Validation` if `new` is not a valid phone number
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        self.phones[index].set_value(new)?;
        debug!(name = %self.name, old, new = %self.phones[index], "edited phone");
        Ok(())
    }

    /// Find the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }

    /// Phones joined with `"; "`, as shown in the record line.
    pub fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_to_birthday(&self) -> RecordResult<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 if it is today.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NoBirthday` if the record has no birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> RecordResult<i64> {
        let birthday = self
            .birthday
            .as_ref()
            .ok_or_else(|| RecordError::NoBirthday(self.name.to_string()))?;
        birthday
            .days_until(today)
            .ok_or_else(|| RecordError::DateOutOfRange(self.name.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones()
        )
    }
}
