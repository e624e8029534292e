//! Record model representing a single contact.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Phone numbers keep the order they were added in and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the address book key. Fixed once the record
    /// exists, so a stored record can never drift from its key.
    name: Name,

    /// Phone numbers
    #[serde(default)]
    pub phones: Vec<Phone>,

    /// Birthday, if known
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, number: &str) -> AddressBookResult<()> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove every phone equal to `number`. Removing an unknown number is a no-op.
    ///
    /// Returns how many phones were removed.
    pub fn remove_phone(&mut self, number: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != number);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if no phone equals `old`; `InvalidFormat` if `new` is
    /// not a valid phone. The record is unchanged in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;

        phone.set(new)?;
        Ok(())
    }

    /// Find a phone by its number.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Set or overwrite the birthday.
    pub fn add_birthday(&mut self, value: &str) -> AddressBookResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Phone numbers joined by `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
