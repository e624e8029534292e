//! The address book: contacts keyed by name plus the birthday schedule.

use super::record::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default look-ahead window for [`AddressBook::get_upcoming_birthdays`].
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Date format used when reporting congratulation dates.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the working day to do it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn congratulation_date_str(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, congratulation date: {}",
            self.name,
            self.congratulation_date_str()
        )
    }
}

/// On-disk shape of the book: records in insertion order.
#[derive(Serialize, Deserialize)]
struct BookSnapshot {
    records: Vec<Record>,
}

/// A collection of records keyed by contact name.
///
/// Iteration follows insertion order. Replacing a record under an existing
/// name keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookSnapshot", into = "BookSnapshot")]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => self.records[position] = record,
            None => {
                tracing::debug!(name = %key, "Record added");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => Some(&mut self.records[position]),
            None => None,
        }
    }

    /// Remove the record called `name`, if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let removed = self.records.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        tracing::debug!(name = %name, "Record deleted");
        Some(removed)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling within `days` days from the local current date.
    pub fn get_upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Birthdays falling within `[today, today + days]`.
    ///
    /// A birthday that already passed this year is considered for next year.
    /// Weekend birthdays are congratulated on the following Monday, even when
    /// that Monday lies beyond the window.
    pub fn get_upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = &record.birthday else {
                continue;
            };

            let Some(mut date) = birthday.occurrence_in(today.year()) else {
                continue;
            };
            if date < today {
                match birthday.occurrence_in(today.year() + 1) {
                    Some(next) => date = next,
                    None => continue,
                }
            }

            let offset = (date - today).num_days();
            if offset < 0 || offset > i64::from(days) {
                continue;
            }

            let congratulation_date = match date.weekday() {
                Weekday::Sat => date + Duration::days(2),
                Weekday::Sun => date + Duration::days(1),
                _ => date,
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date,
            });
        }

        upcoming
    }
}

impl From<BookSnapshot> for AddressBook {
    fn from(snapshot: BookSnapshot) -> Self {
        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for BookSnapshot {
    fn from(book: AddressBook) -> Self {
        BookSnapshot {
            records: book.records,
        }
    }
}
