//! Data models for the address book.
//!
//! A [`Record`] is one contact; an [`AddressBook`] holds records keyed by
//! name and answers the upcoming-birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{
    AddressBook, UpcomingBirthday, CONGRATULATION_DATE_FORMAT, DEFAULT_UPCOMING_DAYS,
};
pub use record::Record;
