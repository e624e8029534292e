//! Address Book - an interactive command-line contact book with birthday reminders.
//!
//! The whole book lives in memory during a session. It is loaded from disk
//! at start-up and written back in full when the user exits.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: Records and the address book, including the upcoming-birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the book
//! - **commands**: Input parsing and command handlers
//! - **repl**: The interactive loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{AddressBookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repl::{run, SessionEnd};
pub use repositories::{AddressBookRepository, JsonFileRepository};
