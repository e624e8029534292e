//! Configuration management for the address book.
//!
//! All settings are optional environment variables; with none set the
//! assistant uses `database.bin` in the working directory and a seven-day
//! birthday window. A `.env` file is read if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_UPCOMING_DAYS;
use std::env;
use std::path::PathBuf;

/// Default location of the database file.
pub const DEFAULT_DATABASE_PATH: &str = "database.bin";

/// Longest birthday window accepted from the environment.
pub const MAX_UPCOMING_DAYS: u32 = 365;

/// Configuration for the address book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the database file (default: "database.bin")
    pub database_path: PathBuf,

    /// Look-ahead window for the `birthdays` command in days (default: 7)
    pub upcoming_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Database file path (default: "database.bin")
    /// - `UPCOMING_BIRTHDAYS_DAYS`: Birthday window in days, 0-365 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let database_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        if database_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let upcoming_days = Self::parse_env_u32("UPCOMING_BIRTHDAYS_DAYS", DEFAULT_UPCOMING_DAYS)?;
        if upcoming_days > MAX_UPCOMING_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_UPCOMING_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            database_path,
            upcoming_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            log_level: "error".to_string(),
        }
    }
}
