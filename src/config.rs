//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Largest accepted default birthday window.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Window used by `birthdays` when no argument is given (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Data file path (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: Default upcoming-birthday window (default: 7, max 366)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.book_path,
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            birthday_window_days,
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
            book_path: PathBuf::from("addressbook.json"),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
