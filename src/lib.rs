//! Contact Book - an interactive assistant for a personal address book.
//!
//! Contacts have a name, validated phone numbers, and an optional birthday.
//! The assistant answers queries about them and lists upcoming birthdays,
//! moving weekend dates to the following Monday. State is kept on disk
//! between runs.
//!
//! # Architecture
//!
//! - **domain**: Self-validating field types (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **commands**: Input parsing, dispatch table, and error translation
//! - **repositories**: Persistence of the address book
//! - **session**: One load → command loop → save cycle
//! - **clock**: Injectable current date
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{CommandContext, Dispatcher, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::Session;
