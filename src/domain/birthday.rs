//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and stored in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the shape is checked first.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A contact's date of birth, parsed from `DD.MM.YYYY`.
///
/// Both the calendar date and the original text are kept; the text is what
/// gets shown back to the user and persisted.
///
/// # Example
///
/// ```
/// use chrono::Datelike;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("14.06.1990").unwrap();
/// assert_eq!(birthday.date().month(), 6);
/// assert!(Birthday::new("30.02.2024").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    date: NaiveDate,
    raw: String,
}

impl Birthday {
    /// Parse a birthday, strictly matching `DD.MM.YYYY`.
    ///
    /// Day and month must be zero-padded to two digits and the year must have
    /// four digits. The result must be a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` otherwise.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { date, raw }),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The text the birthday was entered as.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.date.month(), 28))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
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
        write!(f, "{}", self.raw)
    }
}
