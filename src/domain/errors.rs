//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY` or is not a real date.
    InvalidDate(String),

    /// No phone on the record matches the requested number.
    PhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {}. It must contain exactly 10 digits.",
                phone
            ),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date format: {}. Use DD.MM.YYYY", date)
            }
            Self::PhoneNotFound(phone) => write!(f, "Phone number not found: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
