//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers, and birthday. Each value object validates its
//! input at construction time, so an instance is always well-formed for as
//! long as it exists. Replacing a value means constructing a new one.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
