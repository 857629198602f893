//! Record model: one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phones keep insertion order. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Does nothing if none match.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p != phone);
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `ValidationError::PhoneNotFound` if no phone equals `old`
    /// - `ValidationError::InvalidPhone` if `new` is not a valid phone
    ///
    /// The phone list is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| ValidationError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// The first phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Validate `birthday` and set it, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined the way they are shown to the user.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Mia").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn phone_strings(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("Mia").unwrap();
        assert_eq!(record.name().as_str(), "Mia");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_new_record_rejects_blank_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["0501234567", "0509999999", "0501234567"]);
        assert_eq!(
            phone_strings(&record),
            vec!["0501234567", "0509999999", "0501234567"]
        );
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = record_with_phones(&["0501234567"]);
        let result = record.add_phone("12345");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
        assert_eq!(phone_strings(&record), vec!["0501234567"]);
    }

    #[test]
    fn test_remove_phone_removes_every_match() {
        let mut record = record_with_phones(&["0501234567", "0509999999", "0501234567"]);
        record.remove_phone("0501234567");
        assert_eq!(phone_strings(&record), vec!["0509999999"]);
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = record_with_phones(&["0501234567"]);
        record.remove_phone("0000000000");
        assert_eq!(phone_strings(&record), vec!["0501234567"]);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_in_place() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(
            phone_strings(&record),
            vec!["3333333333", "2222222222", "1111111111"]
        );
    }

    #[test]
    fn test_edit_missing_phone_fails_without_changes() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        let result = record.edit_phone("9999999999", "3333333333");
        assert_eq!(
            result,
            Err(ValidationError::PhoneNotFound("9999999999".to_string()))
        );
        assert_eq!(phone_strings(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_to_invalid_value_fails_without_changes() {
        let mut record = record_with_phones(&["1111111111"]);
        let result = record.edit_phone("1111111111", "abc");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
        assert_eq!(phone_strings(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(PhoneNumber::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("Mia").unwrap();
        record.add_birthday("14.06.1990").unwrap();
        record.add_birthday("15.07.1991").unwrap();
        assert_eq!(record.birthday().map(Birthday::as_str), Some("15.07.1991"));
    }

    #[test]
    fn test_add_invalid_birthday_keeps_previous() {
        let mut record = Record::new("Mia").unwrap();
        record.add_birthday("14.06.1990").unwrap();
        assert!(record.add_birthday("31.06.1990").is_err());
        assert_eq!(record.birthday().map(Birthday::as_str), Some("14.06.1990"));
    }

    #[test]
    fn test_display() {
        let record = record_with_phones(&["0501234567", "0509999999"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Mia, phones: 0501234567; 0509999999"
        );
        assert_eq!(
            Record::new("Bo").unwrap().to_string(),
            "Contact name: Bo, phones: "
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut record = record_with_phones(&["0501234567"]);
        record.add_birthday("14.06.1990").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Mia",
                "phones": ["0501234567"],
                "birthday": "14.06.1990"
            })
        );

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialization_revalidates_phones() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "Mia", "phones": ["12"]}"#);
        assert!(result.is_err());
    }
}
