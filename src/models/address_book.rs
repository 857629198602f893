//! AddressBook: the in-memory store of all records, keyed by name.

use crate::domain::ContactName;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default look-ahead for [`AddressBook::get_upcoming_birthdays`], in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,

    /// The day to congratulate on: the birthday itself, or the following
    /// Monday when it lands on a weekend.
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date.format("%Y-%m-%d"))
    }
}

/// All contacts, one record per name.
///
/// Every record is stored under its own name; the only way in is
/// [`AddressBook::add_record`], and records expose no way to rename
/// themselves. Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<ContactName, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().clone(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Does nothing if there is none.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday is between `today` and `today + window_days`
    /// inclusive.
    ///
    /// A birthday already past this year counts from next year. Weekend
    /// birthdays are congratulated on the following Monday, which may fall
    /// outside the window. Contacts without a birthday are skipped.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);

        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut next = birthday.anniversary_in(today.year())?;
                if next < today {
                    next = birthday.anniversary_in(today.year() + 1)?;
                }

                let delta = (next - today).num_days();
                if !(0..=window).contains(&delta) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: shift_off_weekend(next),
                })
            })
            .collect()
    }
}

/// Move Saturday and Sunday to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// The first `weekday` strictly after `date`.
fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

// Persisted as a plain list of records; keys are rebuilt from record names.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
