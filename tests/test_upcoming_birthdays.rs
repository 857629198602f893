//! Upcoming-birthday scheduling through the public API.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use contact_book::models::{AddressBook, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    entries
        .iter()
        .map(|(name, birthday)| {
            let mut record = Record::new(*name).unwrap();
            record.add_birthday(birthday).unwrap();
            record
        })
        .collect()
}

#[test]
fn test_friday_birthday_is_unshifted() {
    let book = book_with_birthdays(&[("Ann", "14.06.1990")]);
    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Ann");
    assert_eq!(upcoming[0].congratulation_date, date(2024, 6, 14));
}

#[test]
fn test_weekend_birthdays_move_to_monday() {
    let book = book_with_birthdays(&[("Sat", "15.06.1990"), ("Sun", "16.06.1990")]);
    let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), 7);
    assert_eq!(upcoming.len(), 2);
    assert!(upcoming
        .iter()
        .all(|u| u.congratulation_date == date(2024, 6, 17)));
}

#[test]
fn test_contacts_without_birthday_never_listed() {
    let mut book = book_with_birthdays(&[("Ann", "14.06.1990")]);
    book.add_record(Record::new("Nobody").unwrap());

    for window in [0, 7, 30, 366] {
        let upcoming = book.get_upcoming_birthdays(date(2024, 6, 10), window);
        assert!(upcoming.iter().all(|u| u.name != "Nobody"));
    }
}

#[test]
fn test_congratulation_dates_are_never_on_weekends() {
    // One contact per day of a whole year, checked from several starting days
    let mut book = AddressBook::new();
    let mut day = date(2001, 1, 1);
    while day.year() == 2001 {
        let mut record = Record::new(format!("c{}", day.ordinal())).unwrap();
        record
            .add_birthday(&day.format("%d.%m.%Y").to_string())
            .unwrap();
        book.add_record(record);
        day += Duration::days(1);
    }

    for start in [date(2024, 1, 1), date(2024, 6, 13), date(2024, 12, 28)] {
        let upcoming = book.get_upcoming_birthdays(start, 30);
        assert_eq!(upcoming.len(), 31);
        for entry in upcoming {
            assert!(entry.congratulation_date >= start);
            assert!(!matches!(
                entry.congratulation_date.weekday(),
                Weekday::Sat | Weekday::Sun
            ));
        }
    }
}

#[test]
fn test_overwriting_record_drops_its_birthday() {
    let mut book = book_with_birthdays(&[("Ann", "14.06.1990")]);
    book.add_record(Record::new("Ann").unwrap());

    assert_eq!(book.len(), 1);
    assert!(book.get_upcoming_birthdays(date(2024, 6, 10), 7).is_empty());
}
