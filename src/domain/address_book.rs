//! # Address Book
//!
//! The owning, insertion-ordered collection of contact records, plus the
//! upcoming-birthday query. Records are keyed by their name's string value;
//! listing and birthday reports follow the order contacts were first added,
//! so the container is an array of entries with linear key lookup rather
//! than an unordered hash map.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::domain::errors::DomainError;
use crate::domain::models::contact::Record;

/// One entry of the upcoming-birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday occurrence, shifted off weekends to the next Monday.
    pub greeting_date: NaiveDate,
}

/// Insertion-ordered collection of records, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. An existing record with the same
    /// name is replaced in place, keeping its position in listing order.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by name. Absence is a normal outcome, not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record for `name`. Fails if no such contact exists.
    pub fn delete(&mut self, name: &str) -> Result<(), DomainError> {
        match self.position(name) {
            Some(pos) => {
                self.records.remove(pos);
                Ok(())
            }
            None => Err(DomainError::ContactNotFound),
        }
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday occurrence falls within the inclusive
    /// 0–7 day window from `today`, in insertion order.
    ///
    /// The occurrence is the stored month/day in `today`'s year, advanced to
    /// the next year if it has already passed. A birthday falling on today
    /// is included. The reported greeting date is the occurrence shifted to
    /// Monday when it lands on a weekend; the shift is decided by the
    /// weekday of the occurrence itself, not of the greeting date.
    ///
    /// Feb 29 birthdays are observed on Mar 1 in years without a leap day,
    /// so no contact is ever skipped and the query never fails.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(mut candidate) = occurrence_in_year(birthday.date(), today.year()) else {
                continue;
            };
            if candidate < today {
                match occurrence_in_year(birthday.date(), today.year() + 1) {
                    Some(next) => candidate = next,
                    None => continue,
                }
            }
            let days_until = (candidate - today).num_days();
            if (0..=7).contains(&days_until) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    greeting_date: greeting_date(candidate),
                });
            }
        }
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// The birthday occurrence in `year`, with Feb 29 observed on Mar 1 when
/// `year` has no leap day.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Shift a weekend occurrence forward to Monday.
fn greeting_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence
        .checked_add_days(Days::new(shift))
        .unwrap_or(occurrence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        if let Some(raw) = birthday {
            record.add_birthday(raw).unwrap();
        }
        record
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));

        assert!(book.find("Anna").is_some());
        assert!(book.find("Bob").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_replaces_in_place() {
        let mut book = AddressBook::new();
        let mut anna = record("Anna", None);
        anna.add_phone("1111111111").unwrap();
        book.add_record(anna);
        book.add_record(record("Bob", None));

        // Re-adding Anna overwrites her entry but keeps her first in order.
        book.add_record(record("Anna", None));

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Anna", "Bob"]);
        assert!(book.find("Anna").unwrap().phones().is_empty());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));

        book.delete("Anna").unwrap();
        assert!(book.find("Anna").is_none());
        assert!(book.is_empty());

        assert_eq!(book.delete("Anna"), Err(DomainError::ContactNotFound));
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        // 2024-06-10 is a Monday.
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // Wednesday this week: in window, no shift.
        book.add_record(record("Anna", Some("12.06.1994")));
        // Saturday this week: in window, shifted to Monday the 17th.
        book.add_record(record("Bob", Some("15.06.1990")));
        // Sunday the 9th: already passed, recomputed for 2025, out of window.
        book.add_record(record("Cara", Some("09.06.1988")));
        // No birthday set.
        book.add_record(record("Dan", None));

        let upcoming = book.upcoming_birthdays(today);

        assert_eq!(
            upcoming,
            vec![
                UpcomingBirthday {
                    name: "Anna".to_string(),
                    greeting_date: date(2024, 6, 12),
                },
                UpcomingBirthday {
                    name: "Bob".to_string(),
                    greeting_date: date(2024, 6, 17),
                },
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_includes_today() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record("Anna", Some("10.06.1994")));

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].greeting_date, today);
    }

    #[test]
    fn test_upcoming_birthdays_excludes_eighth_day() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // Exactly 7 days out: included. 8 days out: excluded.
        book.add_record(record("Edge", Some("17.06.1990")));
        book.add_record(record("Past", Some("18.06.1990")));

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Edge");
    }

    #[test]
    fn test_upcoming_birthdays_wraps_year_boundary() {
        // 2024-12-28 is a Saturday; Jan 2 wraps into 2025.
        let today = date(2024, 12, 28);
        let mut book = AddressBook::new();
        book.add_record(record("Dan", Some("02.01.1992")));

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        // 2025-01-02 is a Thursday, so no weekend shift.
        assert_eq!(upcoming[0].greeting_date, date(2025, 1, 2));
    }

    #[test]
    fn test_upcoming_birthdays_sunday_shifts_one_day() {
        // 2024-06-16 is a Sunday.
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.add_record(record("Sun", Some("16.06.1990")));

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming[0].greeting_date, date(2024, 6, 17));
    }

    #[test]
    fn test_feb_29_observed_on_mar_1_in_common_years() {
        // 2025 is not a leap year; the occurrence falls on Mar 1, which is
        // a Saturday, so the greeting shifts to Monday Mar 3.
        let today = date(2025, 2, 25);
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2016")));

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].greeting_date, date(2025, 3, 3));
    }

    #[test]
    fn test_upcoming_birthdays_keeps_insertion_order() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        // Later date added first; order must follow insertion, not dates.
        book.add_record(record("Later", Some("14.06.1990")));
        book.add_record(record("Sooner", Some("11.06.1990")));

        let names: Vec<String> = book
            .upcoming_birthdays(today)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Later".to_string(), "Sooner".to_string()]);
    }
}
