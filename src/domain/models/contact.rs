//! Domain model for a single contact: the validated value types and the
//! `Record` that owns them.
//!
//! All validation happens at construction time. Once a `Name`, `Phone` or
//! `Birthday` exists it is a plain immutable value; edits replace values
//! rather than mutating them.

use chrono::NaiveDate;

use crate::domain::errors::DomainError;

/// Format birthdays are accepted and rendered in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Non-empty after trimming; acts as the address book key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Validate and wrap a raw name.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Name(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly 10 ASCII decimal digits, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Validate and wrap a raw phone number.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Phone(raw.to_string()))
        } else {
            Err(DomainError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact's birthday, accepted textually as `DD.MM.YYYY`.
///
/// The textual form is strict: two-digit day, two-digit month, four-digit
/// year, dot-separated. The parts must also form a real calendar date, so
/// `31.02.2000` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse and validate a raw `DD.MM.YYYY` string.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 3 {
            return Err(DomainError::InvalidBirthday);
        }
        let widths = [2, 2, 4];
        for (part, width) in parts.iter().zip(widths) {
            if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DomainError::InvalidBirthday);
            }
        }
        // Widths and digits are already checked, so the parses cannot fail;
        // from_ymd_opt still rejects impossible calendar dates.
        let day: u32 = parts[0].parse().map_err(|_| DomainError::InvalidBirthday)?;
        let month: u32 = parts[1].parse().map_err(|_| DomainError::InvalidBirthday)?;
        let year: i32 = parts[2].parse().map_err(|_| DomainError::InvalidBirthday)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Birthday)
            .ok_or(DomainError::InvalidBirthday)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for Birthday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// One contact: a name, an ordered list of phones, an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and duplicates
/// are allowed. A birthday can be set once and is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a validated name and no phones or birthday.
    pub fn new(raw_name: &str) -> Result<Self, DomainError> {
        Ok(Record {
            name: Name::new(raw_name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. No de-duplication: adding the
    /// same number twice yields two entries.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), DomainError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone matching `value`. A missing value is a no-op,
    /// not an error.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace `old` with a validated `new` number. The new number is
    /// validated first so a failed edit leaves the phone list untouched;
    /// the replacement lands at the end of the list, not in place.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), DomainError> {
        if self.find_phone(old).is_none() {
            return Err(DomainError::PhoneNotFound);
        }
        let replacement = Phone::new(new)?;
        self.remove_phone(old);
        self.phones.push(replacement);
        Ok(())
    }

    /// Find the first phone with the given value.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Set the birthday. Fails if one is already set; the original value is
    /// never overwritten.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), DomainError> {
        if self.birthday.is_some() {
            return Err(DomainError::BirthdayAlreadySet);
        }
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Render the record as a single deterministic line.
    pub fn render(&self) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        match &self.birthday {
            Some(birthday) => format!(
                "Contact name: {}, phones: {}, Birthday: {}",
                self.name, phones, birthday
            ),
            None => format!("Contact name: {}, phones: {}", self.name, phones),
        }
    }
}
