//! # Contact Service
//!
//! The command layer: every user-facing operation is a method taking a
//! command or query struct and returning a typed result or a
//! [`DomainError`]. No I/O happens here, so each operation is testable on
//! its own; the REPL layer renders results and translates errors.
//!
//! Operations are atomic from the caller's point of view: a failing command
//! leaves the address book exactly as it was.

use log::{debug, info, warn};

use crate::domain::address_book::AddressBook;
use crate::domain::commands::birthday::{
    AddBirthdayCommand, AddBirthdayResult, ShowBirthdayQuery, ShowBirthdayResult,
    UpcomingBirthdaysQuery, UpcomingBirthdaysResult,
};
use crate::domain::commands::contact::{
    AddContactCommand, AddContactResult, ChangePhoneCommand, ChangePhoneResult,
    DeleteContactCommand, DeleteContactResult, ListContactsResult, ShowPhonesQuery,
    ShowPhonesResult,
};
use crate::domain::errors::DomainError;
use crate::domain::models::contact::Record;

/// Service owning the address book and exposing all contact operations.
#[derive(Debug, Default)]
pub struct ContactService {
    book: AddressBook,
}

impl ContactService {
    /// Create a service with an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contact, or add a phone to an existing one.
    ///
    /// The phone (when given) is validated before the record is inserted,
    /// so a bad number never leaves a half-created contact behind.
    pub fn add_contact(&mut self, command: AddContactCommand) -> Result<AddContactResult, DomainError> {
        info!("Adding contact: name={}", command.name);

        match self.book.find_mut(&command.name) {
            Some(record) => {
                if let Some(phone) = &command.phone {
                    record.add_phone(phone)?;
                }
                debug!("Updated existing contact: {}", command.name);
                Ok(AddContactResult { created: false })
            }
            None => {
                let mut record = Record::new(&command.name)?;
                if let Some(phone) = &command.phone {
                    record.add_phone(phone)?;
                }
                self.book.add_record(record);
                debug!("Created contact: {}", command.name);
                Ok(AddContactResult { created: true })
            }
        }
    }

    /// Replace one of a contact's phone numbers with another.
    pub fn change_phone(&mut self, command: ChangePhoneCommand) -> Result<ChangePhoneResult, DomainError> {
        info!(
            "Changing phone for contact: name={}, old={}",
            command.name, command.old_phone
        );

        let record = self.book.find_mut(&command.name).ok_or_else(|| {
            warn!("Contact not found: {}", command.name);
            DomainError::ContactNotFound
        })?;
        record.edit_phone(&command.old_phone, &command.new_phone)?;

        Ok(ChangePhoneResult {
            success_message: format!("Phone updated for contact {}.", command.name),
        })
    }

    /// List a contact's phone numbers in the order they were added.
    pub fn list_phones(&self, query: ShowPhonesQuery) -> Result<ShowPhonesResult, DomainError> {
        debug!("Listing phones for contact: {}", query.name);

        let record = self.book.find(&query.name).ok_or(DomainError::ContactNotFound)?;
        Ok(ShowPhonesResult {
            name: query.name,
            phones: record.phones().iter().map(|p| p.as_str().to_string()).collect(),
        })
    }

    /// Remove a contact from the book.
    pub fn delete_contact(&mut self, command: DeleteContactCommand) -> Result<DeleteContactResult, DomainError> {
        info!("Deleting contact: {}", command.name);

        self.book.delete(&command.name)?;
        Ok(DeleteContactResult {
            success_message: format!("Contact {} deleted.", command.name),
        })
    }

    /// Render every contact, one line each, in insertion order.
    pub fn list_contacts(&self) -> ListContactsResult {
        debug!("Listing all {} contacts", self.book.len());

        ListContactsResult {
            lines: self.book.iter().map(Record::render).collect(),
        }
    }

    /// Set a contact's birthday. Fails if the contact is missing or the
    /// birthday is already set.
    pub fn add_birthday(&mut self, command: AddBirthdayCommand) -> Result<AddBirthdayResult, DomainError> {
        info!("Adding birthday for contact: {}", command.name);

        let record = self.book.find_mut(&command.name).ok_or_else(|| {
            warn!("Contact not found: {}", command.name);
            DomainError::ContactNotFound
        })?;
        record.add_birthday(&command.birthday)?;

        Ok(AddBirthdayResult {
            success_message: format!("Birthday added for contact {}.", command.name),
        })
    }

    /// Show a contact's birthday, if one is set.
    pub fn show_birthday(&self, query: ShowBirthdayQuery) -> Result<ShowBirthdayResult, DomainError> {
        debug!("Showing birthday for contact: {}", query.name);

        let record = self.book.find(&query.name).ok_or(DomainError::ContactNotFound)?;
        Ok(ShowBirthdayResult {
            name: query.name,
            birthday: record.birthday().map(|b| b.to_string()),
        })
    }

    /// Run the upcoming-birthday query against the given "today".
    pub fn upcoming_birthdays(&self, query: UpcomingBirthdaysQuery) -> UpcomingBirthdaysResult {
        info!("Computing upcoming birthdays for today={}", query.today);

        UpcomingBirthdaysResult {
            upcoming: self.book.upcoming_birthdays(query.today),
        }
    }
}
