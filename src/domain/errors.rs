//! # Domain Errors
//!
//! The single tagged error type returned by the domain layer. Every variant
//! carries its user-facing message in its `Display` implementation, so the
//! dispatch boundary can translate any failure into output with one call.

use thiserror::Error;

/// All recoverable failures a command can produce.
///
/// None of these are fatal: the dispatch loop renders the message and keeps
/// reading commands, and a failing operation leaves the address book
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A contact name was blank after trimming.
    #[error("Name cannot be empty.")]
    EmptyName,

    /// A phone number was not exactly 10 decimal digits.
    #[error("Phone must contain exactly 10 digits.")]
    InvalidPhone,

    /// A birthday string did not match DD.MM.YYYY or was not a real date.
    #[error("Invalid date format. Use DD.MM.YYYY.")]
    InvalidBirthday,

    /// The referenced contact is not in the address book.
    #[error("This contact does not exist.")]
    ContactNotFound,

    /// The phone number to replace is not on the record.
    #[error("Old phone not found.")]
    PhoneNotFound,

    /// The record already has a birthday; it is never overwritten.
    #[error("Birthday is already set.")]
    BirthdayAlreadySet,

    /// The command was given fewer arguments than it requires.
    #[error("Enter the argument for the command.")]
    MissingArgument,

    /// The command was given arguments it cannot make sense of.
    #[error("Invalid input. Please check your data and try again.")]
    InvalidInput,
}
