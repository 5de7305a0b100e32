//! Contact Assistant core library.
//!
//! An in-memory, single-user contact manager: validated contact records, an
//! insertion-ordered address book with an upcoming-birthday query, and a
//! command layer dispatched from a line-oriented REPL.

pub mod domain;
pub mod io;

pub use domain::{AddressBook, ContactService, DomainError, UpcomingBirthday};
pub use io::{Console, StdConsole};
