//! # Domain Module
//!
//! All business logic for the contact assistant: validated model types, the
//! address book container, the command layer, and the error taxonomy. This
//! module knows nothing about terminals or how commands are tokenized.
//!
//! ## Module Organization
//!
//! - **models**: validated value types and the contact `Record`
//! - **address_book**: the ordered container and the upcoming-birthday query
//! - **commands**: command/query inputs and typed results
//! - **contact_service**: the service the REPL dispatches into
//! - **errors**: the tagged error enum with user-facing messages

pub mod address_book;
pub mod commands;
pub mod contact_service;
pub mod errors;
pub mod models;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use contact_service::ContactService;
pub use errors::DomainError;
