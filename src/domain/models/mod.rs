//! Domain model types.

pub mod contact;

pub use contact::{Birthday, Name, Phone, Record};
