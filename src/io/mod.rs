//! # IO Module
//!
//! The thin shell around the domain: the console seam and the dispatch
//! loop. Nothing in here contains business logic.

pub mod console;
pub mod repl;

pub use console::{Console, StdConsole};
