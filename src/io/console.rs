//! # Console Seam
//!
//! The trait that separates the dispatch loop from the terminal. The loop
//! only ever reads one line and writes one line, so anything implementing
//! these two calls can drive it — the standard terminal in production, a
//! scripted console in tests.

use std::io::{self, BufRead, Write};

/// Line-oriented terminal interface used by the REPL.
pub trait Console {
    /// Print `prompt` (without a newline) and read the next input line.
    /// Returns `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// Console backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }
}
