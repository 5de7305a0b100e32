//! End-to-end REPL sessions driven through a scripted console.
//!
//! Time-sensitive `birthdays` output is covered by unit tests with an
//! injected "today"; these sessions stick to transcript behavior that is
//! stable regardless of the wall clock.

use std::collections::VecDeque;
use std::io;

use contact_assistant::io::repl;
use contact_assistant::Console;

/// Console that replays a fixed list of input lines and records output.
struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    fn new(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}

fn transcript(lines: &[&str]) -> Vec<String> {
    let mut console = ScriptedConsole::new(lines);
    repl::run(&mut console).unwrap();
    console.output
}

#[test]
fn full_contact_session() {
    let output = transcript(&[
        "hello",
        "add Anna 1234567890",
        "add Anna 0987654321",
        "phone Anna",
        "change Anna 1234567890 5555555555",
        "add-birthday Anna 12.06.1994",
        "show-birthday Anna",
        "all",
        "delete Anna",
        "all",
        "close",
    ]);

    assert_eq!(
        output,
        vec![
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Phones for Anna: 1234567890, 0987654321",
            "Phone updated for contact Anna.",
            "Birthday added for contact Anna.",
            "Birthday of Anna: 12.06.1994",
            "Contact name: Anna, phones: 0987654321; 5555555555, Birthday: 12.06.1994",
            "Contact Anna deleted.",
            "No contacts saved.",
            "Good bye!",
        ]
    );
}

#[test]
fn errors_are_reported_and_loop_continues() {
    let output = transcript(&[
        "add",
        "add Anna 123",
        "phone Ghost",
        "change Anna 1111111111 2222222222",
        "nonsense",
        "",
        "exit",
    ]);

    assert_eq!(
        output,
        vec![
            "Welcome to the assistant bot!",
            "Enter the argument for the command.",
            "Phone must contain exactly 10 digits.",
            "This contact does not exist.",
            "This contact does not exist.",
            "Unknown command.",
            "Please enter a valid command.",
            "Good bye!",
        ]
    );
}

#[test]
fn birthdays_with_no_birthdays_set() {
    let output = transcript(&["add Anna 1234567890", "birthdays", "exit"]);

    assert_eq!(
        output,
        vec![
            "Welcome to the assistant bot!",
            "Contact added.",
            "No upcoming birthdays.",
            "Good bye!",
        ]
    );
}

#[test]
fn commands_are_case_insensitive_and_eof_ends_the_loop() {
    // No close/exit: the script running out of lines is end of input.
    let output = transcript(&["HELLO", "Add Bob 1234567890"]);

    assert_eq!(
        output,
        vec![
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Contact added.",
        ]
    );
}

#[test]
fn exit_is_case_insensitive() {
    let output = transcript(&["EXIT"]);
    assert_eq!(output, vec!["Welcome to the assistant bot!", "Good bye!"]);
}
