//! # Dispatch Loop
//!
//! Reads a line, splits it into a command and positional arguments, routes
//! to the matching [`ContactService`] operation, and prints the result. All
//! domain errors are translated to their display strings here; nothing a
//! command does can terminate the loop.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::domain::commands::birthday::{
    AddBirthdayCommand, ShowBirthdayQuery, UpcomingBirthdaysQuery,
};
use crate::domain::commands::contact::{
    AddContactCommand, ChangePhoneCommand, DeleteContactCommand, ShowPhonesQuery,
};
use crate::domain::{ContactService, DomainError};
use crate::io::console::Console;

/// Run the interactive loop until `close`, `exit`, or end of input.
pub fn run<C: Console>(console: &mut C) -> Result<()> {
    let mut service = ContactService::new();
    console.write_line("Welcome to the assistant bot!")?;

    loop {
        let Some(line) = console.read_line("Enter a command: ")? else {
            info!("End of input, shutting down");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            console.write_line("Please enter a valid command.")?;
            continue;
        }

        let (command, args) = parse_input(line);
        if command == "close" || command == "exit" {
            console.write_line("Good bye!")?;
            break;
        }

        let today = Local::now().date_naive();
        let output = dispatch(&command, &args, &mut service, today);
        console.write_line(&output)?;
    }

    Ok(())
}

/// Split an input line into a lowercased command and its arguments.
/// Tokens are whitespace-separated; there is no quoting or escaping.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().unwrap_or_default().to_lowercase();
    (command, tokens.map(str::to_string).collect())
}

/// Execute one command and render its outcome, success or failure, as the
/// line to print. `today` anchors the `birthdays` window so callers (and
/// tests) control the clock.
pub fn dispatch(
    command: &str,
    args: &[String],
    service: &mut ContactService,
    today: NaiveDate,
) -> String {
    debug!("Dispatching command: {} ({} args)", command, args.len());
    match execute(command, args, service, today) {
        Ok(output) => output,
        // The error enum carries its user-facing message, so translation
        // at this boundary is a single rendering step.
        Err(err) => err.to_string(),
    }
}

fn execute(
    command: &str,
    args: &[String],
    service: &mut ContactService,
    today: NaiveDate,
) -> Result<String, DomainError> {
    match command {
        "hello" => {
            at_most(args, 0)?;
            Ok("How can I help you?".to_string())
        }
        "add" => {
            at_most(args, 2)?;
            let name = required(args, 0)?.to_string();
            let phone = args.get(1).cloned();
            let result = service.add_contact(AddContactCommand { name, phone })?;
            Ok(if result.created {
                "Contact added.".to_string()
            } else {
                "Contact updated.".to_string()
            })
        }
        "change" => {
            at_most(args, 3)?;
            let result = service.change_phone(ChangePhoneCommand {
                name: required(args, 0)?.to_string(),
                old_phone: required(args, 1)?.to_string(),
                new_phone: required(args, 2)?.to_string(),
            })?;
            Ok(result.success_message)
        }
        "phone" => {
            at_most(args, 1)?;
            let result = service.list_phones(ShowPhonesQuery {
                name: required(args, 0)?.to_string(),
            })?;
            Ok(format!(
                "Phones for {}: {}",
                result.name,
                result.phones.join(", ")
            ))
        }
        "all" => {
            at_most(args, 0)?;
            let result = service.list_contacts();
            if result.lines.is_empty() {
                Ok("No contacts saved.".to_string())
            } else {
                Ok(result.lines.join("\n"))
            }
        }
        "delete" => {
            at_most(args, 1)?;
            let result = service.delete_contact(DeleteContactCommand {
                name: required(args, 0)?.to_string(),
            })?;
            Ok(result.success_message)
        }
        "add-birthday" => {
            at_most(args, 2)?;
            let result = service.add_birthday(AddBirthdayCommand {
                name: required(args, 0)?.to_string(),
                birthday: required(args, 1)?.to_string(),
            })?;
            Ok(result.success_message)
        }
        "show-birthday" => {
            at_most(args, 1)?;
            let result = service.show_birthday(ShowBirthdayQuery {
                name: required(args, 0)?.to_string(),
            })?;
            Ok(match result.birthday {
                Some(birthday) => format!("Birthday of {}: {}", result.name, birthday),
                None => "No birthday found for this contact.".to_string(),
            })
        }
        "birthdays" => {
            at_most(args, 0)?;
            let result = service.upcoming_birthdays(UpcomingBirthdaysQuery { today });
            if result.upcoming.is_empty() {
                Ok("No upcoming birthdays.".to_string())
            } else {
                Ok(result
                    .upcoming
                    .iter()
                    .map(|entry| {
                        format!("{}: {}", entry.name, entry.greeting_date.format("%d.%m.%Y"))
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        _ => Ok("Unknown command.".to_string()),
    }
}

/// The positional argument at `index`, or the missing-argument error.
fn required(args: &[String], index: usize) -> Result<&str, DomainError> {
    args.get(index).map(String::as_str).ok_or(DomainError::MissingArgument)
}

/// Reject calls with more arguments than the command accepts.
fn at_most(args: &[String], max: usize) -> Result<(), DomainError> {
    if args.len() > max {
        return Err(DomainError::InvalidInput);
    }
    Ok(())
}
