//! The interactive read / dispatch / print loop.
//!
//! The loop is generic over its input and output so it can be driven by
//! stdin/stdout in the binary and by in-memory buffers in tests.

use crate::commands::handlers::{self, GREETING_REPLY, INVALID_COMMAND};
use crate::commands::{parse_input, respond, Command};
use crate::config::Config;
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// What a single command asks the loop to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Message(String),
    /// Save and stop
    Exit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `close` or `exit`; the book was saved
    Exit,
    /// Input ran out; unsaved changes were discarded
    EndOfInput,
}

/// Run one command against the book.
pub fn execute(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    upcoming_days: u32,
) -> Reply {
    let message = match command {
        Command::Exit => return Reply::Exit,
        Command::Hello => GREETING_REPLY.to_string(),
        Command::Help => handlers::help(),
        Command::Add => respond(handlers::add_contact(args, book)),
        Command::Change => respond(handlers::change_contact(args, book)),
        Command::Phone => respond(handlers::show_phone(args, book)),
        Command::RemovePhone => respond(handlers::remove_phone(args, book)),
        Command::Delete => respond(handlers::delete_contact(args, book)),
        Command::All => handlers::show_all(book),
        Command::AddBirthday => respond(handlers::add_birthday(args, book)),
        Command::ShowBirthday => respond(handlers::show_birthday(args, book)),
        Command::Birthdays => handlers::birthdays(book, upcoming_days),
        Command::Unknown(keyword) => {
            debug!(command = %keyword, "Unknown command");
            INVALID_COMMAND.to_string()
        }
    };
    Reply::Message(message)
}

/// Load the book, serve commands until `close`/`exit` or end of input, and
/// save the book on `close`/`exit` only.
///
/// # Errors
///
/// Fails if the book cannot be loaded or saved, or if the terminal cannot
/// be read or written.
pub fn run<R, W>(
    mut input: R,
    mut output: W,
    repository: &dyn AddressBookRepository,
    config: &Config,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    let mut book = repository.load()?;
    writeln!(output, "{}", WELCOME)?;

    let mut buffer = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        // Raw bytes, so a line that is not UTF-8 is just an unknown command
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            info!("End of input, leaving without saving");
            writeln!(output)?;
            return Ok(SessionEnd::EndOfInput);
        }

        let line = String::from_utf8_lossy(&buffer);
        let Some(parsed) = parse_input(&line) else {
            continue;
        };

        match execute(&parsed.command, &parsed.args, &mut book, config.upcoming_days) {
            Reply::Message(message) => writeln!(output, "{}", message)?,
            Reply::Exit => {
                writeln!(output, "{}", FAREWELL)?;
                repository.save(&book)?;
                return Ok(SessionEnd::Exit);
            }
        }
    }
}
