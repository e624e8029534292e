//! Command handlers.
//!
//! Each handler takes the positional arguments of a command and the address
//! book, and returns the reply text or an [`AddressBookError`]. Callers pass
//! the result through [`respond`], which turns failures into the message
//! shown to the user, so no handler error ever ends the session.

use crate::domain::Phone;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// Reply for `hello`.
pub const GREETING_REPLY: &str = "How can I help you?";

/// Reply for an unrecognized command.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Reply for `birthdays` when nobody qualifies.
pub const NO_UPCOMING_BIRTHDAYS: &str = "There are no upcoming birthdays.";

/// Reply for `all` on an empty book.
pub const NO_CONTACTS: &str = "No contacts saved.";

const HELP_TEXT: &str = "\
Available commands:
  hello                                  Greet the assistant
  add <name> [phone]                     Add a contact or a phone to an existing contact
  change <name> <old_phone> <new_phone>  Replace a phone number
  phone <name>                           Show a contact's phone numbers
  remove-phone <name> <phone>            Remove a phone number
  delete <name>                          Delete a contact
  all                                    Show all contacts
  add-birthday <name> <DD.MM.YYYY>       Set a contact's birthday
  show-birthday <name>                   Show a contact's birthday
  birthdays                              Show birthdays in the coming week
  close | exit                           Save and quit";

/// Convert a handler result into the text shown to the user.
pub fn respond(result: AddressBookResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(err) => {
            debug!(error = ?err, "Command failed");
            err.to_string()
        }
    }
}

/// Fail with `ArgumentError` unless at least `expected` arguments were given.
fn require_args(command: &str, args: &[String], expected: usize) -> AddressBookResult<()> {
    if args.len() < expected {
        return Err(AddressBookError::ArgumentError {
            command: command.to_string(),
            expected,
            received: args.len(),
        });
    }
    Ok(())
}

fn find_record<'a>(book: &'a AddressBook, name: &str) -> AddressBookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
}

fn find_record_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> AddressBookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
}

/// `add <name> [phone]`
///
/// Creates the contact if needed, then appends the phone when one is given.
/// An invalid phone leaves the book untouched.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    require_args("add", args, 1)?;
    let name = &args[0];
    let phone = args.get(1).map(Phone::new).transpose()?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name.as_str()));
        "Contact added."
    };

    if let Some(phone) = phone {
        find_record_mut(book, name)?.phones.push(phone);
    }

    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    require_args("change", args, 3)?;
    find_record_mut(book, &args[0])?.edit_phone(&args[1], &args[2])?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> AddressBookResult<String> {
    require_args("phone", args, 1)?;
    Ok(find_record(book, &args[0])?.phones_display())
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    require_args("remove-phone", args, 2)?;
    let removed = find_record_mut(book, &args[0])?.remove_phone(&args[1]);
    debug!(name = %args[0], removed, "Phones removed");
    Ok("Phone removed.".to_string())
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    require_args("delete", args, 1)?;
    book.delete(&args[0])
        .ok_or_else(|| AddressBookError::ContactNotFound(args[0].clone()))?;
    Ok("Contact deleted.".to_string())
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NO_CONTACTS.to_string();
    }
    book.records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    require_args("add-birthday", args, 2)?;
    find_record_mut(book, &args[0])?.add_birthday(&args[1])?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> AddressBookResult<String> {
    require_args("show-birthday", args, 1)?;
    let record = find_record(book, &args[0])?;
    Ok(match &record.birthday {
        Some(birthday) => birthday.to_string(),
        None => format!("No birthday set for {}.", record.name()),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, days: u32) -> String {
    let upcoming = book.get_upcoming_birthdays(days);
    if upcoming.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `help`
pub fn help() -> String {
    HELP_TEXT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: &str = "Name not found. Please, check and try again.";
    const BAD_INPUT: &str = "Enter correct information.";

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_creates_then_updates() {
        let mut book = AddressBook::new();

        let reply = respond(add_contact(&args(&["John", "1111111111"]), &mut book));
        assert_eq!(reply, "Contact added.");

        let reply = respond(add_contact(&args(&["John", "2222222222"]), &mut book));
        assert_eq!(reply, "Contact updated.");

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones_display(), "1111111111; 2222222222");
    }

    #[test]
    fn test_add_without_phone() {
        let mut book = AddressBook::new();
        assert_eq!(respond(add_contact(&args(&["Solo"]), &mut book)), "Contact added.");
        assert!(book.find("Solo").unwrap().phones.is_empty());
    }

    #[test]
    fn test_add_invalid_phone_does_not_create_contact() {
        let mut book = AddressBook::new();
        let reply = respond(add_contact(&args(&["John", "12345"]), &mut book));
        assert_eq!(reply, "Invalid phone format");
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_missing_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(respond(add_contact(&[], &mut book)), BAD_INPUT);
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();

        let reply = respond(change_contact(
            &args(&["John", "1111111111", "3333333333"]),
            &mut book,
        ));
        assert_eq!(reply, "Contact updated.");
        assert_eq!(respond(show_phone(&args(&["John"]), &book)), "3333333333");
    }

    #[test]
    fn test_change_errors() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();

        let reply = respond(change_contact(
            &args(&["Jane", "1111111111", "3333333333"]),
            &mut book,
        ));
        assert_eq!(reply, NOT_FOUND);

        let reply = respond(change_contact(
            &args(&["John", "9999999999", "3333333333"]),
            &mut book,
        ));
        assert_eq!(reply, "Phone number not found");

        let reply = respond(change_contact(&args(&["John", "1111111111"]), &mut book));
        assert_eq!(reply, BAD_INPUT);
    }

    #[test]
    fn test_show_phone() {
        let mut book = AddressBook::new();
        assert_eq!(respond(show_phone(&args(&["Ghost"]), &book)), NOT_FOUND);
        assert_eq!(respond(show_phone(&[], &book)), BAD_INPUT);

        add_contact(&args(&["John"]), &mut book).unwrap();
        assert_eq!(respond(show_phone(&args(&["John"]), &book)), "");
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();

        let reply = respond(remove_phone(&args(&["John", "1111111111"]), &mut book));
        assert_eq!(reply, "Phone removed.");
        assert!(book.find("John").unwrap().phones.is_empty());

        assert_eq!(
            respond(remove_phone(&args(&["Ghost", "1111111111"]), &mut book)),
            NOT_FOUND
        );

        assert_eq!(respond(delete_contact(&args(&["John"]), &mut book)), "Contact deleted.");
        assert_eq!(respond(delete_contact(&args(&["John"]), &mut book)), NOT_FOUND);
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), NO_CONTACTS);

        add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();
        add_contact(&args(&["Jane"]), &mut book).unwrap();
        assert_eq!(
            show_all(&book),
            "Contact name: John, phones: 1111111111\nContact name: Jane, phones: "
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        add_contact(&args(&["John"]), &mut book).unwrap();

        assert_eq!(
            respond(show_birthday(&args(&["John"]), &book)),
            "No birthday set for John."
        );
        assert_eq!(
            respond(add_birthday(&args(&["John", "31.02.1990"]), &mut book)),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            respond(add_birthday(&args(&["John", "01.03.1990"]), &mut book)),
            "Birthday added."
        );
        assert_eq!(respond(show_birthday(&args(&["John"]), &book)), "01.03.1990");

        assert_eq!(
            respond(add_birthday(&args(&["Ghost", "01.03.1990"]), &mut book)),
            NOT_FOUND
        );
        assert_eq!(respond(show_birthday(&args(&["Ghost"]), &book)), NOT_FOUND);
        assert_eq!(respond(add_birthday(&args(&["John"]), &mut book)), BAD_INPUT);
    }

    #[test]
    fn test_birthdays_empty() {
        let book = AddressBook::new();
        assert_eq!(birthdays(&book, 7), NO_UPCOMING_BIRTHDAYS);
    }

    #[test]
    fn test_help_lists_commands() {
        let text = help();
        let commands = [
            "add",
            "change",
            "phone",
            "all",
            "add-birthday",
            "show-birthday",
            "birthdays",
        ];
        for command in commands {
            assert!(text.contains(command), "help is missing {command}");
        }
    }
}
