//! Tokenizing an input line into a command and its arguments.

/// A recognized command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Help,
    Exit,
    /// Anything else, lowercased
    Unknown(String),
}

impl Command {
    /// Match a command keyword, ignoring case.
    pub fn parse(keyword: &str) -> Self {
        let keyword = keyword.trim().to_lowercase();
        match keyword.as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "delete" => Self::Delete,
            "remove-phone" => Self::RemovePhone,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown(keyword),
        }
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    /// Remaining tokens, case preserved
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = Command::parse(tokens.next()?);
    let args = tokens.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_splits_tokens() {
        let parsed = parse_input("  add   John   0123456789 ").unwrap();
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["John", "0123456789"]);
    }

    #[test]
    fn test_command_is_case_insensitive_arguments_are_not() {
        let parsed = parse_input("ADD-Birthday John 01.01.1990").unwrap();
        assert_eq!(parsed.command, Command::AddBirthday);
        assert_eq!(parsed.args[0], "John");
    }

    #[test]
    fn test_close_and_exit_are_the_same() {
        assert_eq!(Command::parse("close"), Command::Exit);
        assert_eq!(Command::parse("EXIT"), Command::Exit);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("Frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }
}
