//! Interactive commands: input parsing and handlers.

pub mod handlers;
pub mod parser;

pub use handlers::respond;
pub use parser::{parse_input, Command, ParsedInput};
