//! Command parsing and dispatch

mod handlers;
mod parser;

pub use handlers::handle_command;
pub use parser::{Command, CommandResult, parse_command};
