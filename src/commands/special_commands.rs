//! Special commands parser for the interactive session
//!
//! Special commands let users inspect and manage the session instead of
//! submitting a prompt. Commands are prefixed with `/` and are
//! case-insensitive; anything else is treated as a story topic.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },
}

/// Special commands available during an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Show the full story collection
    List,

    /// Show stories matching a free-text query
    ///
    /// An empty query shows the full collection.
    Filter(String),

    /// Copy a story's text to the clipboard
    ///
    /// `/copy` copies the most recently generated story; `/copy <n>`
    /// copies the n-th entry of the collection (1-based, newest first).
    Copy(Option<usize>),

    /// Re-fetch the collection from the backend
    Refresh,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command; the input is a story topic
    None,
}

/// Parse a user input string into a special command
///
/// # Errors
///
/// Returns `CommandError::UnknownCommand` if input starts with "/" but is
/// not a valid command, and `CommandError::UnsupportedArgument` if `/copy`
/// receives something other than a positive number.
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    match lower.as_str() {
        "exit" | "quit" | "/exit" | "/quit" => return Ok(SpecialCommand::Exit),
        "/help" | "/h" => return Ok(SpecialCommand::Help),
        "/list" | "/ls" => return Ok(SpecialCommand::List),
        "/refresh" => return Ok(SpecialCommand::Refresh),
        "/copy" => return Ok(SpecialCommand::Copy(None)),
        "/filter" => return Ok(SpecialCommand::Filter(String::new())),
        _ => {}
    }

    if let Some(rest) = strip_command_prefix(trimmed, "/filter") {
        return Ok(SpecialCommand::Filter(rest.to_string()));
    }

    if let Some(rest) = strip_command_prefix(trimmed, "/copy") {
        return match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(SpecialCommand::Copy(Some(n))),
            _ => Err(CommandError::UnsupportedArgument {
                command: "/copy".to_string(),
                arg: rest.to_string(),
            }),
        };
    }

    if trimmed.starts_with('/') {
        return Err(CommandError::UnknownCommand(trimmed.to_string()));
    }

    Ok(SpecialCommand::None)
}

/// Extract the argument of `<command> <arg>`, case-insensitive on the
/// command word.
fn strip_command_prefix<'a>(input: &'a str, command: &str) -> Option<&'a str> {
    let (word, rest) = input.split_once(char::is_whitespace)?;
    if word.eq_ignore_ascii_case(command) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Print help for the interactive session
pub fn print_help() {
    use colored::Colorize;

    println!("\n{}", "Available commands:".bold());
    println!("  {:<18} Show the story collection", "/list".cyan());
    println!(
        "  {:<18} Show stories matching a query",
        "/filter <query>".cyan()
    );
    println!(
        "  {:<18} Copy the latest (or n-th) story text",
        "/copy [n]".cyan()
    );
    println!(
        "  {:<18} Re-fetch the collection from the backend",
        "/refresh".cyan()
    );
    println!("  {:<18} Show this help", "/help".cyan());
    println!("  {:<18} Leave the session", "exit".cyan());
    println!("\nAnything else is a topic: type it and a story is generated.\n");
}
