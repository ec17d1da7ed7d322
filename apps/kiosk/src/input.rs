//! # Input Grammar
//!
//! Turns raw terminal lines into cart gestures.
//!
//! ## Commands
//! ```text
//! + <item>     add one of the item at that position
//! - <item>     remove one of the item at that position
//! h | help     show the command list
//! q | quit     end the session
//! ```
//!
//! Whitespace around the command and the item number is ignored, so
//! `+0`, `+ 0` and `  +  0  ` all mean the same gesture. Item numbers
//! here are only checked for being numbers; whether the position exists
//! is the cart's call, not the parser's.

use thiserror::Error;

/// A parsed gesture, ready for the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add one of the item at this position.
    Add(usize),
    /// Remove one of the item at this position.
    Remove(usize),
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

/// Why a line was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?}, try: + <item>, - <item> or q")]
    UnknownCommand(String),

    #[error("{0:?} is not an item number")]
    InvalidIndex(String),

    #[error("'{0}' needs an item number, like: {0} 0")]
    MissingIndex(char),
}

/// Parses one input line into an [`Action`].
pub fn parse(line: &str) -> Result<Action, ParseError> {
    let line = line.trim();

    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Action::Quit);
    }
    if line.eq_ignore_ascii_case("h") || line.eq_ignore_ascii_case("help") {
        return Ok(Action::Help);
    }
    if let Some(rest) = line.strip_prefix('+') {
        return Ok(Action::Add(parse_index(rest, '+')?));
    }
    if let Some(rest) = line.strip_prefix('-') {
        return Ok(Action::Remove(parse_index(rest, '-')?));
    }

    Err(ParseError::UnknownCommand(line.to_string()))
}

/// Parses the item number following a `+` or `-` command.
fn parse_index(rest: &str, command: char) -> Result<usize, ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(ParseError::MissingIndex(command));
    }
    rest.parse::<usize>()
        .map_err(|_| ParseError::InvalidIndex(rest.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_and_remove() {
        assert_eq!(parse("+0"), Ok(Action::Add(0)));
        assert_eq!(parse("+ 2"), Ok(Action::Add(2)));
        assert_eq!(parse("  +  13  "), Ok(Action::Add(13)));
        assert_eq!(parse("-1"), Ok(Action::Remove(1)));
        assert_eq!(parse(" - 0 "), Ok(Action::Remove(0)));
    }

    #[test]
    fn test_parse_quit_ignores_case() {
        assert_eq!(parse("q"), Ok(Action::Quit));
        assert_eq!(parse("Q"), Ok(Action::Quit));
        assert_eq!(parse("quit"), Ok(Action::Quit));
        assert_eq!(parse("QUIT"), Ok(Action::Quit));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("h"), Ok(Action::Help));
        assert_eq!(parse("HELP"), Ok(Action::Help));
        assert_eq!(parse("  help  "), Ok(Action::Help));
    }

    #[test]
    fn test_parse_rejects_unknown_commands() {
        assert_eq!(
            parse("hello"),
            Err(ParseError::UnknownCommand("hello".to_string()))
        );
        assert_eq!(parse(""), Err(ParseError::UnknownCommand(String::new())));
        // "quit now" is not the quit command
        assert!(matches!(parse("quit now"), Err(ParseError::UnknownCommand(_))));
    }

    #[test]
    fn test_parse_rejects_bad_item_numbers() {
        assert_eq!(parse("+"), Err(ParseError::MissingIndex('+')));
        assert_eq!(parse("-   "), Err(ParseError::MissingIndex('-')));
        assert_eq!(
            parse("+ two"),
            Err(ParseError::InvalidIndex("two".to_string()))
        );
        // A second sign is not part of a number
        assert_eq!(parse("- -1"), Err(ParseError::InvalidIndex("-1".to_string())));
    }
}
