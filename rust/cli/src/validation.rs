//! Input parsing and validation for interactive commands.
//!
//! Malformed input never reaches the engine: every parser here returns a
//! message for the user instead, and the caller re-prompts.

use blackjack_engine::player::PlayerAction;

/// Result type for parsing user input into turn actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid turn action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or the quit command.
///
/// Accepts the following input formats (case-insensitive):
/// - "h" or "hit" → Hit
/// - "s" or "stand" → Stand
/// - "d" or "double" → Double
/// - "sp" or "split" → Split
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_turn_action, ParseResult};
/// use blackjack_engine::player::PlayerAction;
///
/// assert_eq!(parse_turn_action("H"), ParseResult::Action(PlayerAction::Hit));
/// assert_eq!(parse_turn_action("Sp"), ParseResult::Action(PlayerAction::Split));
/// assert_eq!(parse_turn_action("quit"), ParseResult::Quit);
///
/// match parse_turn_action("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_turn_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hit" => ParseResult::Action(PlayerAction::Hit),
        "s" | "stand" => ParseResult::Action(PlayerAction::Stand),
        "d" | "double" => ParseResult::Action(PlayerAction::Double),
        "sp" | "split" => ParseResult::Action(PlayerAction::Split),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: H, S, D, SP, q",
            other
        )),
    }
}

/// Parse a strictly positive count such as a number of players or rounds.
pub fn parse_positive_count(input: &str) -> Result<u32, String> {
    let input = input.trim();
    match input.parse::<u32>() {
        Ok(0) => Err("Please enter a number greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a whole number", input)),
    }
}

/// Name entered for player `index` (1-based); blank answers get a default.
pub fn player_name_or_default(input: &str, index: usize) -> String {
    let name = input.trim();
    if name.is_empty() {
        format!("Player {}", index)
    } else {
        name.to_string()
    }
}
