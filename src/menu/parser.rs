//! Parsing of free-text customer input.

use crate::menu::ParseError;
use crate::model::Topping;
use tracing::warn;

/// Result of parsing a comma-separated toppings line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedToppings {
    /// Recognized toppings, in input order.
    pub toppings: Vec<Topping>,
    /// One entry per dropped token.
    pub rejected: Vec<ParseError>,
}

/// Splits `text` on commas and keeps the tokens that name a topping.
///
/// Blank tokens are skipped silently, so an empty line yields no toppings and
/// no warnings.
pub fn parse_toppings(text: &str) -> ParsedToppings {
    let mut parsed = ParsedToppings::default();
    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<Topping>() {
            Ok(topping) => parsed.toppings.push(topping),
            Err(e) => {
                warn!(token, "Dropping unrecognized topping");
                parsed.rejected.push(e);
            }
        }
    }
    parsed
}

/// An action offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Order,
    Exit,
}

/// Parses the main-menu input. Anything other than `1` or `2`, including
/// non-numeric text, is an [`ParseError::InvalidChoice`].
pub fn parse_choice(line: &str) -> Result<MainChoice, ParseError> {
    let input = line.trim();
    match input.parse::<u32>() {
        Ok(1) => Ok(MainChoice::Order),
        Ok(2) => Ok(MainChoice::Exit),
        _ => Err(ParseError::InvalidChoice(input.to_string())),
    }
}
