//! Error types for the menu layer.

use thiserror::Error;

/// Unrecognized customer input.
///
/// None of these are fatal: the controller reports them and re-prompts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The keyword does not name a beverage on the menu.
    #[error("Unknown beverage: {0}")]
    UnknownBeverage(String),

    /// The token does not name a known topping.
    #[error("Invalid topping: {0}")]
    UnknownTopping(String),

    /// The main-menu input is not one of the listed actions.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
}

/// Errors that end a menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading the customer's input or writing the transcript failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
