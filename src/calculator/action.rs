//! Discrete user actions fed into the calculator.

use super::Operation;

/// A single input event for [`Calculator::apply`](super::Calculator::apply).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Digit entry. Usually a single digit, but any digit run is accepted.
    Number(String),
    /// Decimal point.
    Decimal,
    /// Binary operator selection.
    Operation(Operation),
    /// Equals.
    Calculate,
    /// Divide the current value by 100.
    Percentage,
    /// Remove the last character.
    Backspace,
    /// Reset everything.
    Clear,
}

impl Action {
    /// Create a digit action.
    pub fn number(digits: impl Into<String>) -> Self {
        Self::Number(digits.into())
    }
}
