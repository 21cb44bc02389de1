//! The calculator state machine.
//!
//! Input events mutate a small state of four fields. Binary operations are
//! evaluated strictly left to right; applying a new operator while another is
//! pending evaluates the pending pair first.
//!
//! Failures never escape as errors. Division by zero replaces the current
//! value with the `Error` sentinel. Overflow does the same: an infinite result
//! would otherwise put a non-numeric string such as `inf` into the current
//! value. The sentinel accepts no input except `clear` and `backspace`;
//! `backspace` resets it to `"0"` outright so that repeated backspacing always
//! ends at `"0"` instead of leaving fragments like `"Erro"`.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use super::format::{ERROR_SENTINEL, format_result};
use super::{Action, Operation};

/// Snapshot of the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    /// The operand being typed or the last result. Empty right after an operator.
    pub current_value: String,
    /// The operand captured when an operator was applied.
    pub previous_value: String,
    /// The pending operator.
    pub operation: Option<Operation>,
    /// Whether the next digit starts a fresh number.
    pub overwrite: bool,
}

impl CalculatorState {
    /// Whether the current value holds the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current_value == ERROR_SENTINEL
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            overwrite: false,
        }
    }
}

/// Why an arithmetic step produced no number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result out of range")]
    Overflow,
}

/// Apply `operation` to two operands.
pub fn evaluate(lhs: f64, operation: Operation, rhs: f64) -> Result<f64, ArithmeticError> {
    let value = match operation {
        Operation::Add => lhs + rhs,
        Operation::Subtract => lhs - rhs,
        Operation::Multiply => lhs * rhs,
        Operation::Divide => {
            if rhs == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::Overflow)
    }
}

/// One calculator session.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current state.
    pub fn state(&self) -> CalculatorState {
        self.state.clone()
    }

    /// Dispatch an [`Action`] to the matching operation.
    pub fn apply(&mut self, action: &Action) {
        trace!(?action, "applying action");
        match action {
            Action::Number(digits) => self.input_number(digits),
            Action::Decimal => self.input_decimal(),
            Action::Operation(op) => self.input_operation(*op),
            Action::Calculate => self.calculate(),
            Action::Percentage => self.percentage(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
        }
    }

    /// Enter digits.
    pub fn input_number(&mut self, digits: &str) {
        if self.state.is_error() {
            return;
        }

        if self.state.overwrite {
            self.state.current_value = digits.to_string();
            self.state.overwrite = false;
        } else if self.state.current_value == "0" {
            self.state.current_value = digits.to_string();
        } else {
            self.state.current_value.push_str(digits);
        }
    }

    /// Select a binary operator, evaluating any pending one first.
    ///
    /// Pressing a second operator before typing another operand keeps the
    /// first operator: the current value is empty at that point, so the call
    /// does nothing.
    pub fn input_operation(&mut self, operation: Operation) {
        if self.state.current_value.is_empty() || self.state.is_error() {
            return;
        }

        if !self.state.previous_value.is_empty() {
            self.calculate();
            // Nothing was evaluated, or it failed: the pending operator stays
            if !self.state.previous_value.is_empty() || self.state.is_error() {
                return;
            }
        }

        self.state.operation = Some(operation);
        self.state.previous_value = std::mem::take(&mut self.state.current_value);
        debug!(previous = %self.state.previous_value, %operation, "operation pending");
    }

    /// Evaluate the pending operation.
    pub fn calculate(&mut self) {
        let Some(operation) = self.state.operation else {
            return;
        };
        if self.state.previous_value.is_empty() || self.state.current_value.is_empty() {
            return;
        }

        let (Ok(lhs), Ok(rhs)) = (
            self.state.previous_value.parse::<f64>(),
            self.state.current_value.parse::<f64>(),
        ) else {
            trace!(
                previous = %self.state.previous_value,
                current = %self.state.current_value,
                "operands do not parse, ignoring"
            );
            return;
        };

        match evaluate(lhs, operation, rhs) {
            Ok(value) => {
                self.state.current_value = format_result(value);
                self.state.previous_value.clear();
                self.state.operation = None;
                self.state.overwrite = true;
                debug!(result = %self.state.current_value, "calculated");
            }
            Err(err) => {
                debug!(%err, lhs, rhs, %operation, "calculation failed");
                self.state.current_value = ERROR_SENTINEL.to_string();
                self.state.previous_value.clear();
                self.state.operation = None;
            }
        }
    }

    /// Divide the current value by 100.
    pub fn percentage(&mut self) {
        if self.state.is_error() {
            return;
        }

        let Ok(current) = self.state.current_value.parse::<f64>() else {
            return;
        };
        self.state.current_value = format_result(current / 100.0);
    }

    /// Add a decimal point. A second point in the same number is dropped.
    pub fn input_decimal(&mut self) {
        if self.state.is_error() {
            return;
        }

        if self.state.overwrite {
            self.state.current_value = "0.".to_string();
            self.state.overwrite = false;
            return;
        }

        if !self.state.current_value.contains('.') {
            self.state.current_value.push('.');
        }
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
        debug!("cleared");
    }

    /// Remove the last character, never going below `"0"`.
    pub fn backspace(&mut self) {
        if self.state.overwrite || self.state.is_error() {
            self.state.current_value = "0".to_string();
            self.state.overwrite = false;
            return;
        }

        if self.state.current_value.chars().count() <= 1 {
            self.state.current_value = "0".to_string();
            return;
        }

        self.state.current_value.pop();
        // A lone sign is not a number
        if !self.state.current_value.chars().any(|c| c.is_ascii_digit()) {
            self.state.current_value = "0".to_string();
        }
    }
}
