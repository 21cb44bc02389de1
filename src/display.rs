//! Display model for the calculator.
//!
//! Turns a state snapshot into what a front end shows: the primary value and,
//! while an operation is pending, a secondary line with the captured operand.

use serde::Serialize;

use crate::calculator::CalculatorState;
use crate::input::{Button, KEYPAD, KEYPAD_COLUMNS};

/// What the calculator screen shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// The value being typed or the last result.
    pub primary: String,
    /// `"<previous> <operation>"` while an operation is pending.
    pub pending: Option<String>,
    /// Whether the primary value is the error sentinel.
    pub is_error: bool,
}

impl Screen {
    /// Build the display for a state snapshot.
    pub fn from_state(state: &CalculatorState) -> Self {
        let pending = if state.previous_value.is_empty() {
            None
        } else {
            Some(match state.operation {
                Some(op) => format!("{} {}", state.previous_value, op),
                None => state.previous_value.clone(),
            })
        };

        Self {
            primary: state.current_value.clone(),
            pending,
            is_error: state.is_error(),
        }
    }

    /// Text to copy to the clipboard. Errors have nothing worth copying.
    pub fn text_for_clipboard(&self) -> Option<&str> {
        if self.is_error || self.primary.is_empty() {
            None
        } else {
            Some(&self.primary)
        }
    }

    /// Render for a terminal, right-aligned to `width` columns.
    ///
    /// The pending line goes above the primary value when `show_pending` is
    /// set. An empty primary value (right after an operator) renders blank.
    pub fn render(&self, show_pending: bool, width: usize) -> String {
        let mut out = String::new();

        if show_pending && let Some(pending) = &self.pending {
            out.push_str(&format!("{:>width$}\n", pending, width = width));
        }

        out.push_str(&format!("{:>width$}", self.primary, width = width));
        out
    }
}

impl From<&CalculatorState> for Screen {
    fn from(state: &CalculatorState) -> Self {
        Self::from_state(state)
    }
}

/// Draw the keypad as a text grid.
pub fn render_keypad() -> String {
    const CELL: usize = 5;

    let mut out = String::new();
    let mut column = 0;

    for button in KEYPAD.iter() {
        out.push_str(&render_button(button, CELL));
        column += button.span;
        if column >= KEYPAD_COLUMNS {
            out.push('\n');
            column = 0;
        }
    }

    out
}

fn render_button(button: &Button, cell: usize) -> String {
    let width = cell * button.span - 2;
    format!("[{:^width$}]", button.label, width = width)
}
