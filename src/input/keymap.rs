//! Mapping from keypad buttons and keyboard keys to calculator actions.
//!
//! Keys are resolved to the keypad button they stand for, and each button
//! carries the action it triggers.

use crate::calculator::{Action, Operation};

/// What a keypad button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator,
    Equals,
    Clear,
    Backspace,
    Decimal,
}

/// A keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub kind: ButtonKind,
    /// Number of grid columns the button covers.
    pub span: usize,
}

impl Button {
    const fn new(label: &'static str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            span: 1,
        }
    }

    const fn wide(label: &'static str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            span: 2,
        }
    }

    /// The action this button triggers.
    ///
    /// `%` sits among the operators on the keypad but applies a percentage.
    pub fn action(&self) -> Option<Action> {
        match self.kind {
            ButtonKind::Number => Some(Action::number(self.label)),
            ButtonKind::Operator if self.label == "%" => Some(Action::Percentage),
            ButtonKind::Operator => self.label.parse::<Operation>().ok().map(Action::Operation),
            ButtonKind::Equals => Some(Action::Calculate),
            ButtonKind::Clear => Some(Action::Clear),
            ButtonKind::Backspace => Some(Action::Backspace),
            ButtonKind::Decimal => Some(Action::Decimal),
        }
    }
}

/// Number of columns in the keypad grid.
pub const KEYPAD_COLUMNS: usize = 4;

/// The keypad, row by row.
pub static KEYPAD: [Button; 19] = [
    Button::new("C", ButtonKind::Clear),
    Button::new("⌫", ButtonKind::Backspace),
    Button::new("%", ButtonKind::Operator),
    Button::new("÷", ButtonKind::Operator),
    Button::new("7", ButtonKind::Number),
    Button::new("8", ButtonKind::Number),
    Button::new("9", ButtonKind::Number),
    Button::new("×", ButtonKind::Operator),
    Button::new("4", ButtonKind::Number),
    Button::new("5", ButtonKind::Number),
    Button::new("6", ButtonKind::Number),
    Button::new("-", ButtonKind::Operator),
    Button::new("1", ButtonKind::Number),
    Button::new("2", ButtonKind::Number),
    Button::new("3", ButtonKind::Number),
    Button::new("+", ButtonKind::Operator),
    Button::wide("0", ButtonKind::Number),
    Button::new(".", ButtonKind::Decimal),
    Button::new("=", ButtonKind::Equals),
];

/// Find a keypad button by its label.
pub fn button_for_label(label: &str) -> Option<&'static Button> {
    KEYPAD.iter().find(|button| button.label == label)
}

/// Resolve a keyboard key name to the keypad button it presses.
///
/// Key names follow the browser `KeyboardEvent.key` convention
/// (`"7"`, `"*"`, `"Enter"`, `"Backspace"`, `"Escape"`).
pub fn button_for_key(key: &str) -> Option<&'static Button> {
    let label = match key {
        "*" => "×",
        "/" => "÷",
        "Enter" => "=",
        "Backspace" => "⌫",
        "Escape" | "c" => "C",
        other => other,
    };
    button_for_label(label)
}

/// Action for a keyboard key, or `None` for keys the calculator ignores.
pub fn action_for_key(key: &str) -> Option<Action> {
    button_for_key(key).and_then(Button::action)
}

/// Action for a keypad button label.
pub fn action_for_button(label: &str) -> Option<Action> {
    button_for_label(label).and_then(Button::action)
}

/// Human-readable key bindings, for help output.
pub fn key_bindings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("0-9", "enter digit"),
        (".", "decimal point"),
        ("+ - * /", "operator (× ÷ also accepted)"),
        ("Enter, =", "calculate"),
        ("%", "percentage"),
        ("Backspace, DEL", "delete last character"),
        ("Escape, AC, c, C", "clear"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for digit in 0..=9 {
            let key = digit.to_string();
            assert_eq!(action_for_key(&key), Some(Action::Number(key.clone())));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(action_for_key("+"), Some(Action::Operation(Operation::Add)));
        assert_eq!(action_for_key("-"), Some(Action::Operation(Operation::Subtract)));
        assert_eq!(action_for_key("*"), Some(Action::Operation(Operation::Multiply)));
        assert_eq!(action_for_key("/"), Some(Action::Operation(Operation::Divide)));
        assert_eq!(action_for_key("×"), Some(Action::Operation(Operation::Multiply)));
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for_key("."), Some(Action::Decimal));
        assert_eq!(action_for_key("Enter"), Some(Action::Calculate));
        assert_eq!(action_for_key("="), Some(Action::Calculate));
        assert_eq!(action_for_key("Backspace"), Some(Action::Backspace));
        assert_eq!(action_for_key("Escape"), Some(Action::Clear));
        assert_eq!(action_for_key("c"), Some(Action::Clear));
        assert_eq!(action_for_key("C"), Some(Action::Clear));
        assert_eq!(action_for_key("%"), Some(Action::Percentage));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(action_for_key("a"), None);
        assert_eq!(action_for_key("Tab"), None);
        assert_eq!(action_for_key("^"), None);
        assert_eq!(action_for_key(""), None);
    }

    #[test]
    fn test_buttons() {
        assert_eq!(action_for_button("⌫"), Some(Action::Backspace));
        assert_eq!(action_for_button("%"), Some(Action::Percentage));
        assert_eq!(action_for_button("÷"), Some(Action::Operation(Operation::Divide)));
        assert_eq!(action_for_button("*"), None);
    }

    #[test]
    fn test_keypad_layout() {
        let cells: usize = KEYPAD.iter().map(|b| b.span).sum();
        assert_eq!(cells % KEYPAD_COLUMNS, 0);
        assert_eq!(cells / KEYPAD_COLUMNS, 5);
        assert!(KEYPAD.iter().all(|b| b.action().is_some()));
    }
}
