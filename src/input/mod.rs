//! Input handling for the calculator.
//!
//! This module provides functionality to:
//! - Map keyboard keys and keypad buttons to calculator actions
//! - Split typed lines into key presses

mod keymap;
mod script;

pub use keymap::{
    Button, ButtonKind, KEYPAD, KEYPAD_COLUMNS, action_for_button, action_for_key,
    button_for_key, button_for_label, key_bindings,
};
pub use script::{parse_keys, tokenize};
