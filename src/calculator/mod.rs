//! Calculator module.
//!
//! This module provides:
//! - The input state machine driven by discrete key actions
//! - Result formatting for a twelve character display
//! - Copying the displayed value to the clipboard

mod action;
mod clipboard;
mod engine;
mod format;
mod operation;

pub use action::Action;
pub use clipboard::copy_to_clipboard;
pub use engine::{ArithmeticError, Calculator, CalculatorState, evaluate};
pub use format::{ERROR_SENTINEL, MAX_DISPLAY_LEN, format_result};
pub use operation::Operation;
