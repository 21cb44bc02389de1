//! A keyboard-driven arithmetic calculator.
//!
//! The [`calculator`] module holds the state machine; everything else feeds it
//! key presses and shows its state.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod session;

pub use calculator::{Action, Calculator, CalculatorState, Operation, format_result};
pub use config::Config;
pub use display::Screen;
pub use error::{Error, Result};
pub use session::Session;
