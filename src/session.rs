//! A calculator session driven by typed lines.
//!
//! Each line is split into key presses which are applied to one calculator in
//! order; the display is rendered after every line.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::calculator::{Action, Calculator};
use crate::config::Config;
use crate::display::{Screen, render_keypad};
use crate::error::Result;
use crate::input::{key_bindings, parse_keys};

/// Callback invoked with each successful calculation result.
pub type ResultCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Lines that end an interactive session.
const QUIT_COMMANDS: &[&str] = &["quit", "exit", ":q"];

/// One interactive calculator session.
pub struct Session {
    calculator: Calculator,
    config: Config,
    on_result: Option<ResultCallback>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
            on_result: None,
        }
    }

    /// Register a callback for successful results (used for clipboard copy).
    pub fn set_on_result(&mut self, callback: impl Fn(&str) + Send + Sync + 'static) {
        self.on_result = Some(Arc::new(callback));
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        Screen::from_state(&self.calculator.state())
    }

    /// Apply one action, notifying the result callback after a calculation.
    pub fn apply(&mut self, action: &Action) {
        let pending = self.calculator.state().operation.is_some();
        self.calculator.apply(action);

        if *action != Action::Calculate || !pending {
            return;
        }

        let state = self.calculator.state();
        if state.overwrite
            && state.operation.is_none()
            && let Some(ref on_result) = self.on_result
        {
            on_result(&state.current_value);
        }
    }

    /// Apply every key in `line` and return the resulting screen.
    ///
    /// In strict mode an unknown key rejects the whole line before any key
    /// is applied.
    pub fn feed_line(&mut self, line: &str) -> Result<Screen> {
        let actions = parse_keys(line, self.config.session.strict_keys)?;
        debug!(line, count = actions.len(), "feeding line");

        for action in &actions {
            self.apply(action);
        }

        Ok(self.screen())
    }

    /// Render a screen with the configured layout.
    pub fn render(&self, screen: &Screen) -> String {
        screen.render(self.config.display.show_pending, self.config.display.width)
    }

    /// Run an interactive loop until EOF or a quit command.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<()> {
        info!("session started");
        writeln!(writer, "{}", self.render(&self.screen()))?;

        let mut lines = reader.lines();
        loop {
            write!(writer, "{}", self.config.session.prompt)?;
            writer.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();

            if QUIT_COMMANDS.contains(&trimmed) {
                break;
            }

            if trimmed == "help" {
                write!(writer, "{}", render_help())?;
                continue;
            }

            match self.feed_line(trimmed) {
                Ok(screen) => writeln!(writer, "{}", self.render(&screen))?,
                Err(err) => {
                    warn!(%err, "rejected input line");
                    writeln!(writer, "error: {}", err)?;
                }
            }
        }

        info!("session ended");
        Ok(())
    }
}

/// Keypad plus key bindings.
pub fn render_help() -> String {
    let mut out = render_keypad();
    out.push('\n');
    for (keys, description) in key_bindings() {
        out.push_str(&format!("  {:<18} {}\n", keys, description));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;
    use std::io::Cursor;
    use std::sync::Mutex;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.session.prompt = String::new();
        config.display.width = 0;
        config
    }

    #[test]
    fn test_feed_line() {
        let mut session = Session::new(quiet_config());
        let screen = session.feed_line("12+30=").unwrap();
        assert_eq!(screen.primary, "42");
        assert_eq!(screen.pending, None);
    }

    #[test]
    fn test_feed_line_pending() {
        let mut session = Session::new(quiet_config());
        let screen = session.feed_line("5 ÷").unwrap();
        assert_eq!(screen.primary, "");
        assert_eq!(screen.pending.as_deref(), Some("5 ÷"));

        let screen = session.feed_line("0 enter").unwrap();
        assert!(screen.is_error);
    }

    #[test]
    fn test_calculator_state_after_line() {
        let mut session = Session::new(quiet_config());
        session.feed_line("7*").unwrap();

        let state = session.calculator().state();
        assert_eq!(state.previous_value, "7");
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.current_value, "");
    }

    #[test]
    fn test_strict_line_rejected_whole() {
        let mut config = quiet_config();
        config.session.strict_keys = true;
        let mut session = Session::new(config);

        assert!(session.feed_line("12x").is_err());
        assert_eq!(session.screen().primary, "0");
    }

    #[test]
    fn test_result_callback() {
        let results = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&results);

        let mut session = Session::new(quiet_config());
        session.set_on_result(move |value| sink.lock().unwrap().push(value.to_string()));

        session.feed_line("2*3=").unwrap();
        // Repeated equals does not report again
        session.feed_line("=").unwrap();
        // Division by zero is not a result
        session.feed_line("1/0=").unwrap();
        session.feed_line("c 9-4=").unwrap();

        assert_eq!(*results.lock().unwrap(), vec!["6", "5"]);
    }

    #[test]
    fn test_run() {
        let input = Cursor::new("2+2+2\n=\nhelp\nquit\n9\n");
        let mut output = Vec::new();

        let mut session = Session::new(quiet_config());
        session.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0");
        assert_eq!(lines[1], "4 +");
        assert_eq!(lines[2], "2");
        assert_eq!(lines[3], "6");
        assert!(text.contains("[ C ]"));
        assert_eq!(session.screen().primary, "6");
    }

    #[test]
    fn test_run_reports_strict_errors() {
        let mut config = quiet_config();
        config.session.strict_keys = true;
        let input = Cursor::new("7?\n");
        let mut output = Vec::new();

        Session::new(config).run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("error: unknown key: \"?\""));
    }
}
