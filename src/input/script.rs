//! Parsing typed lines into key presses.
//!
//! A line like `12+3=` or `5 ÷ 0 enter` is split into one key per character,
//! except for named keys which are recognised as whole words.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::keymap::action_for_key;
use crate::calculator::Action;
use crate::error::{Error, Result};

lazy_static! {
    /// Named keys first, then any single non-whitespace character.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)(backspace|escape|enter|esc|del|ac)|\S"
    ).unwrap();
}

/// Split a line into key names.
///
/// Named keys come back in their canonical spelling (`Enter`, `Backspace`,
/// `Escape`); everything else is one key per character.
pub fn tokenize(line: &str) -> Vec<String> {
    KEY_TOKEN
        .captures_iter(line)
        .map(|caps| match caps.get(1) {
            Some(named) => canonical_key_name(named.as_str()).to_string(),
            None => caps[0].to_string(),
        })
        .collect()
}

fn canonical_key_name(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "enter" => "Enter",
        "backspace" | "del" => "Backspace",
        // escape, esc, ac
        _ => "Escape",
    }
}

/// Parse a line into calculator actions.
///
/// Unknown keys are skipped, unless `strict` is set, in which case the first
/// unknown key is returned as an error.
pub fn parse_keys(line: &str, strict: bool) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    for key in tokenize(line) {
        match action_for_key(&key) {
            Some(action) => actions.push(action),
            None if strict => return Err(Error::UnknownKey(key)),
            None => debug!(%key, "ignoring unknown key"),
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn test_tokenize_characters() {
        assert_eq!(tokenize("12+3="), vec!["1", "2", "+", "3", "="]);
        assert_eq!(tokenize("  4 ×  5 "), vec!["4", "×", "5"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_named_keys() {
        assert_eq!(tokenize("5 enter"), vec!["5", "Enter"]);
        assert_eq!(tokenize("12 DEL"), vec!["1", "2", "Backspace"]);
        assert_eq!(tokenize("Backspace"), vec!["Backspace"]);
        assert_eq!(tokenize("AC 3"), vec!["Escape", "3"]);
        assert_eq!(tokenize("esc"), vec!["Escape"]);
        assert_eq!(tokenize("ESCAPE"), vec!["Escape"]);
    }

    #[test]
    fn test_parse_keys() {
        let actions = parse_keys("7*6=", false).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::number("7"),
                Action::Operation(Operation::Multiply),
                Action::number("6"),
                Action::Calculate,
            ]
        );
    }

    #[test]
    fn test_parse_keys_skips_unknown() {
        let actions = parse_keys("1x2", false).unwrap();
        assert_eq!(actions, vec![Action::number("1"), Action::number("2")]);
    }

    #[test]
    fn test_parse_keys_strict() {
        match parse_keys("1x2", true) {
            Err(Error::UnknownKey(key)) => assert_eq!(key, "x"),
            other => panic!("expected unknown key error, got {:?}", other),
        }
    }
}
