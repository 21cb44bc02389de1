//! Configuration loaded from `~/.config/zcalc/config.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine.
//!
//! ```toml
//! [display]
//! show_pending = true
//! width = 16
//!
//! [session]
//! prompt = "> "
//! copy_on_equals = false
//! strict_keys = false
//!
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! zcalc = "debug"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the `"<previous> <operation>"` line while an operation is pending.
    pub show_pending: bool,
    /// Column width the display is right-aligned to.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_pending: true,
            width: 16,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prompt printed before each interactive line.
    pub prompt: String,
    /// Copy each successful result to the clipboard.
    pub copy_on_equals: bool,
    /// Reject lines containing keys the calculator does not know.
    pub strict_keys: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            copy_on_equals: false,
            strict_keys: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for every target.
    pub default: String,
    /// Per-target overrides, e.g. `zcalc::session = "trace"`.
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// The filter directive string, e.g. `warn,zcalc::session=trace`.
    pub fn filter_directives(&self) -> String {
        let mut directives = self.default.clone();
        for (module, level) in &self.modules {
            directives.push_str(&format!(",{}={}", module, level));
        }
        directives
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.display.show_pending);
        assert_eq!(config.display.width, 16);
        assert_eq!(config.session.prompt, "> ");
        assert!(!config.session.copy_on_equals);
        assert!(!config.session.strict_keys);
        assert_eq!(config.logging.default, "warn");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nstrict_keys = true\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.session.strict_keys);
        assert_eq!(config.session.prompt, "> ");
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nwidth = \"wide\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.display.width = 24;
        config
            .logging
            .modules
            .insert("zcalc::session".to_string(), "trace".to_string());

        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_filter_directives() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.filter_directives(), "warn");

        logging
            .modules
            .insert("zcalc::calculator".to_string(), "debug".to_string());
        assert_eq!(logging.filter_directives(), "warn,zcalc::calculator=debug");
    }
}
