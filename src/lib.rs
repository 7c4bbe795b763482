//! jou: a keyboard-driven terminal journal.
//!
//! jou lets a single user write dated journal entries, browse them newest
//! first, read them in a scrollable view and edit them later. Entries live in
//! one JSON file that is rewritten atomically after every change.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal loop (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key mapping and event handling                   │
//! │  - Draft lifecycle                                  │
//! │  - Session runtime                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Storage Layer │
//! │ (ui/)         │   │ (worker/)     │   │ (storage/)    │
//! │ - Rendering   │   │ - Requests    │   │ - JSON file   │
//! │ - Theming     │   │ - Responses   │   │ - In-memory   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Entry model and errors (domain/)                 │
//! │  - Rotating log file (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Navigation state machine with event/action model
//! - [`domain`]: Core domain types (Entry, errors)
//! - [`infrastructure`]: Platform-specific paths
//! - [`storage`]: Entry store trait with JSON and in-memory backends
//! - [`worker`]: Executes store requests and reports their outcome
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based tracing output
//!
//! # Configuration
//!
//! Optional TOML file, `~/.config/jou/config.toml` on Linux:
//!
//! ```toml
//! store_path = "~/notes/journal.json"
//! date_format = "%-d %b, %Y"
//! theme = "catppuccin-mocha"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jou::app::{Event, Flow, Session, View};
//! use jou::storage::MemoryStore;
//! use jou::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! let mut session = Session::new(state, MemoryStore::new());
//!
//! assert_eq!(session.dispatch(Event::Enter), Flow::Continue);
//! assert_eq!(session.state().view, View::Compose);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Entry, EntryId, JouError, Result};
pub use ui::Theme;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default chrono format for entry dates, e.g. "2 Jan, 2006".
pub const DEFAULT_DATE_FORMAT: &str = "%-d %b, %Y";

/// Application configuration loaded from `config.toml`.
///
/// Every key is optional; missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Journal file location. Default: `<data dir>/jou/journal.json`
    pub store_path: Option<PathBuf>,

    /// chrono format string for entry dates. Default: `"%-d %b, %Y"`
    pub date_format: String,

    /// Built-in theme name: `classic` or `catppuccin-mocha`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// Tracing filter when `RUST_LOG` is unset. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file location. Default: `<data dir>/jou/jou.log`
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            theme: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults. A file named
    /// explicitly must exist.
    ///
    /// # Errors
    ///
    /// Returns [`JouError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match infrastructure::config_dir() {
                Some(dir) => (dir.join("config.toml"), false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = ?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| JouError::Config(format!("failed to read {}: {e}", path.display())))?;

        Self::from_toml_str(&contents)
            .map_err(|e| JouError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`JouError::Config`] on invalid TOML, unknown keys or a
    /// `date_format` chrono cannot render.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jou::Config;
    ///
    /// let config = Config::from_toml_str("theme = \"catppuccin-mocha\"").unwrap();
    /// assert_eq!(config.theme.as_deref(), Some("catppuccin-mocha"));
    /// assert_eq!(config.date_format, "%-d %b, %Y");
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| JouError::Config(e.to_string()))?;
        validate_date_format(&config.date_format)?;
        Ok(config)
    }

    /// Resolved journal file path, with `~/` expanded.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .as_ref()
            .map_or_else(infrastructure::default_store_path, |path| infrastructure::expand_tilde(path))
    }

    /// Resolved log file path, with `~/` expanded.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .as_ref()
            .map_or_else(infrastructure::default_log_path, |path| infrastructure::expand_tilde(path))
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = ?path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(JouError::Config(format!("invalid date_format {format:?}")));
    }
    Ok(())
}

/// Builds the startup application state from configuration.
///
/// Loads the theme (file, then name, then default) and starts on the menu
/// with an empty draft. Theme problems are logged and never fatal.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing jou");
    AppState::new(config.load_theme(), config.date_format.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("scan_depth = 4"),
            Err(JouError::Config(_))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(JouError::Config(_))));
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store_path = \"/tmp/j.json\"\ndate_format = \"%Y\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.store_path(), PathBuf::from("/tmp/j.json"));
        assert_eq!(config.date_format, "%Y");
    }

    #[test]
    fn invalid_date_format_is_rejected() {
        assert!(matches!(
            Config::from_toml_str("date_format = \"%Q\""),
            Err(JouError::Config(_))
        ));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "date_format = \"%Y %\"\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(JouError::Config(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_classic() {
        let config = Config {
            theme: Some("neon".into()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "classic");
    }
}
