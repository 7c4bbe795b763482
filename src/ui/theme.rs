//! Theme management.
//!
//! Themes are small TOML documents mapping UI roles to colors. Built-in themes
//! are compiled into the binary; a custom file can be loaded at startup.
//!
//! # Built-in Themes
//!
//! - `classic`: 256-color palette (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//!
//! # TOML Format
//!
//! Colors accept anything ratatui parses: `#rrggbb` hex, an ANSI index such
//! as `"205"`, or a name like `"reset"` or `"lightred"`.
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#1e1e2e"
//! header_bg = "#cba6f7"
//! text = "#cdd6f4"
//! muted = "#6c7086"
//! selection = "#f5c2e7"
//! border = "#45475a"
//! unsaved = "#f9e2af"
//! saved = "#a6e3a1"
//! error = "#f38ba8"
//! ```
//!
//! # Example
//!
//! ```rust
//! use jou::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! assert_eq!(theme.name, "catppuccin-mocha");
//! ```

use crate::domain::error::{JouError, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_THEME: &str = "classic";

/// Theme file as written on disk.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    name: String,
    colors: ThemeColors,
}

/// Raw color strings, one per UI role.
#[derive(Debug, Deserialize)]
struct ThemeColors {
    header_fg: String,
    header_bg: String,
    text: String,
    muted: String,
    selection: String,
    border: String,
    unsaved: String,
    saved: String,
    error: String,
}

/// Resolved colors for every UI role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header_fg: Color,
    pub header_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub selection: Color,
    pub border: Color,
    pub unsaved: Color,
    pub saved: Color,
    pub error: Color,
}

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    pub palette: Palette,
}

impl Theme {
    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classic" => include_str!("../../themes/classic.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        Self::from_toml_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`JouError::Theme`] if:
    /// - The file cannot be read
    /// - The TOML content cannot be parsed or misses a color
    /// - A color value is not recognized
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| JouError::Theme(format!("failed to read {}: {e}", path.display())))?;

        Self::from_toml_str(&contents)
    }

    /// Parses a theme document.
    ///
    /// # Errors
    ///
    /// Returns [`JouError::Theme`] on invalid TOML or an unknown color.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(contents)
            .map_err(|e| JouError::Theme(format!("failed to parse theme TOML: {e}")))?;
        let c = &file.colors;

        Ok(Self {
            name: file.name,
            palette: Palette {
                header_fg: parse_color("header_fg", &c.header_fg)?,
                header_bg: parse_color("header_bg", &c.header_bg)?,
                text: parse_color("text", &c.text)?,
                muted: parse_color("muted", &c.muted)?,
                selection: parse_color("selection", &c.selection)?,
                border: parse_color("border", &c.border)?,
                unsaved: parse_color("unsaved", &c.unsaved)?,
                saved: parse_color("saved", &c.saved)?,
                error: parse_color("error", &c.error)?,
            },
        })
    }

    /// Screen title bar.
    #[must_use]
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.palette.header_fg)
            .bg(self.palette.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    /// Hints, dates and other secondary text.
    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    /// Highlighted menu option or list row.
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.selection)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    #[must_use]
    pub fn unsaved(&self) -> Style {
        Style::default().fg(self.palette.unsaved)
    }

    #[must_use]
    pub fn saved(&self) -> Style {
        Style::default().fg(self.palette.saved)
    }

    #[must_use]
    pub fn error(&self) -> Style {
        Style::default().fg(self.palette.error)
    }
}

fn parse_color(role: &str, value: &str) -> Result<Color> {
    Color::from_str(value.trim())
        .map_err(|_| JouError::Theme(format!("invalid color {value:?} for {role}")))
}

impl Default for Theme {
    /// Returns the `classic` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in classic theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        let classic = Theme::from_name("classic").unwrap();
        assert_eq!(classic.palette.header_fg, Color::Indexed(205));
        assert_eq!(classic.palette.text, Color::Reset);

        let mocha = Theme::from_name("catppuccin-mocha").unwrap();
        assert_eq!(mocha.palette.saved, Color::Rgb(0xa6, 0xe3, 0xa1));
    }

    #[test]
    fn unknown_builtin_is_none() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn invalid_color_names_the_role() {
        let toml = include_str!("../../themes/classic.toml").replace("\"196\"", "\"not-a-color\"");
        let err = Theme::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("error"), "{err}");
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("mine.toml");
        std::fs::write(
            &path,
            include_str!("../../themes/catppuccin-mocha.toml").replace("catppuccin-mocha", "mine"),
        )
        .unwrap();

        assert_eq!(Theme::from_file(&path).unwrap().name, "mine");
    }
}
