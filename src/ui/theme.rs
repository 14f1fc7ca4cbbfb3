//! Color themes and ANSI escape helpers.
//!
//! Built-in themes are the four Catppuccin flavours (`catppuccin-mocha`, the
//! default, `catppuccin-latte`, `catppuccin-frappe`, `catppuccin-macchiato`).
//! A custom theme is a TOML file of the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! badge_fg = "#94e2d5"
//! tag_active_fg = "#cba6f7"
//! page_current_fg = "#b4befe"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,
    pub border: String,

    pub search_bar_border: String,
    /// Query matches inside author and description cells.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Tech stack badges in table rows.
    pub badge_fg: String,
    /// Selected filter tags in the tag bar and picker.
    pub tag_active_fg: String,
    /// Current page number in the pagination bar.
    pub page_current_fg: String,

    pub success_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };
        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`FolioError::Theme`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FolioError::Theme(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| FolioError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Picks the theme for the configured options: a theme file wins over a
    /// theme name, and anything unusable falls back to the default.
    #[must_use]
    pub fn resolve(name: Option<&str>, file: Option<&str>) -> Self {
        if let Some(file) = file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "custom theme unusable, falling back"),
            }
        }
        if let Some(name) = name {
            if let Some(theme) = Self::from_name(name) {
                return theme;
            }
            tracing::warn!(theme = %name, "unknown theme name, falling back");
        }
        Self::default()
    }

    /// `#rrggbb` to RGB. Malformed colors render white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
        };
        match (hex.len(), channel(0), channel(2), channel(4)) {
            (6, Some(r), Some(g), Some(b)) => (r, g, b),
            _ => (255, 255, 255),
        }
    }

    /// 24-bit foreground escape.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Only if the embedded theme file is malformed.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("embedded catppuccin-mocha theme should parse")
    }
}
