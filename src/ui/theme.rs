//! Color themes and ANSI escape sequences.
//!
//! Four Catppuccin flavors ship with the plugin (`catppuccin-mocha` is the
//! default); any other palette can be loaded from a TOML file:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#89b4fa"
//! link_fg = "#94e2d5"
//! empty_state_fg = "#89b4fa"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{Result, ZshortError};
use crate::domain::NotificationKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names of the bundled themes.
pub const BUILT_IN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Palette as `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints, column headers and secondary text.
    pub text_dim: String,

    pub border: String,
    /// Border of the URL input box while it has focus.
    pub input_border: String,

    /// Short link column.
    pub link_fg: String,

    pub empty_state_fg: String,

    /// Success notifications.
    pub success_fg: String,
    /// Error notifications.
    pub error_fg: String,
}

impl Theme {
    /// Loads a bundled theme by name.
    ///
    /// ```
    /// use zshort::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// Every color in [`ThemeColors`] is required except `header_bg`; a file
    /// missing one is rejected as a whole rather than mixed with the default.
    /// The `~` of a configured `theme_file` is expanded before this is called.
    ///
    /// # Errors
    ///
    /// Returns [`ZshortError::Io`] if the file cannot be read and
    /// [`ZshortError::Theme`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ZshortError::Theme(e.to_string()))
    }

    /// Foreground color for a notification of the given kind.
    ///
    /// ```
    /// use zshort::domain::NotificationKind;
    /// use zshort::ui::Theme;
    ///
    /// let theme = Theme::default();
    /// assert_eq!(theme.notification_fg(NotificationKind::Error), theme.colors.error_fg);
    /// ```
    #[must_use]
    pub fn notification_fg(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Success => &self.colors.success_fg,
            NotificationKind::Error => &self.colors.error_fg,
            NotificationKind::None => &self.colors.text_normal,
        }
    }

    /// Parses `#rrggbb`; anything else renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex color.
    ///
    /// ```
    /// use zshort::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#a6e3a1"), "\u{001b}[38;2;166;227;161m");
    /// // Malformed colors fall back to white instead of breaking the frame.
    /// assert_eq!(Theme::fg("green"), "\u{001b}[38;2;255;255;255m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold on. Cleared by [`reset`](Self::reset).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Clears every color and style.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the unit tests rule
    /// out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("bundled catppuccin-mocha theme should parse")
    }
}
