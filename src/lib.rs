//! zshort: a Zellij plugin client for a URL shortener backend.
//!
//! The plugin lets you:
//! - Shorten a URL through the backend's `POST /shorten`
//! - Browse every shortened URL with its short link and click count
//! - Follow a short link, which resolves it through `GET /redirect/{code}`
//!   (counting the click) and opens the original URL
//!
//! All shortening, storage and click counting stays in the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling, busy flag, re-fetch actions      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌──────────────────────┐
//! │ UI Layer      │   │ API Layer (api/)     │
//! │ (ui/)         │   │ - Request building   │
//! │ - Rendering   │   │ - Response decoding  │
//! │ - Theming     │   │ - Context round trip │
//! └───────────────┘   └──────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Infrastructure                │
//! │  - Records, notifications, errors, sandbox paths    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zshort.wasm" {
//!         api_url "https://sho.rt/api"
//!         api_key "secret"
//!         opener "xdg-open"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! `api_url` and `api_key` fall back to the `ZSHORT_API_URL` and
//! `ZSHORT_API_KEY` environment variables present at build time.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use zshort::{handle_event, initialize, Action, ApiRequest, Config, Event};
//!
//! let mut options = BTreeMap::new();
//! options.insert("api_url".to_string(), "https://sho.rt/api/".to_string());
//!
//! let mut state = initialize(&Config::from_zellij(&options));
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted);
//! assert_eq!(actions, vec![Action::Send(ApiRequest::FetchUrls)]);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{ApiClient, ApiRequest, ApiResponse};
pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, ShortenedUrlRecord, ZshortError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default command used to open resolved URLs.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub api_url: Option<String>,

    /// Bearer token sent with every request when set.
    pub api_key: Option<String>,

    /// Command run with the original URL as its only argument.
    pub opener: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. `~` maps to the sandbox's host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: non_blank(option_env!("ZSHORT_API_URL")).map(trim_api_url),
            api_key: non_blank(option_env!("ZSHORT_API_KEY")).map(str::to_string),
            opener: DEFAULT_OPENER.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map handed to the plugin's `load`.
    ///
    /// Blank values count as unset and fall back to the defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zshort::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "https://sho.rt/api//".to_string());
    /// map.insert("opener".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_url.as_deref(), Some("https://sho.rt/api"));
    /// assert_eq!(config.opener, "xdg-open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| non_blank(config.get(key).map(String::as_str));

        Self {
            api_url: get("api_url").map(trim_api_url).or(defaults.api_url),
            api_key: get("api_key").map(str::to_string).or(defaults.api_key),
            opener: get("opener").map_or(defaults.opener, str::to_string),
            theme_name: get("theme").map(str::to_string),
            theme_file: get("theme_file").map(str::to_string),
            trace_level: get("trace_level").map_or(defaults.trace_level, str::to_string),
        }
    }

    /// Builds the backend client.
    ///
    /// # Errors
    ///
    /// Returns [`ZshortError::Config`] if `api_url` is missing or invalid.
    pub fn client(&self) -> Result<ApiClient> {
        let api_url = self
            .api_url
            .as_deref()
            .ok_or_else(|| ZshortError::Config("api_url is not configured".to_string()))?;
        ApiClient::new(api_url, self.api_key.clone())
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default"),
            }
        } else if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn trim_api_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Creates the initial application state from configuration.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = ?config.api_url, has_api_key = config.api_key.is_some(), "initializing zshort");
    AppState::new(config.client(), config.theme())
}
