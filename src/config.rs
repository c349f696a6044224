//! Startup configuration.
//!
//! Values come from the environment and can be overridden with the builder
//! setters (the CLI uses these). Nothing here is ever written back: the
//! theme picked at startup is forgotten on exit like any other state.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ChatError, ChatResult};
use crate::state::Theme;

pub const ENV_THEME: &str = "FLASH_CHAT_THEME";
pub const ENV_LOG_DIR: &str = "FLASH_CHAT_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "FLASH_CHAT_LOG";
pub const ENV_TICK_MS: &str = "FLASH_CHAT_TICK_MS";
pub const ENV_MOUSE: &str = "FLASH_CHAT_MOUSE";

const DEFAULT_TICK_MS: u64 = 250;
/// ~60fps; anything faster only burns CPU.
const MIN_TICK_MS: u64 = 16;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the TUI session.
///
/// # Example
///
/// ```
/// use flash_chat::config::AppConfig;
/// use flash_chat::state::Theme;
///
/// let config = AppConfig::default()
///     .with_theme(Theme::Dark)
///     .with_mouse(false);
/// assert_eq!(config.theme, Theme::Dark);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Theme on startup
    pub theme: Theme,
    /// Directory for the log file (None = platform data dir)
    pub log_dir: Option<PathBuf>,
    /// Default filter directive when RUST_LOG is unset
    pub log_level: String,
    /// Redraw tick in milliseconds
    pub tick_ms: u64,
    /// Capture mouse events for click interactions
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            tick_ms: DEFAULT_TICK_MS,
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the process environment.
    pub fn from_env() -> ChatResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_THEME) {
            config.theme = value.parse().map_err(|_| invalid(ENV_THEME, &value))?;
        }

        if let Some(value) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(value));
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            config.log_level = value.trim().to_string();
        }

        if let Some(value) = lookup(ENV_TICK_MS) {
            let ms: u64 = value.trim().parse().map_err(|_| invalid(ENV_TICK_MS, &value))?;
            config.tick_ms = ms.max(MIN_TICK_MS);
        }

        if let Some(value) = lookup(ENV_MOUSE) {
            config.mouse = parse_bool(&value).ok_or_else(|| invalid(ENV_MOUSE, &value))?;
        }

        Ok(config)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = ms.max(MIN_TICK_MS);
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Resolved log directory, falling back to the platform data dir.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join("flash-chat")))
    }
}

fn invalid(key: &str, value: &str) -> ChatError {
    ChatError::Config {
        key: key.to_string(),
        message: format!("unrecognised value '{}'", value),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
