// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::path::PathBuf;
use std::time::Duration;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for tab-panel-demo
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and input settings
    pub ui: UiSettings,

    /// Log sink settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Tab strip style used when the page config does not name one
    pub tab_style: String,

    /// Accent color used when the page config does not name one
    pub accent_color: String,

    /// Enable mouse support (click to select a tab)
    pub mouse_enabled: bool,

    /// How long to wait for input before redrawing
    pub poll_interval: Duration,

    /// Widest the page column grows on large terminals
    pub max_content_width: u16,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path; the terminal is owned by the TUI
    pub file: PathBuf,

    /// Default filter when RUST_LOG is unset
    pub level: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tab_style: compiled::TAB_STYLE.to_string(),
            accent_color: compiled::ACCENT_COLOR.to_string(),
            mouse_enabled: compiled::MOUSE_ENABLED,
            poll_interval: Duration::from_millis(compiled::POLL_INTERVAL_MS),
            max_content_width: compiled::MAX_CONTENT_WIDTH,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(compiled::LOG_FILE),
            level: compiled::LOG_LEVEL.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
