// Tab Panel Demo Library
// A terminal page showcasing an accessible, keyboard-navigable tab panel

// Core infrastructure - app state, compiled config, input events
pub mod core;

// Page config loading and validation
pub mod config;
pub mod config_validation;

// Built-in demo copy
pub mod demo;

// File-backed tracing setup
pub mod logging;

// UI - page layout and main loop
pub mod ui;

// Re-export commonly used items for convenience
pub use config::{load_config, ConfigError, PageConfig, PageCopy, TabPanelSection};
pub use config_validation::{load_and_validate_config, validate_page, ValidatedPage, BUILT_IN_PAGE};
pub use self::core::{App, AppConfig, AppEvent, EventHandler};
pub use demo::demo_page;
pub use logging::init_logging;
pub use ui::{render_app, run_app};
