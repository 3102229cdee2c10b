// Application State
// Main application state management and lifecycle

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tui_components::{tab_index_from_control_id, ControlRegistry, NavCommand, TabPanelManager};

use super::{AppConfig, AppEvent};
use crate::config::{PageConfig, PageCopy};
use crate::config_validation::{load_and_validate_config, validate_page, ValidatedPage};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (compiled defaults plus CLI overrides)
    pub config: AppConfig,

    /// Copy shown above the tab panel
    pub page: PageCopy,

    /// Tab panel state and presentation settings
    pub panel: TabPanelManager,

    /// Tab control rects from the last frame; owns input focus
    pub registry: ControlRegistry,

    /// Page config file, if one was given
    pub config_path: Option<PathBuf>,

    /// One-line message shown in the footer
    pub status: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Load the page config (or the built-in demo page) and build the app
    pub fn load(config: AppConfig, config_path: Option<PathBuf>) -> Result<Self> {
        let page = load_and_validate_config(config_path.as_deref(), &config.ui)
            .context("failed to load page config")?;
        Ok(Self::from_validated(config, page, config_path))
    }

    /// Create a new application instance from an already loaded page config
    pub fn new(config: AppConfig, page_config: PageConfig, config_path: Option<PathBuf>) -> Result<Self> {
        let page = validate_page(page_config, &config.ui, config_path.as_deref())
            .context("invalid tab panel settings")?;
        Ok(Self::from_validated(config, page, config_path))
    }

    fn from_validated(config: AppConfig, page: ValidatedPage, config_path: Option<PathBuf>) -> Self {
        let panel = TabPanelManager::with_settings(&page.tab_panel, page.settings);

        info!(
            tabs = panel.selector().len(),
            active = ?panel.active_index(),
            "application state created"
        );

        Self {
            config,
            page: page.page,
            panel,
            registry: ControlRegistry::new(),
            config_path,
            status: None,
            should_quit: false,
        }
    }

    /// Apply an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::Navigate(command) => {
                self.navigate(command);
            }
            AppEvent::Click { column, row } => {
                self.click(column, row);
            }
            AppEvent::Reload => {
                if let Err(err) = self.reload() {
                    warn!(error = %format!("{err:#}"), "reload failed");
                    self.status = Some(format!("Reload failed: {err:#}"));
                }
            }
            AppEvent::None => {}
        }
    }

    /// Forward a navigation command to the tab panel; focus moves on change
    pub fn navigate(&mut self, command: NavCommand) -> bool {
        self.panel.handle(command, &mut self.registry)
    }

    /// Select the tab whose control was drawn under the given cell
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let index = self
            .registry
            .control_at(column, row)
            .and_then(tab_index_from_control_id);

        match index {
            Some(index) => self.navigate(NavCommand::Select(index)),
            None => false,
        }
    }

    /// Re-read the page config; on failure the current state is kept.
    /// Focus follows the active tab if the reload moved it.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = self.config_path.clone() else {
            self.status = Some("Built-in demo page, nothing to reload".to_string());
            return Ok(());
        };

        let page = load_and_validate_config(Some(&path), &self.config.ui)
            .with_context(|| format!("reloading {}", path.display()))?;
        self.panel
            .reload_with_settings(&page.tab_panel, page.settings, &mut self.registry);
        self.page = page.page;
        self.status = Some(format!("Reloaded {}", display_name(&path)));
        info!(path = %path.display(), active = ?self.panel.active_index(), "page config reloaded");
        Ok(())
    }

    /// Id of the control holding input focus
    pub fn focused_control(&self) -> Option<&str> {
        self.registry.focused()
    }

    /// Mark the application for exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_components::{Direction, Tab};

    fn page(tab_count: usize, default_index: i64) -> PageConfig {
        let mut config = PageConfig::default();
        config.tab_panel.default_index = default_index;
        config.tab_panel.tabs = (1..=tab_count)
            .map(|n| Tab::new(format!("Tab {n}"), format!("Heading {n}"), format!("Body {n}")))
            .collect();
        config
    }

    #[test]
    fn test_no_focus_before_first_change() {
        let app = App::new(AppConfig::default(), page(3, 1), None).unwrap();
        assert_eq!(app.panel.active_index(), Some(1));
        assert_eq!(app.focused_control(), None);
    }

    #[test]
    fn test_navigation_moves_focus() {
        let mut app = App::new(AppConfig::default(), page(3, 0), None).unwrap();

        app.handle_event(AppEvent::Navigate(NavCommand::Advance(Direction::Previous)));
        assert_eq!(app.panel.active_index(), Some(2));
        assert_eq!(app.focused_control(), Some("tab-2"));

        app.handle_event(AppEvent::Navigate(NavCommand::Advance(Direction::First)));
        assert_eq!(app.focused_control(), Some("tab-0"));
    }

    #[test]
    fn test_click_outside_controls_is_ignored() {
        let mut app = App::new(AppConfig::default(), page(3, 0), None).unwrap();
        assert!(!app.click(0, 0));
        assert_eq!(app.panel.active_index(), Some(0));
    }

    #[test]
    fn test_reload_without_path_keeps_state() {
        let mut app = App::new(AppConfig::default(), page(2, 1), None).unwrap();
        app.handle_event(AppEvent::Reload);
        assert_eq!(app.panel.active_index(), Some(1));
        assert!(app.status.is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default(), page(0, 0), None).unwrap();
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
