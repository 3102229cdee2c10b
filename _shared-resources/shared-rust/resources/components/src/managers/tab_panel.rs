// Tab Panel Manager
// YAML configuration for a tab panel and an OOP-style wrapper that owns its selector

use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{ControlRegistry, FocusRequest, FocusTarget, NavCommand, Tab, TabSelector};
use crate::elements::tab_bar::{TabBarAlignment, TabBarStyle};
use crate::elements::tab_panel::TabPanel;
use crate::utilities::try_parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab panel configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabPanelConfigYaml {
    /// Accessible label of the tab list, shown on the content border
    #[serde(default = "default_title")]
    pub title: String,
    /// Style string ("tab", "text", "boxed")
    #[serde(default = "default_style")]
    pub style: String,
    /// Accent color (named or #RRGGBB)
    #[serde(default = "default_color")]
    pub color: String,
    /// Horizontal alignment of the strip ("left", "center", "right")
    #[serde(default = "default_alignment")]
    pub alignment: String,
    /// Tab shown first; out-of-range values fall back to 0
    #[serde(default)]
    pub default_index: i64,
    /// Tabs in display order (may be empty)
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

fn default_title() -> String {
    "Tab Panel Navigation".to_string()
}

fn default_style() -> String {
    "tab".to_string()
}

fn default_color() -> String {
    "cyan".to_string()
}

fn default_alignment() -> String {
    "center".to_string()
}

impl Default for TabPanelConfigYaml {
    fn default() -> Self {
        Self {
            title: default_title(),
            style: default_style(),
            color: default_color(),
            alignment: default_alignment(),
            default_index: 0,
            tabs: Vec::new(),
        }
    }
}

/// Rejected tab panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabPanelConfigError {
    #[error("unknown tab panel style '{0}' (expected tab, text or boxed)")]
    UnknownStyle(String),
    #[error("unknown tab panel color '{0}' (expected a color name or #RRGGBB)")]
    UnknownColor(String),
    #[error("unknown tab panel alignment '{0}' (expected left, center or right)")]
    UnknownAlignment(String),
    #[error("tab {index} has an empty label")]
    EmptyLabel { index: usize },
}

/// Validated presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPanelSettings {
    pub style: TabBarStyle,
    pub alignment: TabBarAlignment,
    pub color: Color,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Validate presentation fields and tab labels
pub fn convert_tab_panel_config(config: &TabPanelConfigYaml) -> Result<TabPanelSettings, TabPanelConfigError> {
    let style = TabBarStyle::parse(&config.style)
        .ok_or_else(|| TabPanelConfigError::UnknownStyle(config.style.clone()))?;
    let color = try_parse_color(&config.color)
        .ok_or_else(|| TabPanelConfigError::UnknownColor(config.color.clone()))?;
    let alignment = TabBarAlignment::parse(&config.alignment)
        .ok_or_else(|| TabPanelConfigError::UnknownAlignment(config.alignment.clone()))?;

    if let Some(index) = config.tabs.iter().position(|tab| tab.label.trim().is_empty()) {
        return Err(TabPanelConfigError::EmptyLabel { index });
    }

    let len = config.tabs.len() as i64;
    if len > 0 && !(0..len).contains(&config.default_index) {
        warn!(
            default_index = config.default_index,
            tab_count = len,
            "default_index out of range, showing the first tab"
        );
    }

    Ok(TabPanelSettings { style, alignment, color })
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                          Tab Panel Manager - OOP Style Tab Panel Operations                    │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Owns a tab selector and forwards its focus requests to a control registry
#[derive(Debug, Clone)]
pub struct TabPanelManager {
    selector: TabSelector,
    settings: TabPanelSettings,
    title: String,
}

impl TabPanelManager {
    /// Create a manager from config
    pub fn create(config: &TabPanelConfigYaml) -> Result<Self, TabPanelConfigError> {
        let settings = convert_tab_panel_config(config)?;
        Ok(Self::with_settings(config, settings))
    }

    /// Create a manager from config already checked by `convert_tab_panel_config`
    pub fn with_settings(config: &TabPanelConfigYaml, settings: TabPanelSettings) -> Self {
        Self {
            selector: TabSelector::new(config.tabs.clone(), config.default_index),
            settings,
            title: config.title.clone(),
        }
    }

    pub fn selector(&self) -> &TabSelector {
        &self.selector
    }

    pub fn settings(&self) -> TabPanelSettings {
        self.settings
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selector.active_index()
    }

    /// Apply a command; on change, move focus to the new active control.
    /// Returns true when a focus request was issued.
    pub fn handle(&mut self, command: NavCommand, focus: &mut impl FocusTarget) -> bool {
        match self.selector.apply(command) {
            Some(request) => {
                focus.focus_control(request);
                true
            }
            None => {
                debug!(?command, "navigation ignored");
                false
            }
        }
    }

    /// Swap in a new configuration, keeping the active tab when it still exists
    pub fn reload(&mut self, config: &TabPanelConfigYaml, focus: &mut impl FocusTarget) -> Result<(), TabPanelConfigError> {
        let settings = convert_tab_panel_config(config)?;
        self.reload_with_settings(config, settings, focus);
        Ok(())
    }

    /// Swap in an already checked configuration. When the active tab changes,
    /// focus follows it; when no tab is left, focus is released.
    pub fn reload_with_settings(
        &mut self,
        config: &TabPanelConfigYaml,
        settings: TabPanelSettings,
        focus: &mut impl FocusTarget,
    ) {
        let before = self.selector.active_index();
        self.settings = settings;
        self.title = config.title.clone();
        self.selector.replace_tabs(config.tabs.clone());

        let after = self.selector.active_index();
        if after != before {
            match after {
                Some(index) => focus.focus_control(FocusRequest { index }),
                None => focus.release_focus(),
            }
        }
    }

    /// Build the panel widget for the current state
    pub fn panel(&self) -> TabPanel<'_> {
        TabPanel::new(self.selector.view())
            .with_style(self.settings.style)
            .with_alignment(self.settings.alignment)
            .with_color(self.settings.color)
            .with_title(&self.title)
    }

    /// Rows the panel wants at `width`
    pub fn height(&self, width: u16) -> u16 {
        self.panel().height(width)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, registry: &mut ControlRegistry) {
        self.panel().render_with_registry(area, buf, registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[derive(Default)]
    struct RecordingFocus {
        requests: Vec<FocusRequest>,
        released: usize,
    }

    impl FocusTarget for RecordingFocus {
        fn focus_control(&mut self, request: FocusRequest) {
            self.requests.push(request);
        }

        fn release_focus(&mut self) {
            self.released += 1;
        }
    }

    /// Config with one tab per comma-separated label
    fn config(labels: &str) -> TabPanelConfigYaml {
        let tabs = labels
            .split(',')
            .filter(|label| !label.is_empty())
            .map(|label| Tab::new(label, format!("{label} heading"), format!("{label} body")))
            .collect();
        TabPanelConfigYaml { tabs, ..TabPanelConfigYaml::default() }
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = convert_tab_panel_config(&TabPanelConfigYaml::default()).unwrap();
        assert_eq!(settings.style, TabBarStyle::Tab);
        assert_eq!(settings.alignment, TabBarAlignment::Center);
        assert_eq!(settings.color, Color::Cyan);
    }

    #[test]
    fn test_rejects_unknown_style_and_color() {
        let bad_style = TabPanelConfigYaml { style: "fancy".into(), ..TabPanelConfigYaml::default() };
        assert_eq!(
            convert_tab_panel_config(&bad_style),
            Err(TabPanelConfigError::UnknownStyle("fancy".into()))
        );

        let bad_color = TabPanelConfigYaml { color: "chartreuse".into(), ..TabPanelConfigYaml::default() };
        assert_eq!(
            convert_tab_panel_config(&bad_color),
            Err(TabPanelConfigError::UnknownColor("chartreuse".into()))
        );
    }

    #[test]
    fn test_rejects_blank_label() {
        let mut cfg = config("A,B");
        cfg.tabs[1].label = "  ".into();
        assert_eq!(convert_tab_panel_config(&cfg), Err(TabPanelConfigError::EmptyLabel { index: 1 }));
    }

    #[test]
    fn test_out_of_range_default_index_is_clamped_not_rejected() {
        let mut cfg = config("A,B,C");
        cfg.default_index = -5;
        let manager = TabPanelManager::create(&cfg).unwrap();
        assert_eq!(manager.active_index(), Some(0));
    }

    #[test]
    fn test_handle_forwards_focus_once_per_change() {
        let mut manager = TabPanelManager::create(&config("A,B,C")).unwrap();
        let mut focus = RecordingFocus::default();

        assert!(manager.handle(NavCommand::Advance(Direction::Next), &mut focus));
        assert!(manager.handle(NavCommand::Select(2), &mut focus));
        assert!(!manager.handle(NavCommand::Select(9), &mut focus));

        assert_eq!(focus.requests, vec![FocusRequest { index: 1 }, FocusRequest { index: 2 }]);
    }

    #[test]
    fn test_single_tab_never_moves_focus() {
        let mut manager = TabPanelManager::create(&config("Solo")).unwrap();
        let mut focus = RecordingFocus::default();
        for direction in [Direction::Next, Direction::Previous, Direction::First, Direction::Last] {
            assert!(!manager.handle(NavCommand::Advance(direction), &mut focus));
        }
        assert!(focus.requests.is_empty());
    }

    #[test]
    fn test_reload_keeps_active_tab() {
        let mut manager = TabPanelManager::create(&config("A,B,C")).unwrap();
        let mut registry = ControlRegistry::new();
        manager.handle(NavCommand::Select(1), &mut registry);

        manager.reload(&config("A,B"), &mut registry).unwrap();
        assert_eq!(manager.active_index(), Some(1));
        assert_eq!(registry.focused(), Some("tab-1"));
    }

    #[test]
    fn test_reload_moves_focus_when_active_tab_disappears() {
        let mut manager = TabPanelManager::create(&config("A,B,C")).unwrap();
        let mut focus = RecordingFocus::default();
        manager.handle(NavCommand::Advance(Direction::Last), &mut focus);

        manager.reload(&config("A,B"), &mut focus).unwrap();
        assert_eq!(manager.active_index(), Some(0));
        assert_eq!(focus.requests.last(), Some(&FocusRequest { index: 0 }));

        manager.reload(&config(""), &mut focus).unwrap();
        assert_eq!(manager.active_index(), None);
        assert_eq!(focus.released, 1);
    }

    #[test]
    fn test_reload_without_change_leaves_focus_alone() {
        let mut manager = TabPanelManager::create(&config("A,B")).unwrap();
        let mut focus = RecordingFocus::default();

        manager.reload(&config("A,B,C"), &mut focus).unwrap();
        assert!(focus.requests.is_empty());
        assert_eq!(focus.released, 0);
    }

    #[test]
    fn test_failed_reload_changes_nothing() {
        let mut manager = TabPanelManager::create(&config("A,B")).unwrap();
        let mut focus = RecordingFocus::default();
        let bad = TabPanelConfigYaml { style: "fancy".into(), ..config("X") };

        assert!(manager.reload(&bad, &mut focus).is_err());
        assert_eq!(manager.selector().len(), 2);
        assert!(focus.requests.is_empty());
    }
}
