// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod tab_panel;

pub use tab_panel::{
    TabPanelManager,
    TabPanelConfigYaml,
    TabPanelConfigError,
    TabPanelSettings,
    convert_tab_panel_config,
};
