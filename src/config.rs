// Configuration loading module
// Page copy and tab panel definition read from a YAML file

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tui_components::{Tab, TabPanelConfigError, TabPanelConfigYaml};

use crate::core::app_config::UiSettings;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub page: PageCopy,
    #[serde(default)]
    pub tab_panel: TabPanelSection,
}

/// Copy shown above the tab panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageCopy {
    /// Small upper-case line above the title
    #[serde(default)]
    pub eyebrow: String,
    /// Rendered as a level 1 heading
    #[serde(default)]
    pub title: String,
    /// Rendered as a text block under the title
    #[serde(default)]
    pub intro: String,
}

/// Tab panel section; unset presentation fields fall back to the compiled UI defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabPanelSection {
    pub title: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub alignment: Option<String>,
    #[serde(default)]
    pub default_index: i64,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

impl TabPanelSection {
    /// Fill unset fields from `ui` and produce the component config
    pub fn resolve(&self, ui: &UiSettings) -> TabPanelConfigYaml {
        let defaults = TabPanelConfigYaml::default();
        TabPanelConfigYaml {
            title: self.title.clone().unwrap_or(defaults.title),
            style: self.style.clone().unwrap_or_else(|| ui.tab_style.clone()),
            color: self.color.clone().unwrap_or_else(|| ui.accent_color.clone()),
            alignment: self.alignment.clone().unwrap_or(defaults.alignment),
            default_index: self.default_index,
            tabs: self.tabs.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read page config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse page config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid tab panel in {origin}")]
    Invalid {
        /// Config file path, or the built-in page's name
        origin: String,
        #[source]
        source: TabPanelConfigError,
    },
}

pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_ui_defaults_for_unset_fields() {
        let ui = UiSettings {
            tab_style: "boxed".to_string(),
            accent_color: "magenta".to_string(),
            ..UiSettings::default()
        };
        let section = TabPanelSection {
            color: Some("green".to_string()),
            ..TabPanelSection::default()
        };

        let resolved = section.resolve(&ui);
        assert_eq!(resolved.style, "boxed");
        assert_eq!(resolved.color, "green");
        assert_eq!(resolved.alignment, "center");
        assert_eq!(resolved.title, "Tab Panel Navigation");
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
tab_panel:
  default_index: 1
  tabs:
    - label: Tab 1
      heading: Heading 1
      body: Body 1
    - label: Tab 2
      heading: Heading 2
      body: Body 2
"#;
        let config: PageConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.page, PageCopy::default());
        assert_eq!(config.tab_panel.default_index, 1);
        assert_eq!(config.tab_panel.tabs[1].body, "Body 2");
    }

    #[test]
    fn test_missing_tab_field_is_a_parse_error() {
        let yaml = "tab_panel:\n  tabs:\n    - label: Only label\n";
        assert!(serde_yaml::from_str::<PageConfig>(yaml).is_err());
    }
}
