// Configuration validation module

use std::path::Path;
use tracing::info;
use tui_components::{convert_tab_panel_config, TabPanelConfigYaml, TabPanelSettings};

use crate::config::{load_config, ConfigError, PageConfig, PageCopy};
use crate::core::app_config::UiSettings;
use crate::demo::demo_page;

/// Name used in messages about the page shown when no config file is given
pub const BUILT_IN_PAGE: &str = "built-in demo page";

/// Page config whose tab panel has been checked once and resolved against the UI defaults
#[derive(Debug, Clone)]
pub struct ValidatedPage {
    pub page: PageCopy,
    pub tab_panel: TabPanelConfigYaml,
    pub settings: TabPanelSettings,
}

/// Load the page config (or the built-in demo page when no path is given) and
/// reject tab panel settings the components cannot render
pub fn load_and_validate_config(path: Option<&Path>, ui: &UiSettings) -> Result<ValidatedPage, ConfigError> {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading page config");
            load_config(path)?
        }
        None => {
            info!(page = BUILT_IN_PAGE, "no page config given");
            demo_page()
        }
    };

    validate_page(config, ui, path)
}

/// Resolve the tab panel against `ui` and check it. `origin` names the file in errors.
pub fn validate_page(config: PageConfig, ui: &UiSettings, origin: Option<&Path>) -> Result<ValidatedPage, ConfigError> {
    let tab_panel = config.tab_panel.resolve(ui);
    let settings = convert_tab_panel_config(&tab_panel).map_err(|source| ConfigError::Invalid {
        origin: origin.map_or_else(|| BUILT_IN_PAGE.to_string(), |path| path.display().to_string()),
        source,
    })?;

    info!(tab_count = tab_panel.tabs.len(), "page config ready");
    Ok(ValidatedPage {
        page: config.page,
        tab_panel,
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tui_components::TabPanelConfigError;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_demo_page_without_path() {
        let config = load_and_validate_config(None, &UiSettings::default()).unwrap();
        assert_eq!(config.tab_panel.tabs.len(), 3);
        assert_eq!(config.page.title, crate::demo::DEMO_TITLE);
    }

    #[test]
    fn test_loads_file_from_disk() {
        let file = write_config("tab_panel:\n  tabs:\n    - { label: Solo, heading: H, body: B }\n");
        let config = load_and_validate_config(Some(file.path()), &UiSettings::default()).unwrap();
        assert_eq!(config.tab_panel.tabs[0].label, "Solo");
    }

    #[test]
    fn test_empty_tab_list_is_valid() {
        let file = write_config("page:\n  title: Nothing here\ntab_panel:\n  tabs: []\n");
        let config = load_and_validate_config(Some(file.path()), &UiSettings::default()).unwrap();
        assert!(config.tab_panel.tabs.is_empty());
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let file = write_config("tab_panel:\n  style: sparkly\n");
        let err = load_and_validate_config(Some(file.path()), &UiSettings::default()).unwrap_err();
        match err {
            ConfigError::Invalid { source, .. } => {
                assert_eq!(source, TabPanelConfigError::UnknownStyle("sparkly".to_string()))
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_built_in_page_is_named_in_errors() {
        let ui = UiSettings {
            tab_style: "fancy".to_string(),
            ..UiSettings::default()
        };
        let err = load_and_validate_config(None, &ui).unwrap_err();
        assert_eq!(err.to_string(), "invalid tab panel in built-in demo page");
    }

    #[test]
    fn test_file_path_is_named_in_errors() {
        let file = write_config("tab_panel:\n  color: nope\n");
        let err = load_and_validate_config(Some(file.path()), &UiSettings::default()).unwrap_err();
        assert_eq!(err.to_string(), format!("invalid tab panel in {}", file.path().display()));
    }

    #[test]
    fn test_resolves_presentation_defaults() {
        let ui = UiSettings {
            tab_style: "text".to_string(),
            ..UiSettings::default()
        };
        let page = validate_page(PageConfig::default(), &ui, None).unwrap();
        assert_eq!(page.tab_panel.style, "text");
        assert_eq!(page.settings.style, tui_components::TabBarStyle::Text);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = load_and_validate_config(Some(Path::new("/nonexistent/page.yaml")), &UiSettings::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
