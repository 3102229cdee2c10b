//! Loading page configs from disk and reloading them into a running app.

use std::fs;
use std::io::Write;

use tab_panel_demo::{load_and_validate_config, App, AppConfig, AppEvent, ConfigError, BUILT_IN_PAGE};
use tab_panel_demo::core::UiSettings;
use tui_components::{Direction, NavCommand};

const THREE_TABS: &str = r#"
page:
  eyebrow: Eyebrow
  title: Page title
  intro: Intro copy
tab_panel:
  default_index: 2
  tabs:
    - { label: One, heading: First heading, body: First body }
    - { label: Two, heading: Second heading, body: Second body }
    - { label: Three, heading: Third heading, body: Third body }
"#;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_page_copy_and_tabs() {
    let file = config_file(THREE_TABS);
    let app = App::load(AppConfig::default(), Some(file.path().to_path_buf())).unwrap();

    assert_eq!(app.page.title, "Page title");
    assert_eq!(app.panel.selector().len(), 3);
    assert_eq!(app.panel.active_index(), Some(2));
}

#[test]
fn compiled_style_applies_when_file_sets_none() {
    let file = config_file(THREE_TABS);
    let mut config = AppConfig::default();
    config.ui.tab_style = "boxed".to_string();

    let app = App::load(config, Some(file.path().to_path_buf())).unwrap();
    assert_eq!(
        app.panel.settings().style,
        tui_components::TabBarStyle::Boxed
    );
}

#[test]
fn invalid_color_is_reported() {
    let file = config_file("tab_panel:\n  color: not-a-color\n  tabs: []\n");
    let err = load_and_validate_config(Some(file.path()), &UiSettings::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(App::load(AppConfig::default(), Some(file.path().to_path_buf())).is_err());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let file = config_file("tab_panel: [this is not a map\n");
    let err = load_and_validate_config(Some(file.path()), &UiSettings::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn reload_keeps_active_tab_when_it_still_exists() {
    let file = config_file(THREE_TABS);
    let path = file.path().to_path_buf();
    let mut app = App::load(AppConfig::default(), Some(path.clone())).unwrap();
    app.handle_event(AppEvent::Navigate(NavCommand::Advance(Direction::Previous)));
    assert_eq!(app.panel.active_index(), Some(1));

    fs::write(&path, THREE_TABS.replace("Intro copy", "Edited intro")).unwrap();
    app.handle_event(AppEvent::Reload);

    assert_eq!(app.page.intro, "Edited intro");
    assert_eq!(app.panel.active_index(), Some(1));
    assert!(app.status.as_deref().unwrap_or_default().starts_with("Reloaded"));
}

#[test]
fn failed_reload_keeps_previous_state() {
    let file = config_file(THREE_TABS);
    let path = file.path().to_path_buf();
    let mut app = App::load(AppConfig::default(), Some(path.clone())).unwrap();

    fs::write(&path, "tab_panel:\n  style: wobbly\n").unwrap();
    app.handle_event(AppEvent::Reload);

    assert_eq!(app.panel.selector().len(), 3);
    assert_eq!(app.page.title, "Page title");
    assert!(app.status.as_deref().unwrap_or_default().starts_with("Reload failed"));
}

#[test]
fn reload_to_empty_list_shows_empty_state() {
    let file = config_file(THREE_TABS);
    let path = file.path().to_path_buf();
    let mut app = App::load(AppConfig::default(), Some(path.clone())).unwrap();

    fs::write(&path, "tab_panel:\n  tabs: []\n").unwrap();
    app.handle_event(AppEvent::Reload);

    assert_eq!(app.panel.active_index(), None);
}

#[test]
fn reload_moves_focus_when_the_active_tab_disappears() {
    let file = config_file(THREE_TABS);
    let path = file.path().to_path_buf();
    let mut app = App::load(AppConfig::default(), Some(path.clone())).unwrap();
    app.handle_event(AppEvent::Navigate(NavCommand::Advance(Direction::Last)));
    assert_eq!(app.focused_control(), Some("tab-2"));

    let two_tabs: String = THREE_TABS
        .lines()
        .filter(|line| !line.contains("label: Three"))
        .collect::<Vec<_>>()
        .join("\n")
        .replace("default_index: 2", "default_index: 0");
    fs::write(&path, two_tabs).unwrap();
    app.handle_event(AppEvent::Reload);

    assert_eq!(app.panel.selector().len(), 2);
    assert_eq!(app.panel.active_index(), Some(0));
    assert_eq!(app.focused_control(), Some("tab-0"));
}

#[test]
fn reload_to_empty_list_releases_focus() {
    let file = config_file(THREE_TABS);
    let path = file.path().to_path_buf();
    let mut app = App::load(AppConfig::default(), Some(path.clone())).unwrap();
    app.handle_event(AppEvent::Navigate(NavCommand::Advance(Direction::First)));
    assert_eq!(app.focused_control(), Some("tab-0"));

    fs::write(&path, "tab_panel:\n  tabs: []\n").unwrap();
    app.handle_event(AppEvent::Reload);

    assert_eq!(app.focused_control(), None);
}

#[test]
fn invalid_built_in_page_names_its_origin() {
    let mut ui = UiSettings::default();
    ui.tab_style = "fancy".to_string();

    let err = load_and_validate_config(None, &ui).unwrap_err();
    assert!(err.to_string().contains(BUILT_IN_PAGE), "{err}");
}

#[test]
fn sample_page_in_demos_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/page.yaml");
    let config = load_and_validate_config(Some(&path), &UiSettings::default()).unwrap();
    assert_eq!(config.tab_panel.tabs.len(), 3);
    assert_eq!(config.tab_panel.default_index, 1);
}
