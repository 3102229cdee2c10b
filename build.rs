// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    if !KNOWN_TAB_STYLES.contains(&config.tab_style.as_str()) {
        println!(
            "cargo:warning=config.yaml: unknown ui.tab_style {:?}, expected one of {:?}",
            config.tab_style, KNOWN_TAB_STYLES
        );
    }

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const TAB_STYLE: &str = {tab_style:?};
pub const ACCENT_COLOR: &str = {accent_color:?};
pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const POLL_INTERVAL_MS: u64 = {poll_interval_ms};
pub const MAX_CONTENT_WIDTH: u16 = {max_content_width};

pub const LOG_FILE: &str = {log_file:?};
pub const LOG_LEVEL: &str = {log_level:?};
"#,
        tab_style = config.tab_style,
        accent_color = config.accent_color,
        mouse_enabled = config.mouse_enabled,
        poll_interval_ms = config.poll_interval_ms,
        max_content_width = config.max_content_width,
        log_file = config.log_file,
        log_level = config.log_level,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

/// Style names the tab strip accepts
const KNOWN_TAB_STYLES: [&str; 4] = ["tab", "tabbed", "text", "boxed"];

struct CompiledConfig {
    tab_style: String,
    accent_color: String,
    mouse_enabled: bool,
    poll_interval_ms: u64,
    max_content_width: u16,
    log_file: String,
    log_level: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            tab_style: "tab".to_string(),
            accent_color: "cyan".to_string(),
            mouse_enabled: true,
            poll_interval_ms: 50,
            max_content_width: 96,
            log_file: "tab-panel-demo.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;
    let mut in_logging = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Track which section we're in
        if trimmed.starts_with("ui:") {
            in_ui = true;
            in_logging = false;
            continue;
        } else if trimmed.starts_with("logging:") {
            in_ui = false;
            in_logging = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            let value = value.trim_matches('"').trim_matches('\'');
            if in_ui {
                match key {
                    "tab_style" => config.tab_style = value.to_string(),
                    "accent_color" => config.accent_color = value.to_string(),
                    "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                    "poll_interval_ms" => config.poll_interval_ms = value.parse().unwrap_or(50),
                    "max_content_width" => config.max_content_width = value.parse().unwrap_or(96),
                    _ => {}
                }
            } else if in_logging {
                match key {
                    "file" => config.log_file = value.to_string(),
                    "level" => config.log_level = value.to_string(),
                    _ => {}
                }
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments, but keep a leading # (hex color)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
