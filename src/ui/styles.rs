// UI Styles
// Color schemes and styling for the demo page

use ratatui::style::{Color, Modifier, Style};
use tui_components::{muted_style, parse_color};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Page copy ===

    /// Small upper-case line above the page title
    pub fn eyebrow(accent: &str) -> Style {
        Style::default()
            .fg(parse_color(accent))
            .add_modifier(Modifier::BOLD)
    }

    // === Footer ===

    pub fn footer() -> Style {
        muted_style()
    }

    pub fn footer_key(accent: &str) -> Style {
        Style::default().fg(parse_color(accent))
    }

    pub fn status() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
