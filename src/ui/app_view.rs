// Application View
// Page layout: eyebrow, title, intro copy, tab panel and a key help footer

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_components::{centered_columns, Heading, HeadingLevel, TextBlock};

use super::Styles;
use crate::core::App;

/// Columns kept free on each side of the page column
const PAGE_GUTTER: u16 = 2;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let [page_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

    let column_width = page_area
        .width
        .saturating_sub(PAGE_GUTTER * 2)
        .min(app.config.ui.max_content_width);
    let column = centered_columns(page_area, column_width);

    render_page(f, app, column);
    render_footer(f, app, footer_area);
}

/// Render page copy followed by the tab panel
fn render_page(f: &mut Frame, app: &mut App, area: Rect) {
    let title = Heading::new(&app.page.title)
        .level(HeadingLevel::H1)
        .alignment(Alignment::Center);
    let intro = TextBlock::new(&app.page.intro).alignment(Alignment::Center);

    let eyebrow_height = u16::from(!app.page.eyebrow.is_empty());
    let title_height = if app.page.title.is_empty() { 0 } else { title.height(area.width) };
    let intro_height = if app.page.intro.is_empty() { 0 } else { intro.height(area.width) };

    let [_, eyebrow_area, title_area, intro_area, _, panel_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(eyebrow_height),
        Constraint::Length(title_height),
        Constraint::Length(intro_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    if eyebrow_height > 0 {
        let eyebrow = Paragraph::new(app.page.eyebrow.to_uppercase())
            .style(Styles::eyebrow(&app.config.ui.accent_color))
            .alignment(Alignment::Center);
        f.render_widget(eyebrow, eyebrow_area);
    }
    if title_height > 0 {
        f.render_widget(title, title_area);
    }
    if intro_height > 0 {
        f.render_widget(intro, intro_area);
    }

    let panel_height = app.panel.height(panel_area.width).min(panel_area.height);
    let panel_area = Rect {
        height: panel_height,
        ..panel_area
    };
    app.panel.render(panel_area, f.buffer_mut(), &mut app.registry);
}

/// Render the footer: the last status message, or key help
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(status.clone(), Styles::status())),
        None => help_line(app),
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn help_line(app: &App) -> Line<'static> {
    let accent = app.config.ui.accent_color.as_str();
    let mut bindings = vec![
        ("←/→", "switch tab"),
        ("Home/End", "first/last"),
        ("1-9", "jump"),
    ];
    if app.config.ui.mouse_enabled {
        bindings.push(("click", "select"));
    }
    if app.config_path.is_some() {
        bindings.push(("r", "reload"));
    }
    bindings.push(("q", "quit"));

    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, action)) in bindings.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::footer()));
        }
        spans.push(Span::styled(key, Styles::footer_key(accent)));
        spans.push(Span::styled(format!(" {action}"), Styles::footer()));
    }
    Line::from(spans)
}
