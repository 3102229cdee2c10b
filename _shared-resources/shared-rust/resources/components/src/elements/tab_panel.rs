// Tab Panel Component
// Draws a panel view: tab strip plus the single active content region,
// or an alert box when there are no tabs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};

use super::heading::Heading;
use super::paragraph::TextBlock;
use super::tab_bar::{TabBar, TabBarAlignment, TabBarStyle};
use crate::core::{
    ContentRegion, ControlRegistry, PanelView, Role, ALERT_ID, TAB_CONTROL_PREFIX, TAB_LIST_ID, TAB_PANEL_PREFIX,
};
use crate::utilities::{hex_color, wrapped_height};

/// Border plus horizontal padding on each side of the content region
const CONTENT_CHROME_WIDTH: u16 = 4;
/// Top and bottom border of the content region
const CONTENT_CHROME_HEIGHT: u16 = 2;

pub struct TabPanel<'a> {
    view: PanelView<'a>,
    style: TabBarStyle,
    alignment: TabBarAlignment,
    color: Color,
    title: Option<&'a str>,
}

impl<'a> TabPanel<'a> {
    pub fn new(view: PanelView<'a>) -> Self {
        Self {
            view,
            style: TabBarStyle::Tab,
            alignment: TabBarAlignment::Center,
            color: Color::Cyan,
            title: None,
        }
    }

    pub fn with_style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_alignment(mut self, alignment: TabBarAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Title shown on the content border (the tab list's accessible label)
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn view(&self) -> &PanelView<'a> {
        &self.view
    }

    /// Rows the panel wants at `width`
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(CONTENT_CHROME_WIDTH);
        match &self.view {
            PanelView::Empty { notice } => wrapped_height(notice, inner) + CONTENT_CHROME_HEIGHT,
            PanelView::Tabs { content, .. } => {
                self.style.height()
                    + CONTENT_CHROME_HEIGHT
                    + Self::content_heading(content).height(inner)
                    + 1
                    + TextBlock::new(content.body).height(inner)
            }
        }
    }

    fn content_heading(content: &ContentRegion<'a>) -> Heading<'a> {
        Heading::new(content.heading).level(content.heading_level)
    }

    /// Render the panel and keep the registry in sync with what was drawn:
    /// the outer region, every tab control and the visible content region
    pub fn render_with_registry(self, area: Rect, buf: &mut Buffer, registry: &mut ControlRegistry) {
        registry.unregister_prefixed(TAB_CONTROL_PREFIX);
        registry.unregister_prefixed(TAB_PANEL_PREFIX);
        for id in [ALERT_ID, TAB_LIST_ID] {
            if let Some(handle) = registry.get_handle(id) {
                registry.unregister(handle);
            }
        }

        match &self.view {
            PanelView::Empty { notice } => {
                registry.register(self.view.region_id(), self.view.role(), area);
                self.render_notice(notice, self.view.role(), area, buf);
            }
            PanelView::Tabs { content, .. } => {
                let [strip_area, content_area] =
                    Layout::vertical([Constraint::Length(self.style.height()), Constraint::Min(0)]).areas(area);
                registry.register(self.view.region_id(), self.view.role(), strip_area);

                TabBar::from_view(&self.view, registry, self.style)
                    .with_color(self.color)
                    .with_alignment(self.alignment)
                    .render_with_registry(strip_area, buf, registry);

                registry.register(&content.id, content.role(), content_area);
                registry.link(&content.id, &content.labelled_by);
                self.render_content(content, content_area, buf);
            }
        }
    }

    fn render_notice(&self, notice: &str, role: Role, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(hex_color(0xB45309)))
            .padding(Padding::horizontal(1))
            .title(format!(" {} ", role.label()));
        let notice_style = Style::default().fg(hex_color(0xFBBF24)).add_modifier(Modifier::BOLD);
        Paragraph::new(Span::styled(notice.to_string(), notice_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn render_content(&self, content: &ContentRegion<'a>, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(hex_color(0x334155)))
            .padding(Padding::horizontal(1));
        if let Some(title) = self.title {
            block = block.title(format!(" {title} "));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let heading = Self::content_heading(content);
        let heading_height = heading.height(inner.width);
        let [heading_area, _gap, body_area] = Layout::vertical([
            Constraint::Length(heading_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        heading.render(heading_area, buf);
        TextBlock::new(content.body).render(body_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Tab, TabSelector};
    use crate::utilities::buffer_text;

    fn render(selector: &TabSelector, registry: &mut ControlRegistry) -> String {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        TabPanel::new(selector.view())
            .with_style(TabBarStyle::Boxed)
            .render_with_registry(area, &mut buf, registry);
        buffer_text(&buf)
    }

    fn sample() -> Vec<Tab> {
        vec![
            Tab::new("Tab 1", "Heading 1", "Body 1"),
            Tab::new("Tab 2", "Heading 2", "Body 2"),
        ]
    }

    #[test]
    fn test_renders_only_active_content() {
        let mut registry = ControlRegistry::new();
        let text = render(&TabSelector::with_default_index(sample()), &mut registry);

        assert!(text.contains("Tab 1"));
        assert!(text.contains("Tab 2"));
        assert!(text.contains("Heading 1"));
        assert!(text.contains("Body 1"));
        assert!(!text.contains("Heading 2"));
        assert!(!text.contains("Body 2"));
    }

    #[test]
    fn test_registers_regions_with_roles() {
        let mut registry = ControlRegistry::new();
        let mut selector = TabSelector::with_default_index(sample());
        selector.select(1);
        render(&selector, &mut registry);

        assert_eq!(registry.role_of("tablist"), Some(Role::TabList));
        assert_eq!(registry.role_of("tab-0"), Some(Role::Tab));
        assert_eq!(registry.role_of("tab-1"), Some(Role::Tab));
        assert_eq!(registry.role_of("panel-1"), Some(Role::TabPanel));
        assert_eq!(registry.role_of("panel-0"), None);

        // The visible region and its tab point at each other
        assert_eq!(registry.linked("panel-1"), Some("tab-1"));
        assert_eq!(registry.linked("tab-1"), Some("panel-1"));
    }

    #[test]
    fn test_content_region_follows_selection() {
        let mut registry = ControlRegistry::new();
        let mut selector = TabSelector::with_default_index(sample());
        render(&selector, &mut registry);
        assert!(registry.get_handle("panel-0").is_some());

        selector.select(1);
        render(&selector, &mut registry);
        assert!(registry.get_handle("panel-0").is_none());
        assert!(registry.get_handle("panel-1").is_some());
    }

    #[test]
    fn test_empty_view_renders_notice_only() {
        let mut registry = ControlRegistry::new();
        registry.register("tab-0", Role::Tab, Rect::new(0, 0, 3, 1));
        registry.register("panel-0", Role::TabPanel, Rect::new(0, 1, 3, 1));
        let text = render(&TabSelector::with_default_index(Vec::new()), &mut registry);

        assert!(text.contains("No tabs to display"));
        assert!(text.contains(" Alert "));
        assert!(registry.get_handle("tab-0").is_none());
        assert!(registry.get_handle("panel-0").is_none());
        assert_eq!(registry.role_of("alert"), Some(Role::Alert));
        assert_eq!(registry.role_of("tablist"), None);
    }

    #[test]
    fn test_height_accounts_for_strip_and_chrome() {
        let selector = TabSelector::with_default_index(sample());
        let panel = TabPanel::new(selector.view()).with_style(TabBarStyle::Tab);
        // strip 2 + borders 2 + heading 1 + gap 1 + body 1
        assert_eq!(panel.height(60), 7);
    }
}
