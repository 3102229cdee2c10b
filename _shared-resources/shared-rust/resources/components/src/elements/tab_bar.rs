// Tab Bar Component
// Row of tab controls with dividers, selection styling and click bounds

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::core::{tab_control_id, tab_panel_id, ControlRegistry, PanelView, Role, TAB_CONTROL_PREFIX};
use crate::utilities::{accent_style, muted_style};

/// Divider drawn between adjacent controls (decorative only)
const DIVIDER: &str = "│";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarStyle {
    /// Curved brackets around the selected tab:
    ///   ╭─────╮
    ///   ╯ TAB ╰
    Tab,
    /// Plain labels; selection shown by colour only
    Text,
    /// Square brackets around the selected tab: [ TAB ]
    Boxed,
}

impl TabBarStyle {
    /// Strict parse, `None` for unknown names
    pub fn parse(style: &str) -> Option<Self> {
        match style.trim().to_lowercase().as_str() {
            "tabbed" | "tab" => Some(TabBarStyle::Tab),
            "boxed" => Some(TabBarStyle::Boxed),
            "text" => Some(TabBarStyle::Text),
            _ => None,
        }
    }

    /// Rows used by the strip
    pub fn height(self) -> u16 {
        match self {
            TabBarStyle::Tab => 2,
            TabBarStyle::Text | TabBarStyle::Boxed => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarAlignment {
    Left,
    Center,
    Right,
}

impl TabBarAlignment {
    pub fn parse(alignment: &str) -> Option<Self> {
        match alignment.trim().to_lowercase().as_str() {
            "left" => Some(TabBarAlignment::Left),
            "center" | "centre" => Some(TabBarAlignment::Center),
            "right" => Some(TabBarAlignment::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarItem {
    pub name: String,
    pub selected: bool,
    /// Holds input focus (drawn with an underline)
    pub focused: bool,
}

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<TabBounds> for Rect {
    fn from(bounds: TabBounds) -> Self {
        Rect::new(bounds.x, bounds.y, bounds.width, bounds.height)
    }
}

pub struct TabBar {
    pub items: Vec<TabBarItem>,
    pub style: TabBarStyle,
    pub alignment: TabBarAlignment,
    pub color: Color,
}

impl TabBar {
    pub fn new(items: Vec<TabBarItem>, style: TabBarStyle) -> Self {
        Self {
            items,
            style,
            alignment: TabBarAlignment::Center,
            color: Color::Cyan,
        }
    }

    /// Build the strip for a panel view, marking the control the registry has focused
    pub fn from_view(view: &PanelView<'_>, registry: &ControlRegistry, style: TabBarStyle) -> Self {
        let items = view
            .controls()
            .iter()
            .map(|control| TabBarItem {
                name: control.label.to_string(),
                selected: control.selected,
                focused: registry.is_focused(&control.id),
            })
            .collect();
        Self::new(items, style)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: TabBarAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Rows used by the strip
    pub fn height(&self) -> u16 {
        self.style.height()
    }

    /// Every control reserves the same width so selection never shifts the layout
    fn segment_width(item: &TabBarItem) -> u16 {
        (item.name.width() as u16).saturating_add(4)
    }

    pub fn estimate_width(&self) -> u16 {
        let segments: u16 = self.items.iter().map(Self::segment_width).fold(0, u16::saturating_add);
        let dividers = self.items.len().saturating_sub(1) as u16;
        segments.saturating_add(dividers)
    }

    /// Left edge of the strip; overflowing strips start at the area's left edge
    fn start_x(&self, area: Rect) -> u16 {
        let width = self.estimate_width();
        match self.alignment {
            TabBarAlignment::Left => area.x,
            TabBarAlignment::Center => area.x + area.width.saturating_sub(width) / 2,
            TabBarAlignment::Right => area.x + area.width.saturating_sub(width),
        }
    }

    /// Columns the strip is shifted left so the selected control stays fully in view
    fn scroll_offset(&self, area: Rect) -> u16 {
        if self.estimate_width() <= area.width {
            return 0;
        }

        let mut start = 0u16;
        for item in &self.items {
            let end = start.saturating_add(Self::segment_width(item));
            if item.selected {
                return if end <= area.width { 0 } else { start.min(end - area.width) };
            }
            start = end.saturating_add(DIVIDER.width() as u16);
        }
        0
    }

    /// Row holding the labels
    fn label_row(&self, area: Rect) -> u16 {
        match self.style {
            TabBarStyle::Tab => area.y.saturating_add(1),
            TabBarStyle::Text | TabBarStyle::Boxed => area.y,
        }
    }

    /// Bounds of each control inside `area`, clipped to it.
    /// Controls scrolled out of view get zero width.
    pub fn calculate_tab_bounds(&self, area: Rect) -> Vec<TabBounds> {
        if area.width == 0 || area.height < self.height() {
            return Vec::new();
        }

        let left = i32::from(area.x);
        let right = left + i32::from(area.width);
        let y = self.label_row(area);
        let mut segment_start = i32::from(self.start_x(area)) - i32::from(self.scroll_offset(area));
        let mut bounds = Vec::with_capacity(self.items.len());

        for item in &self.items {
            let segment_end = segment_start + i32::from(Self::segment_width(item));
            let x0 = segment_start.clamp(left, right);
            let x1 = segment_end.clamp(left, right);
            bounds.push(TabBounds {
                x: x0 as u16,
                y,
                width: (x1 - x0) as u16,
                height: 1,
            });
            segment_start = segment_end + DIVIDER.width() as i32;
        }

        bounds
    }

    /// Get the index of the tab at the given coordinates (for click handling)
    pub fn get_tab_at(&self, x: u16, y: u16, area: Rect) -> Option<usize> {
        self.calculate_tab_bounds(area)
            .iter()
            .position(|b| b.width > 0 && b.contains(x, y))
    }

    /// Record every control as `tab-{index}`, linked to the region it controls.
    /// Controls outside the strip stay addressable with an empty rect.
    pub fn register_controls(&self, area: Rect, registry: &mut ControlRegistry) {
        registry.unregister_prefixed(TAB_CONTROL_PREFIX);
        for (index, bounds) in self.calculate_tab_bounds(area).into_iter().enumerate() {
            let id = tab_control_id(index);
            registry.register(&id, Role::Tab, bounds.into());
            registry.link(&id, &tab_panel_id(index));
        }
    }

    /// Render and register controls in one pass
    pub fn render_with_registry(&self, area: Rect, buf: &mut Buffer, registry: &mut ControlRegistry) {
        self.render_strip(area, buf);
        self.register_controls(area, registry);
    }

    fn label_style(&self, item: &TabBarItem) -> Style {
        let style = if item.selected { accent_style(self.color) } else { muted_style() };
        if item.focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    pub fn build_tab_line(&self) -> Line<'static> {
        let bracket_style = Style::default().fg(self.color);
        let mut spans = Vec::with_capacity(self.items.len() * 4);

        for (idx, item) in self.items.iter().enumerate() {
            let (open, close) = match (self.style, item.selected) {
                (TabBarStyle::Tab, true) => ("╯ ", " ╰"),
                (TabBarStyle::Boxed, true) => ("[ ", " ]"),
                _ => ("  ", "  "),
            };
            spans.push(Span::styled(open, bracket_style));
            spans.push(Span::styled(item.name.clone(), self.label_style(item)));
            spans.push(Span::styled(close, bracket_style));

            if idx < self.items.len() - 1 {
                spans.push(Span::styled(DIVIDER, muted_style()));
            }
        }

        Line::from(spans)
    }

    /// Curved top edge above the selected control (Tab style only)
    pub fn build_top_line(&self) -> Line<'static> {
        let mut offset = 0usize;
        for item in &self.items {
            let width = Self::segment_width(item) as usize;
            if item.selected {
                let top = format!("{}╭{}╮", " ".repeat(offset), "─".repeat(width.saturating_sub(2)));
                return Line::from(Span::styled(top, Style::default().fg(self.color)));
            }
            offset += width + DIVIDER.width();
        }
        Line::default()
    }

    fn render_strip(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < self.height() || self.items.is_empty() {
            return;
        }

        let x = self.start_x(area);
        let width = area.x.saturating_add(area.width).saturating_sub(x);
        let scroll = (0, self.scroll_offset(area));

        if self.style == TabBarStyle::Tab {
            Paragraph::new(self.build_top_line())
                .scroll(scroll)
                .render(Rect::new(x, area.y, width, 1), buf);
        }
        Paragraph::new(self.build_tab_line())
            .scroll(scroll)
            .render(Rect::new(x, self.label_row(area), width, 1), buf);
    }
}

impl Widget for &TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_strip(area, buf);
    }
}
