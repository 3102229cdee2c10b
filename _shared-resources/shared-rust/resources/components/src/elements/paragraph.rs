// Text Block Component
// Wrapped body text with consistent muted colouring

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::utilities::{hex_color, wrapped_height};

/// Body text colour (gray-600 equivalent on a dark terminal)
pub const BODY_TEXT_COLOR: u32 = 0x9CA3AF;

/// Paragraph wrapper used for every block of body copy
#[derive(Debug, Clone)]
pub struct TextBlock<'a> {
    text: &'a str,
    style: Style,
    alignment: Alignment,
}

impl<'a> TextBlock<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default(),
            alignment: Alignment::Left,
        }
    }

    /// Extra style patched over the body style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn height(&self, width: u16) -> u16 {
        wrapped_height(self.text, width)
    }
}

impl Widget for TextBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(hex_color(BODY_TEXT_COLOR)).patch(self.style);
        Paragraph::new(Line::from(Span::styled(self.text, style)))
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::buffer_text;
    use ratatui::style::Color;

    #[test]
    fn test_renders_text_with_body_colour() {
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        TextBlock::new("Body 1").render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Body 1"));
        assert_eq!(buf[(0, 0)].fg, hex_color(BODY_TEXT_COLOR));
    }

    #[test]
    fn test_extra_style_overrides_colour() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        TextBlock::new("x").style(Style::default().fg(Color::Red)).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_height_wraps_long_text() {
        let block = TextBlock::new("one two three four five");
        assert_eq!(block.height(100), 1);
        assert_eq!(block.height(9), 3);
    }
}
