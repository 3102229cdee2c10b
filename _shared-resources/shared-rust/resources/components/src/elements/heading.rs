// Heading Component
// Ranked heading (H1..H6) with per-level style presets

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use thiserror::Error;

use crate::utilities::{hex_color, wrapped_height};

/// Semantic rank of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            other => Err(InvalidHeadingLevel(other)),
        }
    }
}

/// Visual preset for one heading level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingPreset {
    pub color: Color,
    pub modifier: Modifier,
    /// Render the text in upper case
    pub uppercase: bool,
    /// Draw a rule line under the text
    pub rule: bool,
}

const SLATE_200: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
const SLATE_300: Color = Color::Rgb(0xCB, 0xD5, 0xE1);
const SLATE_400: Color = Color::Rgb(0x94, 0xA3, 0xB8);

/// Presets indexed by `HeadingLevel::rank() - 1`, each level plainer than the one above
const PRESETS: [HeadingPreset; 6] = [
    HeadingPreset { color: SLATE_200, modifier: Modifier::BOLD, uppercase: true, rule: true },
    HeadingPreset { color: SLATE_200, modifier: Modifier::BOLD, uppercase: false, rule: false },
    HeadingPreset { color: SLATE_300, modifier: Modifier::BOLD, uppercase: false, rule: false },
    HeadingPreset { color: SLATE_300, modifier: Modifier::ITALIC, uppercase: false, rule: false },
    HeadingPreset { color: SLATE_400, modifier: Modifier::empty(), uppercase: false, rule: false },
    HeadingPreset { color: SLATE_400, modifier: Modifier::DIM, uppercase: false, rule: false },
];

impl HeadingLevel {
    /// Numeric rank, 1 (highest) to 6
    pub fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub fn preset(self) -> HeadingPreset {
        PRESETS[self as usize]
    }
}

/// Heading widget
#[derive(Debug, Clone)]
pub struct Heading<'a> {
    text: &'a str,
    level: HeadingLevel,
    style: Style,
    alignment: Alignment,
}

impl<'a> Heading<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            level: HeadingLevel::default(),
            style: Style::default(),
            alignment: Alignment::Left,
        }
    }

    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = level;
        self
    }

    /// Extra style patched over the level preset
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn get_level(&self) -> HeadingLevel {
        self.level
    }

    fn display_text(&self) -> String {
        if self.level.preset().uppercase {
            self.text.to_uppercase()
        } else {
            self.text.to_string()
        }
    }

    /// Rows needed to render at `width`
    pub fn height(&self, width: u16) -> u16 {
        let rule = if self.level.preset().rule { 1 } else { 0 };
        wrapped_height(&self.display_text(), width) + rule
    }
}

impl Widget for Heading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let preset = self.level.preset();
        let style = Style::default()
            .fg(preset.color)
            .add_modifier(preset.modifier)
            .patch(self.style);

        let text = self.display_text();
        let text_height = wrapped_height(&text, area.width).min(area.height);
        Paragraph::new(Line::from(Span::styled(text, style)))
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .render(Rect { height: text_height, ..area }, buf);

        if preset.rule && area.height > text_height {
            let rule_area = Rect {
                y: area.y + text_height,
                height: 1,
                ..area
            };
            let rule_width = area.width.min(8) as usize;
            Paragraph::new(Span::styled("━".repeat(rule_width), Style::default().fg(hex_color(0x0E7490))))
                .alignment(self.alignment)
                .render(rule_area, buf);
        }
    }
}
