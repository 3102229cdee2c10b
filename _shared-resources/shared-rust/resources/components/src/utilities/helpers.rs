// Helper utilities for TUI components
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a named or `#RRGGBB` color, `None` when unknown
pub fn try_parse_color(color: &str) -> Option<Color> {
    let color = color.trim().to_lowercase();
    let parsed = match color.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        hex => {
            let digits = hex.strip_prefix('#')?;
            if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            hex_color(u32::from_str_radix(digits, 16).ok()?)
        }
    };
    Some(parsed)
}

/// Parse color from string, falling back to cyan
pub fn parse_color(color: &str) -> Color {
    try_parse_color(color).unwrap_or(Color::Cyan)
}

/// Muted style for unselected controls
pub fn muted_style() -> Style {
    Style::default().fg(hex_color(0x777777))
}

/// Bold accent style for the selected control
pub fn accent_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Wrap text to fit within max width (display columns).
/// Words wider than the line are split across lines.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            for piece in split_wide_word(word, max_width) {
                if current_line.is_empty() {
                    current_line = piece;
                } else if current_line.width() + 1 + piece.width() <= max_width {
                    current_line.push(' ');
                    current_line.push_str(&piece);
                } else {
                    lines.push(std::mem::take(&mut current_line));
                    current_line = piece;
                }
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

fn split_wide_word(word: &str, max_width: usize) -> Vec<String> {
    if word.width() <= max_width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        let mut buf = [0u8; 4];
        let ch_width = ch.encode_utf8(&mut buf).width();
        if !piece.is_empty() && piece.width() + ch_width > max_width {
            pieces.push(std::mem::take(&mut piece));
        }
        piece.push(ch);
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Rows needed to show `text` word-wrapped at `width` (at least one)
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let lines = wrap_text(text, width as usize).len().max(1);
    lines.min(u16::MAX as usize) as u16
}

/// Column span of `width` centred horizontally inside `area`
pub fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// All rendered text in a buffer, one line per row (trailing spaces kept)
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_greedy() {
        assert_eq!(wrap_text("one two three four five", 9), vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrapped_height_never_zero() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(try_parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(try_parse_color("#0e7490"), Some(Color::Rgb(0x0E, 0x74, 0x90)));
        assert_eq!(try_parse_color("#12"), None);
        assert_eq!(try_parse_color("chartreuse"), None);
        assert_eq!(parse_color("chartreuse"), Color::Cyan);
    }

    #[test]
    fn test_centered_columns() {
        let area = Rect::new(0, 0, 100, 10);
        let centered = centered_columns(area, 40);
        assert_eq!(centered.x, 30);
        assert_eq!(centered.width, 40);
        assert_eq!(centered_columns(area, 200).width, 100);
    }
}
