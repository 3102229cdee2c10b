// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_components::{Direction, NavCommand};

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Tab panel navigation
    Navigate(NavCommand),

    /// Left click at a screen cell; resolved against the control registry
    Click { column: u16, row: u16 },

    /// Re-read the page config from disk
    Reload,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    mouse_enabled: bool,
}

impl EventHandler {
    pub fn new(mouse_enabled: bool) -> Self {
        Self { mouse_enabled }
    }

    /// Convert a crossterm event to an application event
    pub fn handle(&self, event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) if self.mouse_enabled => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Char('h') => AppEvent::Navigate(NavCommand::Advance(Direction::Previous)),
            KeyCode::Right | KeyCode::Char('l') => AppEvent::Navigate(NavCommand::Advance(Direction::Next)),
            KeyCode::Home => AppEvent::Navigate(NavCommand::Advance(Direction::First)),
            KeyCode::End => AppEvent::Navigate(NavCommand::Advance(Direction::Last)),

            // Direct selection, 1-based on the keyboard
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                AppEvent::Navigate(NavCommand::Select(index))
            }

            // Refresh
            KeyCode::Char('r') => AppEvent::Reload,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(true)
    }
}
