// UI module
// TUI views for the tab panel demo

pub mod app_view;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use tracing::debug;

use crate::core::{App, AppEvent, EventHandler};

pub use app_view::render_app;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let handler = EventHandler::new(app.config.ui.mouse_enabled);

    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(app.config.ui.poll_interval)? {
            let app_event = handler.handle(event::read()?);
            if app_event != AppEvent::None {
                debug!(?app_event, "input");
                // Status lines last until the next input
                app.status = None;
            }
            app.handle_event(app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
