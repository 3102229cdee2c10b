// Tab Panel Demo
// Terminal page showcasing an accessible, keyboard-navigable tab panel

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::info;

use tab_panel_demo::{init_logging, run_app, App, AppConfig};

//--------------------------------------------------------<<

#[derive(Parser, Debug)]
#[command(name = "tab-panel-demo", version, about = "Accessible tab panel demo for the terminal")]
struct Cli {
    /// Page config (YAML). Without one the built-in demo page is shown.
    #[arg(short, long, env = "TAB_PANEL_CONFIG")]
    config: Option<PathBuf>,

    /// Tab strip style used when the page config does not set one (tab, text, boxed)
    #[arg(long)]
    style: Option<String>,

    /// Log file path
    #[arg(long, env = "TAB_PANEL_LOG")]
    log_file: Option<PathBuf>,

    /// Ignore mouse input
    #[arg(long)]
    no_mouse: bool,
}

impl Cli {
    /// Compiled defaults with command line overrides applied
    fn app_config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(style) = &self.style {
            config.ui.tab_style = style.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = file.clone();
        }
        if self.no_mouse {
            config.ui.mouse_enabled = false;
        }
        config
    }
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.app_config();

    init_logging(&config.logging)?;
    info!(config = ?cli.config, "starting tab-panel-demo");

    // Config errors surface before the terminal is taken over
    let mut app = App::load(config, cli.config)?;
    let mouse = app.config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    info!("exiting");
    result
}
