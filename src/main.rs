// Mixnode Explorer
// Terminal explorer for Nym mixnodes

// IMPORTS ------------------>>

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use mixnode_explorer::core::{AppConfig, CliOverrides, Route, UserConfig};
use mixnode_explorer::store::ExplorerApiClient;
use mixnode_explorer::theme::ColorMode;
use mixnode_explorer::{logging, ui, App};

//--------------------------------------------------------<<

/// Browse Nym mixnodes from the terminal
#[derive(Parser, Debug)]
#[command(name = "mixnode-explorer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Explorer API base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Path to a mixnode-explorer.yaml config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route to open on start, e.g. /nym_mixnodes/<identity>
    #[arg(long, default_value = "/nym_mixnodes")]
    open: String,

    /// Color mode: light or dark (overrides config)
    #[arg(long)]
    mode: Option<ColorMode>,

    /// Log file path (overrides config)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         MAIN ENTRY POINT                                         │
// └──────────────────────────────────────────────────────────────────────────────────────────────────┘

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    logging::init(&config.logging)?;
    info!(api = %config.api.base_url, "starting mixnode explorer");

    let client = ExplorerApiClient::new(&config.api.base_url, config.request_timeout())
        .context("Failed to create explorer API client")?;
    let mouse_enabled = config.ui.mouse_enabled;
    let mut app = App::new(config, Arc::new(client)).with_route(Route::from_path(&args.open));

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "explorer exited with an error");
    }
    info!("mixnode explorer stopped");

    result
}

/// Compiled defaults, then the user config file, then command-line flags
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    if let Some(path) = UserConfig::locate(args.config.as_deref(), &cwd) {
        let user = UserConfig::load(&path)?;
        config.apply(&user);
    }

    config.apply_cli(&CliOverrides {
        api_url: args.api_url.clone(),
        color_mode: args.mode,
        log_file: args.log_file.clone(),
    });

    config.validate()?;
    Ok(config)
}
