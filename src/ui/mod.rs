// UI module
// TUI components, pages and the main event loop

pub mod app_view;
pub mod content_card;
pub mod mixnodes_table;
pub mod pages;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use tracing::debug;

use crate::core::{App, AppEvent, EventHandler};

pub use app_view::render_app;
pub use content_card::render_content_card;
pub use mixnodes_table::{mixnode_cells, render_mixnodes_table, COLUMNS};
pub use styles::Styles;

/// Run the main application event loop
///
/// Must be called from within a tokio runtime; route effects spawn fetches.
pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = app.config.tick_rate();

    loop {
        // Mount effects for the current route, then fold in finished fetches
        app.sync_route();
        if app.pump() {
            debug!("store updated");
        }

        terminal.draw(|f| render_app(f, app))?;

        if event::poll(tick_rate)? {
            let app_event = EventHandler::handle(event::read()?);
            if app_event != AppEvent::None {
                debug!(?app_event, "handling event");
            }
            app.handle_event(app_event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
