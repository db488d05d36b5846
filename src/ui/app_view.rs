// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{pages, Styles};
use crate::core::{App, Route};

const LIST_HELP: &str = "q: Quit | ↑/↓: Navigate | PgUp/PgDn: Page | Enter: Open | r: Refresh | t: Theme";
const DETAIL_HELP: &str = "q: Quit | Esc: Back | r: Refresh | t: Theme";
const DETAIL_ROOT_HELP: &str = "q: Quit | Esc: Quit | r: Refresh | t: Theme";

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let styles = Styles::new(&theme);

    // Baseline: paint the whole frame with the theme background first
    f.render_widget(Block::default().style(styles.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Routed page
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0], &styles);
    render_page(f, app, chunks[1], &styles);
    render_footer(f, app, chunks[2], &styles);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect, styles: &Styles) {
    let route = app.router.current();
    let line = Line::from(vec![
        Span::styled("Nym Mixnode Explorer", styles.header()),
        Span::styled(format!("  {}", route.title()), styles.page_title()),
        Span::styled(format!("  {}", route.path()), styles.muted()),
        Span::styled(format!("  [{}]", app.color_mode), styles.muted()),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL).border_style(styles.border()));
    f.render_widget(header, area);
}

/// Render the page for the current route
fn render_page(f: &mut Frame, app: &App, area: Rect, styles: &Styles) {
    match app.router.current() {
        Route::Mixnodes => {
            pages::mixnode_list::render(f, area, app.store.listing(), app.selected_index, styles);
        }
        Route::MixnodeDetail(params) => {
            pages::mixnode_detail::render(
                f,
                area,
                params,
                &app.store,
                styles,
                app.config.ui.wide_layout_min_width,
            );
        }
    }
}

/// Render the footer bar
fn render_footer(f: &mut Frame, app: &App, area: Rect, styles: &Styles) {
    let help = match app.router.current() {
        Route::Mixnodes => LIST_HELP,
        // Opened directly on a detail page there is nothing to go back to
        Route::MixnodeDetail(_) if app.router.can_go_back() => DETAIL_HELP,
        Route::MixnodeDetail(_) => DETAIL_ROOT_HELP,
    };

    let status = app.status_line();
    let status_style = if status.starts_with("Last error") {
        styles.error()
    } else {
        styles.footer()
    };

    let line = Line::from(vec![
        Span::styled(help, styles.footer()),
        Span::raw("  "),
        Span::styled(status, status_style),
    ]);

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL).border_style(styles.border()));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppConfig;
    use crate::store::testing::StaticSource;
    use crate::store::MixnodeId;
    use crate::theme::{ColorMode, ThemeConfig};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_app(f, app)).unwrap();
        terminal
    }

    fn text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_detail_route_renders_page() {
        let source = Arc::new(StaticSource::new(vec![]));
        let app = App::new(AppConfig::default(), source).with_route(Route::detail(MixnodeId::from("alpha")));

        let screen = text(&draw(&app));
        assert!(screen.contains("/nym_mixnodes/alpha"));
        assert!(screen.contains("Mixnode Detail"));
        assert!(screen.contains("Esc: Quit"));
    }

    #[test]
    fn test_detail_help_offers_back_after_navigation() {
        let source = Arc::new(StaticSource::new(vec![]));
        let mut app = App::new(AppConfig::default(), source);
        app.router.navigate(Route::detail(MixnodeId::from("alpha")));

        let screen = text(&draw(&app));
        assert!(screen.contains("Esc: Back"));
        assert!(!screen.contains("Esc: Quit"));
    }

    #[test]
    fn test_baseline_follows_color_mode() {
        let source = Arc::new(StaticSource::new(vec![]));
        let mut app = App::new(AppConfig::default(), source);
        app.color_mode = ColorMode::Dark;

        let dark = draw(&app);
        app.toggle_color_mode();
        let light = draw(&app);

        let cell_bg = |terminal: &Terminal<TestBackend>| terminal.backend().buffer()[(60, 20)].bg;
        assert_eq!(cell_bg(&dark), ThemeConfig::from_mode(ColorMode::Dark).palette.background);
        assert_eq!(cell_bg(&light), ThemeConfig::from_mode(ColorMode::Light).palette.background);
    }
}
