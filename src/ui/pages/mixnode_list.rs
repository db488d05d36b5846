// Mixnode List Page
// All mixnodes with a movable selection

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::{ListingState, MixnodeRecord};
use crate::ui::{render_mixnodes_table, Styles};

pub const TITLE: &str = "Mixnodes";

/// Render the list page into `area`
pub fn render(f: &mut Frame, area: Rect, listing: &ListingState, selected: usize, styles: &Styles) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let summary = match listing {
        ListingState::Idle => Span::styled("", styles.muted()),
        ListingState::Loading => Span::styled("loading…", styles.muted()),
        ListingState::Loaded(records) => Span::styled(format!("{} nodes", records.len()), styles.muted()),
        ListingState::Failed(message) => Span::styled(format!("failed: {}", message), styles.error()),
    };
    let title = Line::from(vec![
        Span::styled(TITLE, styles.page_title()),
        Span::raw("  "),
        summary,
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let records: Vec<&MixnodeRecord> = listing.records().iter().collect();
    let selected = if records.is_empty() { None } else { Some(selected) };
    let table_title = format!(" {} ", TITLE);
    render_mixnodes_table(f, &records, selected, chunks[1], &table_title, styles);
}
