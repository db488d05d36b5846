// Mixnode Detail Page
// Title, the conditional single-row table, and the three info cards

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::RouteParams;
use crate::store::{DetailState, MixnodeId, MixnodeRecord, MixnodeStore};
use crate::ui::{render_content_card, render_mixnodes_table, Styles};

pub const TITLE: &str = "Mixnode Detail";

pub const BOND_BREAKDOWN: &str = "Bond Breakdown";
pub const MIXNODE_STATS: &str = "Mixnode Stats";
pub const UPTIME_STORY: &str = "Uptime Story";

/// What the table slot shows
#[derive(Debug, Clone, PartialEq)]
pub enum TableSlot<'a> {
    /// No data, renders nothing
    Empty,
    Loading(&'a MixnodeId),
    Row(&'a MixnodeRecord),
    Failed(&'a str),
}

/// A card title with its body lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Everything the detail page shows, independent of the terminal
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel<'a> {
    pub title: &'static str,
    pub slot: TableSlot<'a>,
    pub cards: [CardContent; 3],
}

impl<'a> DetailModel<'a> {
    pub fn build(params: &RouteParams, store: &'a MixnodeStore) -> Self {
        let routed = params.id.as_ref();

        // Only state belonging to the routed identifier is shown
        let slot = match store.detail() {
            DetailState::Loaded(record) if Some(record.id()) == routed => TableSlot::Row(record),
            DetailState::Loading(id) if Some(id) == routed => TableSlot::Loading(id),
            DetailState::Failed { id, message } if Some(id) == routed => TableSlot::Failed(message),
            _ => TableSlot::Empty,
        };

        let bond_lines = match &slot {
            TableSlot::Row(record) => bond_breakdown(record),
            _ => vec!["The bond breakdown appears once the node has loaded.".to_string()],
        };

        Self {
            title: TITLE,
            slot,
            cards: [
                CardContent {
                    title: BOND_BREAKDOWN,
                    lines: bond_lines,
                },
                CardContent {
                    title: MIXNODE_STATS,
                    lines: vec!["Packet statistics for this mixnode are not available yet.".to_string()],
                },
                CardContent {
                    title: UPTIME_STORY,
                    lines: vec!["Uptime history for this mixnode is not available yet.".to_string()],
                },
            ],
        }
    }

    /// Table rows: exactly one once loaded, none otherwise
    pub fn rows(&self) -> Vec<&'a MixnodeRecord> {
        match self.slot {
            TableSlot::Row(record) => vec![record],
            _ => Vec::new(),
        }
    }
}

fn bond_breakdown(record: &MixnodeRecord) -> Vec<String> {
    let total = record
        .total_stake()
        .map(|coin| coin.display_amount())
        .unwrap_or_else(|| "-".to_string());

    vec![
        format!("Pledge:      {}", record.pledge_amount.display_amount()),
        format!("Delegations: {}", record.total_delegation.display_amount()),
        format!("Total stake: {}", total),
        format!("Owner:       {}", record.owner),
    ]
}

/// Render the detail page into `area`
pub fn render(
    f: &mut Frame,
    area: Rect,
    params: &RouteParams,
    store: &MixnodeStore,
    styles: &Styles,
    wide_min_width: u16,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let model = DetailModel::build(params, store);

    let slot_height = match model.slot {
        TableSlot::Empty => 0,
        TableSlot::Row(_) => 4,
        TableSlot::Loading(_) | TableSlot::Failed(_) => 1,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Length(slot_height), // Table slot
            Constraint::Length(6),           // Bond breakdown
            Constraint::Min(0),              // Stats + uptime
        ])
        .split(area);

    f.render_widget(Paragraph::new(model.title).style(styles.page_title()), chunks[0]);

    match &model.slot {
        TableSlot::Empty => {}
        TableSlot::Row(_) => {
            let rows = model.rows();
            render_mixnodes_table(f, &rows, None, chunks[1], " Mixnode ", styles);
        }
        TableSlot::Loading(id) => {
            let line = Line::from(Span::styled(format!("Loading mixnode {}…", id.short()), styles.muted()));
            f.render_widget(Paragraph::new(line), chunks[1]);
        }
        TableSlot::Failed(message) => {
            let line = Line::from(Span::styled(format!("Could not load mixnode: {}", message), styles.error()));
            f.render_widget(Paragraph::new(line), chunks[1]);
        }
    }

    let [bond, stats, uptime] = &model.cards;
    render_card(f, chunks[2], bond, styles);

    let direction = if area.width >= wide_min_width {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let bottom = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    render_card(f, bottom[0], stats, styles);
    render_card(f, bottom[1], uptime, styles);
}

fn render_card(f: &mut Frame, area: Rect, card: &CardContent, styles: &Styles) {
    let body = card.lines.iter().map(|line| Line::from(line.as_str())).collect();
    render_content_card(f, area, card.title, body, styles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::StaticSource;
    use crate::theme::{ColorMode, ThemeConfig};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn screen(params: &RouteParams, store: &MixnodeStore, width: u16) -> String {
        let theme = ThemeConfig::from_mode(ColorMode::Dark);
        let styles = Styles::new(&theme);
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), params, store, &styles, 100))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn card_titles(model: &DetailModel) -> Vec<&'static str> {
        model.cards.iter().map(|card| card.title).collect()
    }

    #[tokio::test]
    async fn test_no_row_before_fetch_resolves() {
        let source = Arc::new(StaticSource::new(vec![StaticSource::record("alpha")]));
        let mut store = MixnodeStore::new(source);
        let params = RouteParams::with_id(MixnodeId::from("alpha"));

        let model = DetailModel::build(&params, &store);
        assert_eq!(model.slot, TableSlot::Empty);
        assert!(model.rows().is_empty());

        store.request_mixnode(MixnodeId::from("alpha"));
        let model = DetailModel::build(&params, &store);
        assert!(matches!(model.slot, TableSlot::Loading(_)));
        assert!(model.rows().is_empty());
        assert_eq!(card_titles(&model), vec![BOND_BREAKDOWN, MIXNODE_STATS, UPTIME_STORY]);

        let text = screen(&params, &store, 120);
        assert!(text.contains(TITLE));
        assert!(text.contains(BOND_BREAKDOWN));
        assert!(text.contains(MIXNODE_STATS));
        assert!(text.contains(UPTIME_STORY));
        assert!(!text.contains("Identity"));
    }

    #[tokio::test]
    async fn test_single_row_after_fetch() {
        let source = Arc::new(StaticSource::new(vec![StaticSource::record("alpha")]));
        let mut store = MixnodeStore::new(source);
        let params = RouteParams::with_id(MixnodeId::from("alpha"));

        store.request_mixnode(MixnodeId::from("alpha"));
        let event = store.next_event().await.unwrap();
        store.apply(event);

        let model = DetailModel::build(&params, &store);
        assert_eq!(model.rows(), vec![&StaticSource::record("alpha")]);
        assert!(model.cards[0].lines[0].contains("100.000000 NYM"));

        let text = screen(&params, &store, 120);
        assert!(text.contains("Identity"));
        assert_eq!(text.matches("alpha.mixnet.example").count(), 1);
        assert!(text.contains(UPTIME_STORY));
    }

    #[tokio::test]
    async fn test_failure_shows_message() {
        let source = Arc::new(StaticSource::new(vec![]).failing(MixnodeId::from("broken")));
        let mut store = MixnodeStore::new(source);
        let params = RouteParams::with_id(MixnodeId::from("broken"));

        store.request_mixnode(MixnodeId::from("broken"));
        let event = store.next_event().await.unwrap();
        store.apply(event);

        let model = DetailModel::build(&params, &store);
        assert!(matches!(model.slot, TableSlot::Failed(_)));
        assert!(model.rows().is_empty());
        assert!(screen(&params, &store, 120).contains("Could not load mixnode"));
    }

    #[test]
    fn test_absent_id_renders_cards_only() {
        let store = MixnodeStore::new(Arc::new(StaticSource::new(vec![])));
        let params = RouteParams::default();

        let model = DetailModel::build(&params, &store);
        assert_eq!(model.slot, TableSlot::Empty);

        let text = screen(&params, &store, 60);
        assert!(text.contains(BOND_BREAKDOWN));
        assert!(text.contains(MIXNODE_STATS));
        assert!(text.contains(UPTIME_STORY));
    }
}
