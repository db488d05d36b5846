// Mixnodes Table Component
// Renders mixnode records as table rows

use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use super::Styles;
use crate::store::MixnodeRecord;

/// Column headers, in display order
pub const COLUMNS: [&str; 6] = ["Identity", "Host", "Location", "Layer", "Pledge", "Delegation"];

const WIDTHS: [Constraint; 6] = [
    Constraint::Length(14),
    Constraint::Min(16),
    Constraint::Min(12),
    Constraint::Length(5),
    Constraint::Length(22),
    Constraint::Length(22),
];

/// Display cells for one record, matching [`COLUMNS`]
pub fn mixnode_cells(record: &MixnodeRecord) -> [String; 6] {
    [
        record.id().short(),
        record.mix_node.host.clone(),
        record.country().to_string(),
        record.layer.to_string(),
        record.pledge_amount.display_amount(),
        record.total_delegation.display_amount(),
    ]
}

/// Render a table of mixnodes
///
/// `selected` highlights one row; the detail page passes `None`.
pub fn render_mixnodes_table(
    f: &mut Frame,
    records: &[&MixnodeRecord],
    selected: Option<usize>,
    area: Rect,
    title: &str,
    styles: &Styles,
) {
    let rows: Vec<Row> = records
        .iter()
        .map(|record| Row::new(mixnode_cells(record)).style(styles.row_normal()))
        .collect();

    let border_style = if selected.is_some() {
        styles.border_focused()
    } else {
        styles.border()
    };

    let table = Table::new(rows, WIDTHS)
        .header(Row::new(COLUMNS).style(styles.table_header()))
        .row_highlight_style(styles.row_selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(title.to_string(), styles.card_title())),
        );

    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::StaticSource;

    #[test]
    fn test_cells_follow_columns() {
        let record = StaticSource::record("alpha");
        let cells = mixnode_cells(&record);

        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], "alpha");
        assert_eq!(cells[1], "alpha.mixnet.example");
        assert_eq!(cells[2], "Nowhere");
        assert_eq!(cells[3], "1");
        assert_eq!(cells[4], "100.000000 NYM");
        assert_eq!(cells[5], "5.000000 NYM");
    }
}
