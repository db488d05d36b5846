// Content Card Component
// Titled, bordered panel holding a few lines of text

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::Styles;

/// Render a card with a header title and body lines
pub fn render_content_card(f: &mut Frame, area: Rect, title: &str, body: Vec<Line>, styles: &Styles) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border())
        .title(Span::styled(format!(" {} ", title), styles.card_title()))
        .padding(Padding::new(1, 1, 0, 0));

    let card = Paragraph::new(body)
        .style(styles.card_body())
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(card, area);
}
