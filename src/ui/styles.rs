// UI Styles
// ratatui styles derived from the active theme

use ratatui::style::{Modifier, Style};

use crate::theme::ThemeConfig;

/// Application styles for one theme
pub struct Styles<'a> {
    theme: &'a ThemeConfig,
}

impl<'a> Styles<'a> {
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self { theme }
    }

    // === Baseline ===

    /// Full-frame reset painted before anything else
    pub fn base(&self) -> Style {
        Style::default()
            .bg(self.theme.palette.background)
            .fg(self.theme.palette.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.theme.palette.text_secondary)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.theme.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    // === Header / Footer ===

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.theme.palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.theme.palette.text_secondary)
    }

    pub fn page_title(&self) -> Style {
        self.bold_if_heavy(Style::default().fg(self.theme.palette.text_primary))
    }

    // === Tables ===

    pub fn table_header(&self) -> Style {
        self.bold_if_heavy(Style::default().fg(self.theme.palette.primary))
    }

    pub fn row_selected(&self) -> Style {
        Style::default()
            .bg(self.theme.palette.selection_bg)
            .fg(self.theme.palette.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_normal(&self) -> Style {
        Style::default().fg(self.theme.palette.text_primary)
    }

    // === Cards ===

    pub fn card_title(&self) -> Style {
        let style = Style::default().fg(self.theme.palette.text_primary);
        if self.theme.components.card_header_title.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn card_body(&self) -> Style {
        Style::default()
            .bg(self.theme.palette.surface)
            .fg(self.theme.palette.text_primary)
    }

    // === Border Styles ===

    pub fn border(&self) -> Style {
        Style::default().fg(self.theme.palette.divider)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.theme.palette.primary)
    }

    /// Terminals only have bold, so heavy weights map onto it
    fn bold_if_heavy(&self, style: Style) -> Style {
        if self.theme.typography.font_weight_bold >= 600 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
