//! Footer bar with context-dependent key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_MUTED, TEXT_SECONDARY};

/// Which set of hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterContext {
    Pattern,
    Table,
    Dialog,
}

pub struct Footer {
    hints: Vec<(&'static str, &'static str)>,
}

impl Footer {
    pub fn for_context(context: FooterContext) -> Self {
        let hints = match context {
            FooterContext::Pattern => vec![
                ("enter", "extract"),
                ("C-o", "open"),
                ("C-v", "paste"),
                ("C-s", "save"),
                ("tab", "table"),
                ("C-l", "clear"),
                ("C-q", "quit"),
            ],
            FooterContext::Table => vec![
                ("↑↓", "navigate"),
                ("enter", "details"),
                ("y", "copy value"),
                ("C-s", "save"),
                ("tab", "pattern"),
                ("C-q", "quit"),
            ],
            FooterContext::Dialog => vec![("enter", "confirm"), ("esc", "cancel")],
        };
        Self { hints }
    }

    pub fn hints(&self) -> &[(&'static str, &'static str)] {
        &self.hints
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            ));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(TEXT_MUTED),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(FOOTER_BG))
            .render(area, buf);
    }
}
