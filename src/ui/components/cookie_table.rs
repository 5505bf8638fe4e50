//! Result table for matched cookies

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{
    BORDER_DEFAULT, BORDER_FOCUSED, HEADER_BG, SELECTED_BG, TEXT_BRIGHT, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::cookie::{Column, DisplayRow};

/// Widest a column may grow before its cells are truncated
const MAX_COLUMN_WIDTH: usize = 36;

/// Selection and scroll position of the result table
#[derive(Debug, Clone, Default)]
pub struct CookieTableState {
    table: TableState,
    /// Visible body rows from the last render, used for paging
    page_size: usize,
}

impl CookieTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset after the rows were replaced
    pub fn reset(&mut self, len: usize) {
        self.table = TableState::default();
        if len > 0 {
            self.table.select(Some(0));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let current = self.table.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.table.select(Some(next as usize));
    }

    pub fn select_next(&mut self, len: usize) {
        self.move_by(1, len);
    }

    pub fn select_prev(&mut self, len: usize) {
        self.move_by(-1, len);
    }

    pub fn page_down(&mut self, len: usize) {
        self.move_by(self.page_size.max(1) as isize, len);
    }

    pub fn page_up(&mut self, len: usize) {
        self.move_by(-(self.page_size.max(1) as isize), len);
    }

    pub fn select_first(&mut self, len: usize) {
        self.table.select((len > 0).then_some(0));
    }

    pub fn select_last(&mut self, len: usize) {
        self.table.select(len.checked_sub(1));
    }
}

/// Table widget over the displayed rows
pub struct CookieTable<'a> {
    rows: &'a [DisplayRow],
    title: String,
    focused: bool,
}

impl<'a> CookieTable<'a> {
    pub fn new(rows: &'a [DisplayRow], title: impl Into<String>) -> Self {
        Self {
            rows,
            title: title.into(),
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn column_widths(&self) -> Vec<Constraint> {
        Column::ALL
            .iter()
            .map(|column| {
                let content = self
                    .rows
                    .iter()
                    .map(|row| display_text(row.cell(*column)).width())
                    .max()
                    .unwrap_or(0);
                let width = content.max(column.title().width()).min(MAX_COLUMN_WIDTH);
                Constraint::Length(width as u16)
            })
            .collect()
    }
}

impl StatefulWidget for CookieTable<'_> {
    type State = CookieTableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        if self.rows.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::styled(
                " No matches yet. Load cookies, enter a domain pattern and press Enter.",
                Style::default().fg(TEXT_MUTED),
            ))
            .render(inner, buf);
            return;
        }

        let header = Row::new(Column::ALL.iter().map(|c| Cell::from(c.title()))).style(
            Style::default()
                .fg(TEXT_BRIGHT)
                .bg(HEADER_BG)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.rows.iter().map(|row| {
            Row::new(row.cells().iter().map(|cell| {
                Cell::from(truncate(&display_text(cell), MAX_COLUMN_WIDTH))
            }))
            .style(Style::default().fg(TEXT_PRIMARY))
        });

        // borders and header take three rows
        state.page_size = area.height.saturating_sub(3) as usize;

        let table = Table::new(rows, self.column_widths())
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(SELECTED_BG).fg(TEXT_BRIGHT))
            .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, &mut state.table);
    }
}

/// Flatten control characters so a cell stays on one line
fn display_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Cut `text` to `max` display columns, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
