//! Reusable dialog frame, instruction bar and status line

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::theme::{ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, TEXT_SECONDARY};

/// A centered dialog frame with title and border
pub struct DialogFrame<'a> {
    title: &'a str,
    width: u16,
    height: u16,
    border_color: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            width,
            height,
            border_color: ACCENT_PRIMARY,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Render the dialog frame and return the inner area for content
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let dialog_width = self.width.min(area.width.saturating_sub(4));
        let dialog_height = self.height.min(area.height.saturating_sub(2));

        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
            y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        inner
    }
}

/// An instruction bar showing keyboard shortcuts
pub struct InstructionBar<'a> {
    instructions: Vec<(&'a str, &'a str)>,
}

impl<'a> InstructionBar<'a> {
    pub fn new(instructions: Vec<(&'a str, &'a str)>) -> Self {
        Self { instructions }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, desc)) in self.instructions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(ACCENT_PRIMARY)));
            spans.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(TEXT_SECONDARY),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// A one-line message colored by outcome
pub enum StatusLine<'a> {
    Empty,
    Info(&'a str),
    Success(&'a str),
    Error(&'a str),
}

impl StatusLine<'_> {
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let line = match self {
            StatusLine::Empty => Line::default(),
            StatusLine::Info(msg) => Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(TEXT_SECONDARY),
            )),
            StatusLine::Success(msg) => Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(ACCENT_SUCCESS),
            )),
            StatusLine::Error(msg) => Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(ACCENT_ERROR),
            )),
        };

        Paragraph::new(line).render(area, buf);
    }
}
