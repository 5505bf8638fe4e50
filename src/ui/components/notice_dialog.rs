//! Modal notice for errors and confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::dialog::{DialogFrame, InstructionBar};
use super::theme::{ACCENT_ERROR, ACCENT_PRIMARY, TEXT_MUTED};

const DIALOG_WIDTH: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Error,
    Info,
}

impl NoticeLevel {
    fn color(self) -> Color {
        match self {
            NoticeLevel::Error => ACCENT_ERROR,
            NoticeLevel::Info => ACCENT_PRIMARY,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoticeDialogState {
    pub visible: bool,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
    /// Extra text, hidden until toggled
    pub details: Option<String>,
    pub details_expanded: bool,
}

impl NoticeDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an error. A multi-line message keeps its first line as the
    /// summary and moves the rest into the details section.
    pub fn show_error(&mut self, title: impl Into<String>, message: &str) {
        match message.split_once('\n') {
            Some((summary, rest)) => self.show(
                NoticeLevel::Error,
                title,
                summary.trim_end(),
                Some(rest.to_string()),
            ),
            None => self.show(NoticeLevel::Error, title, message, None),
        }
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(NoticeLevel::Info, title, message, None);
    }

    pub fn show_info_with_details(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.show(NoticeLevel::Info, title, message, Some(details.into()));
        self.details_expanded = true;
    }

    fn show(
        &mut self,
        level: NoticeLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<String>,
    ) {
        self.visible = true;
        self.level = level;
        self.title = title.into();
        self.message = message.into();
        self.details = details;
        self.details_expanded = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.details_expanded = false;
    }

    pub fn toggle_details(&mut self) {
        if self.details.is_some() {
            self.details_expanded = !self.details_expanded;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

pub struct NoticeDialog<'a> {
    state: &'a NoticeDialogState,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(state: &'a NoticeDialogState) -> Self {
        Self { state }
    }

    fn wrapped_lines(text: &str, width: u16) -> u16 {
        let available = width.saturating_sub(6).max(1) as usize;
        text.lines()
            .map(|line| line.width().div_ceil(available).max(1) as u16)
            .sum::<u16>()
            .max(1)
    }

    fn details_lines(&self) -> u16 {
        match (&self.state.details, self.state.details_expanded) {
            (Some(details), true) => Self::wrapped_lines(details, DIALOG_WIDTH),
            _ => 0,
        }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        // borders, padding, button and instructions take 8 rows
        let message_lines = Self::wrapped_lines(&self.state.message, DIALOG_WIDTH);
        let toggle_lines = u16::from(self.state.details.is_some());
        let details_lines = self.details_lines();
        let height = 8 + message_lines + toggle_lines + details_lines;

        let color = self.state.level.color();
        let inner = DialogFrame::new(&self.state.title, DIALOG_WIDTH, height)
            .border_color(color)
            .render(area, buf);
        if inner.height < 5 {
            return;
        }

        let bottom = inner.y + inner.height.saturating_sub(3);
        let mut y = inner.y + 1;

        let message_height = message_lines.min(bottom.saturating_sub(y));
        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), message_height), buf);
        y += message_height + 1;

        if let Some(details) = &self.state.details {
            if y < bottom {
                let toggle = if self.state.details_expanded {
                    "▼ Details"
                } else {
                    "▶ Details (press 'd' to show)"
                };
                Paragraph::new(Line::from(Span::styled(
                    toggle,
                    Style::default().fg(TEXT_MUTED),
                )))
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
                y += 1;
            }

            if self.state.details_expanded && y < bottom {
                let height = details_lines.min(bottom - y);
                Paragraph::new(details.as_str())
                    .style(Style::default().fg(TEXT_MUTED))
                    .wrap(Wrap { trim: false })
                    .render(
                        Rect::new(inner.x + 2, y, inner.width.saturating_sub(4), height),
                        buf,
                    );
            }
        }

        let button_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled("  OK  ", button_style)))
            .alignment(Alignment::Center)
            .render(Rect::new(inner.x, bottom + 1, inner.width, 1), buf);

        let instructions = if self.state.details.is_some() {
            InstructionBar::new(vec![("Enter/Esc", "Dismiss"), ("d", "Details")])
        } else {
            InstructionBar::new(vec![("Enter/Esc", "Dismiss")])
        };
        instructions.render(
            Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1),
            buf,
        );
    }
}
