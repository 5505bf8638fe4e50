//! Path prompt used for opening cookie files and saving exports

use std::path::PathBuf;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::dialog::{DialogFrame, InstructionBar, StatusLine};
use super::text_input::TextInputState;
use super::theme::{TEXT_MUTED, TEXT_PRIMARY};
use crate::util::expand_home;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    Open,
    Save,
}

impl PathPurpose {
    fn title(self) -> &'static str {
        match self {
            PathPurpose::Open => "Open Cookie File",
            PathPurpose::Save => "Save Matches",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            PathPurpose::Open => "Path to a cookie JSON file:",
            PathPurpose::Save => "Write matching cookies to:",
        }
    }
}

/// State for the path prompt dialog
#[derive(Debug, Clone)]
pub struct PathDialogState {
    pub text: TextInputState,
    pub purpose: PathPurpose,
    pub visible: bool,
    /// Validation error message
    pub error: Option<String>,
}

impl Default for PathDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl PathDialogState {
    pub fn new() -> Self {
        Self {
            text: TextInputState::new(),
            purpose: PathPurpose::Open,
            visible: false,
            error: None,
        }
    }

    /// Show the dialog for `purpose`, pre-filled with `initial`
    pub fn show(&mut self, purpose: PathPurpose, initial: &str) {
        self.purpose = purpose;
        self.text.set(initial);
        self.visible = true;
        self.error = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn input(&self) -> &str {
        self.text.value()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// The entered path with `~` expanded, or `None` when blank
    pub fn expanded_path(&self) -> Option<PathBuf> {
        let input = self.text.value().trim();
        if input.is_empty() {
            None
        } else {
            Some(expand_home(input))
        }
    }
}

pub struct PathDialog<'a> {
    state: &'a PathDialogState,
}

impl<'a> PathDialog<'a> {
    pub fn new(state: &'a PathDialogState) -> Self {
        Self { state }
    }
}

impl Widget for PathDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let inner = DialogFrame::new(self.state.purpose.title(), 70, 9).render(area, buf);
        if inner.height < 5 {
            return;
        }

        let x = inner.x + 2;
        let width = inner.width.saturating_sub(4);

        Paragraph::new(Line::from(Span::styled(
            self.state.purpose.prompt(),
            Style::default().fg(TEXT_MUTED),
        )))
        .render(Rect::new(x, inner.y + 1, width, 1), buf);

        self.state.text.render(
            Rect::new(x, inner.y + 2, width, 1),
            buf,
            Style::default().fg(TEXT_PRIMARY),
            Some(("~/Downloads/cookies.json", Style::default().fg(TEXT_MUTED))),
            true,
        );

        let status = match &self.state.error {
            Some(error) => StatusLine::Error(error),
            None => StatusLine::Empty,
        };
        status.render(Rect::new(x, inner.y + 3, width, 1), buf);

        InstructionBar::new(vec![("Enter", "Confirm"), ("Esc", "Cancel")]).render(
            Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1),
            buf,
        );
    }
}
