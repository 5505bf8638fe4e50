//! Preview of the loaded cookie text

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::cookie_table::truncate;
use super::theme::{BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY};
use crate::session::Source;

pub struct SourcePane<'a> {
    source: Option<&'a Source>,
    text: &'a str,
    loaded_count: Option<usize>,
}

impl<'a> SourcePane<'a> {
    /// `loaded_count` is the number of parsed records, once known
    pub fn new(source: Option<&'a Source>, text: &'a str, loaded_count: Option<usize>) -> Self {
        Self {
            source,
            text,
            loaded_count,
        }
    }

    fn title(&self) -> String {
        match (self.source, self.loaded_count) {
            (None, _) => " Cookie text ".to_string(),
            (Some(source), Some(count)) => {
                format!(" Cookie text: {} ({} cookies) ", source.label(), count)
            }
            (Some(source), None) => format!(
                " Cookie text: {} ({} bytes) ",
                source.label(),
                self.text.len()
            ),
        }
    }
}

impl Widget for SourcePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.text.trim().is_empty() {
            Paragraph::new(Line::styled(
                " Paste cookie JSON, drop a file onto the terminal, or press Ctrl+O to open one.",
                Style::default().fg(TEXT_MUTED),
            ))
            .render(inner, buf);
            return;
        }

        let width = inner.width.saturating_sub(1) as usize;
        let lines: Vec<Line> = self
            .text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(inner.height as usize)
            .map(|line| Line::raw(format!(" {}", truncate(line.trim_end(), width))))
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(TEXT_PRIMARY))
            .render(inner, buf);
    }
}
