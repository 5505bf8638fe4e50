//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders the app into an in-memory buffer and flattens it to text for
//! assertions.

use cookie_extractor::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `app` and return the screen, one line per row
pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw frame");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, trimming trailing whitespace per line
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);

    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// First screen line containing `needle`
pub fn line_containing<'a>(screen: &'a str, needle: &str) -> Option<&'a str> {
    screen.lines().find(|line| line.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_to_string_trims_lines() {
        let mut terminal = create_test_terminal_sized(10, 2);
        terminal
            .draw(|f| f.render_widget(Paragraph::new("Hello\nWorld"), f.area()))
            .unwrap();

        assert_eq!(buffer_to_string(terminal.backend().buffer()), "Hello\nWorld");
    }

    #[test]
    fn test_line_containing() {
        let screen = "first\nsecond line\nthird";
        assert_eq!(line_containing(screen, "cond"), Some("second line"));
        assert_eq!(line_containing(screen, "missing"), None);
    }
}
