use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};

use crate::config::{save_last_pattern_to, Config};
use crate::cookie::{Column, CookieError};
use crate::session::{ExtractionSession, Source};
use crate::ui::components::{
    theme, CookieTable, CookieTableState, Footer, FooterContext, NoticeDialog,
    NoticeDialogState, PathDialog, PathDialogState, PathPurpose, SourcePane, StatusLine,
    TextInputState,
};
use crate::ui::events::{Focus, Status};
use crate::ui::paste::{copy_to_clipboard, pasted_file, read_clipboard_text};
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Where the remembered pattern is written, if anywhere
    config_file: Option<PathBuf>,
    session: ExtractionSession,
    focus: Focus,
    pattern: TextInputState,
    table: CookieTableState,
    path_dialog: PathDialogState,
    notice: NoticeDialogState,
    status: Status,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = ExtractionSession::new().with_export_format(config.export_format);
        let pattern = config
            .initial_pattern()
            .map(TextInputState::with_value)
            .unwrap_or_default();

        Self {
            config,
            config_file: None,
            session,
            focus: Focus::Pattern,
            pattern,
            table: CookieTableState::new(),
            path_dialog: PathDialogState::new(),
            notice: NoticeDialogState::new(),
            status: Status::Empty,
            should_quit: false,
        }
    }

    /// Persist successful patterns to `path` when the config asks for it
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Load a file before the first frame. Failures are shown as a notice.
    pub fn preload_file(&mut self, path: &Path) {
        self.open_file(path);
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern.set(pattern);
    }

    pub fn session(&self) -> &ExtractionSession {
        &self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn pattern(&self) -> &str {
        self.pattern.value()
    }

    pub fn notice(&self) -> &NoticeDialogState {
        &self.notice
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();
        let mut guard = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(POLL_INTERVAL)? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }

    /// Apply one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste(text),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.notice.is_visible() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.notice.hide(),
                KeyCode::Char('d') => self.notice.toggle_details(),
                _ => {}
            }
            return;
        }

        if self.path_dialog.is_visible() {
            self.handle_path_dialog_key(key);
            return;
        }

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('o') => {
                    let initial = match self.session.source() {
                        Some(Source::File(path)) => path.display().to_string(),
                        _ => String::new(),
                    };
                    self.path_dialog.show(PathPurpose::Open, &initial);
                    return;
                }
                KeyCode::Char('s') => {
                    if self.session.has_rows() {
                        let initial = self.config.default_export_name.clone();
                        self.path_dialog.show(PathPurpose::Save, &initial);
                    } else {
                        self.show_error(&CookieError::NoData);
                    }
                    return;
                }
                KeyCode::Char('l') => {
                    self.session.clear();
                    self.table.reset(0);
                    self.status = Status::Info("Cleared cookie text".to_string());
                    return;
                }
                KeyCode::Char('v') => {
                    match read_clipboard_text() {
                        Ok(text) => self.handle_paste(text),
                        Err(e) => {
                            tracing::warn!(error = %e, "Clipboard read failed");
                            self.status = Status::Error(e.to_string());
                        }
                    }
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Pattern => self.handle_pattern_key(key),
            Focus::Table => self.handle_table_key(key),
        }
    }

    fn handle_pattern_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.extract();
            return;
        }
        edit_text(&mut self.pattern, key);
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let len = self.session.rows().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(len),
            KeyCode::PageUp => self.table.page_up(len),
            KeyCode::PageDown => self.table.page_down(len),
            KeyCode::Home | KeyCode::Char('g') => self.table.select_first(len),
            KeyCode::End | KeyCode::Char('G') => self.table.select_last(len),
            KeyCode::Char('y') => self.copy_selected_value(),
            KeyCode::Enter => self.show_selected_details(),
            _ => {}
        }
    }

    fn handle_path_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.path_dialog.hide(),
            KeyCode::Enter => self.confirm_path_dialog(),
            _ => {
                edit_text(&mut self.path_dialog.text, key);
                self.path_dialog.error = None;
            }
        }
    }

    fn confirm_path_dialog(&mut self) {
        let Some(path) = self.path_dialog.expanded_path() else {
            self.path_dialog.set_error("Enter a file path");
            return;
        };

        match self.path_dialog.purpose {
            PathPurpose::Open => {
                if !path.exists() {
                    self.path_dialog
                        .set_error(format!("No such file: {}", path.display()));
                    return;
                }
                self.path_dialog.hide();
                self.open_file(&path);
            }
            PathPurpose::Save => {
                self.path_dialog.hide();
                self.save(&path);
            }
        }
    }

    fn handle_paste(&mut self, text: String) {
        if self.notice.is_visible() {
            return;
        }
        if self.path_dialog.is_visible() {
            self.path_dialog.text.insert_str(text.trim());
            self.path_dialog.error = None;
            return;
        }

        if let Some(path) = pasted_file(&text) {
            self.open_file(&path);
            return;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let looks_like_json = trimmed.starts_with('[') || trimmed.starts_with('{');
        if self.focus == Focus::Pattern && !trimmed.contains('\n') && !looks_like_json {
            self.pattern.insert_str(trimmed);
            return;
        }

        self.session.load_text(text);
        self.after_load();
    }

    fn open_file(&mut self, path: &Path) {
        match self.session.load_file(path) {
            Ok(()) => self.after_load(),
            Err(e) => self.show_error(&e),
        }
    }

    fn after_load(&mut self) {
        self.table.reset(0);
        self.focus = Focus::Pattern;
        let label = self
            .session
            .source()
            .map(|s| s.label())
            .unwrap_or_default();
        self.status = Status::Info(format!(
            "Loaded {} bytes from {}. Enter a domain pattern and press Enter.",
            self.session.text().len(),
            label
        ));
    }

    fn extract(&mut self) {
        let pattern = self.pattern.value().to_string();
        match self.session.extract(&pattern) {
            Ok(matched) => {
                self.table.reset(matched);
                self.status = Status::Success(format!(
                    "{} of {} cookies matched",
                    matched,
                    self.session.loaded_records().len()
                ));
                if matched > 0 {
                    self.focus = Focus::Table;
                }
                self.remember_pattern();
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn remember_pattern(&mut self) {
        if !self.config.remember_pattern {
            return;
        }
        let Some(pattern) = self.session.pattern().map(str::to_string) else {
            return;
        };
        if let Some(file) = &self.config_file {
            if let Err(e) = save_last_pattern_to(file, &pattern) {
                tracing::warn!(error = %e, path = %file.display(), "Failed to save last pattern");
            }
        }
        self.config.last_pattern = Some(pattern);
    }

    fn save(&mut self, path: &Path) {
        match self.session.save(path) {
            Ok(count) => {
                tracing::info!(path = %path.display(), count, "Saved cookies");
                let message = format!("Saved {} cookies to {}", count, path.display());
                self.notice.show_info("Saved", message.clone());
                self.status = Status::Success(message);
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn copy_selected_value(&mut self) {
        let Some(row) = self.table.selected().and_then(|i| self.session.rows().get(i)) else {
            return;
        };
        let name = row.cell(Column::Name).to_string();
        match copy_to_clipboard(row.cell(Column::Value)) {
            Ok(()) => self.status = Status::Success(format!("Copied value of {}", name)),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                self.status = Status::Error(e.to_string());
            }
        }
    }

    fn show_selected_details(&mut self) {
        let Some(row) = self.table.selected().and_then(|i| self.session.rows().get(i)) else {
            return;
        };
        let details = Column::ALL
            .iter()
            .map(|column| format!("{}: {}", column.title(), row.cell(*column)))
            .collect::<Vec<_>>()
            .join("\n");
        let mut message = format!(
            "{} on {}",
            row.cell(Column::Name),
            row.cell(Column::Domain)
        );
        if row.record().is_session() {
            message.push_str(" (session cookie)");
        }
        self.notice.show_info_with_details("Cookie", message, details);
    }

    fn show_error(&mut self, error: &CookieError) {
        tracing::warn!(kind = ?error.kind(), error = %error, "Action failed");
        self.status = Status::Error(error.title().to_string());
        self.notice.show_error(error.title(), &error.to_string());
    }

    fn footer_context(&self) -> FooterContext {
        if self.notice.is_visible() || self.path_dialog.is_visible() {
            FooterContext::Dialog
        } else {
            match self.focus {
                Focus::Pattern => FooterContext::Pattern,
                Focus::Table => FooterContext::Table,
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.area();
        let dialog_open = self.notice.is_visible() || self.path_dialog.is_visible();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(5), // Source pane
                Constraint::Length(3), // Pattern input
                Constraint::Min(4),    // Result table
                Constraint::Length(1), // Status
                Constraint::Length(1), // Footer
            ])
            .split(size);

        self.draw_title(chunks[0], f);

        SourcePane::new(
            self.session.source(),
            self.session.text(),
            self.session
                .pattern()
                .map(|_| self.session.loaded_records().len()),
        )
        .render(chunks[1], f.buffer_mut());

        self.draw_pattern(chunks[2], f, !dialog_open && self.focus == Focus::Pattern);

        let title = match self.session.pattern() {
            Some(pattern) => format!("Matches for /{}/ ({})", pattern, self.session.rows().len()),
            None => "Matches".to_string(),
        };
        let table = CookieTable::new(self.session.rows(), title)
            .focused(!dialog_open && self.focus == Focus::Table);
        f.render_stateful_widget(table, chunks[3], &mut self.table);

        let status = match &self.status {
            Status::Empty => StatusLine::Empty,
            Status::Info(msg) => StatusLine::Info(msg),
            Status::Success(msg) => StatusLine::Success(msg),
            Status::Error(msg) => StatusLine::Error(msg),
        };
        status.render(chunks[4], f.buffer_mut());

        Footer::for_context(self.footer_context()).render(chunks[5], f.buffer_mut());

        PathDialog::new(&self.path_dialog).render(size, f.buffer_mut());
        NoticeDialog::new(&self.notice).render(size, f.buffer_mut());
    }

    fn draw_title(&self, area: Rect, f: &mut Frame) {
        let line = Line::from(vec![
            Span::styled(
                " Cookie Extractor ",
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "filter exported cookies by domain",
                Style::default().fg(theme::TEXT_FAINT),
            ),
        ]);
        Paragraph::new(line).render(area, f.buffer_mut());
    }

    fn draw_pattern(&self, area: Rect, f: &mut Frame, focused: bool) {
        let border = if focused {
            theme::BORDER_FOCUSED
        } else {
            theme::BORDER_DEFAULT
        };
        let block = Block::default()
            .title(" Domain pattern (regex, case-insensitive) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, f.buffer_mut());

        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        self.pattern.render(
            inner,
            f.buffer_mut(),
            Style::default().fg(theme::TEXT_BRIGHT),
            Some((r"e.g. twitter|x\.com", Style::default().fg(theme::TEXT_MUTED))),
            focused,
        );
    }
}

/// Line-editing keys shared by the pattern field and the path prompt
fn edit_text(input: &mut TextInputState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => input.move_start(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char('u') if ctrl => input.delete_to_start(),
        KeyCode::Char('k') if ctrl => input.delete_to_end(),
        KeyCode::Char('w') if ctrl => input.delete_word(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            input.insert_char(c)
        }
        KeyCode::Backspace => input.delete_char(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
