//! Integration tests for the terminal app, rendered with TestBackend

use super::common::fixtures::{CookieDir, SAMPLE_COOKIES};
use super::common::terminal::{
    buffer_to_string, create_test_terminal_sized, line_containing, render_app,
};
use cookie_extractor::cookie::to_display_rows;
use cookie_extractor::ui::components::{CookieTable, CookieTableState};
use cookie_extractor::{parse, App, Config};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_empty_app_shows_hints() {
    let mut app = App::new(Config::default());
    let screen = render_app(&mut app, 100, 24);

    assert!(screen.contains("Cookie Extractor"));
    assert!(screen.contains("Paste cookie JSON"));
    assert!(screen.contains("No matches yet"));
    assert!(screen.contains("extract"));
    assert!(screen.contains(r"e.g. twitter|x\.com"));
}

#[test]
fn test_configured_pattern_is_prefilled() {
    let config = Config {
        default_pattern: Some("google".to_string()),
        ..Config::default()
    };
    let mut app = App::new(config);
    assert_eq!(app.pattern(), "google");

    let screen = render_app(&mut app, 100, 24);
    assert!(screen.contains("google"));
}

#[test]
fn test_extract_renders_result_table() {
    let fixture = CookieDir::new();
    let mut app = App::new(Config::default());
    app.preload_file(&fixture.input);
    type_text(&mut app, "twitter|x\\.com");
    press(&mut app, KeyCode::Enter);

    let screen = render_app(&mut app, 160, 30);
    assert!(screen.contains("cookies.json (3 cookies)"));
    assert!(screen.contains(r"Matches for /twitter|x\.com/ (2)"));
    assert!(screen.contains("2 of 3 cookies matched"));

    let header = line_containing(&screen, "HttpOnly").expect("header row");
    for title in ["Domain", "Name", "Value", "Expires", "Path", "SameSite", "Secure", "ID"] {
        assert!(header.contains(title), "missing column {title}");
    }

    let first = line_containing(&screen, "auth_token").expect("twitter row");
    assert!(first.contains("▶"));
    assert!(first.contains(".twitter.com"));
    assert!(first.contains("True"));
    assert!(first.contains("no_restriction"));

    let second = line_containing(&screen, "ct0").expect("x.com row");
    assert!(second.contains("café"));
    assert!(second.contains("False"));
    assert!(!screen.contains("NID"));
}

#[test]
fn test_error_dialog_is_rendered() {
    let mut app = App::new(Config::default());
    app.handle_event(Event::Paste(SAMPLE_COOKIES.to_string()));
    type_text(&mut app, "twitter(");
    press(&mut app, KeyCode::Enter);

    let screen = render_app(&mut app, 100, 30);
    assert!(screen.contains("Invalid Domain Pattern"));
    assert!(screen.contains("Dismiss"));

    press(&mut app, KeyCode::Enter);
    let screen = render_app(&mut app, 100, 30);
    assert!(!screen.contains("Dismiss"));
}

#[test]
fn test_cookie_details_dialog() {
    let mut app = App::new(Config::default());
    app.handle_event(Event::Paste(SAMPLE_COOKIES.to_string()));
    type_text(&mut app, "google");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    assert!(app.notice().is_visible());
    let details = app.notice().details.as_deref().unwrap();
    assert!(details.contains("Domain: .google.com"));
    assert!(details.contains("Path: /"));
    assert!(details.contains("ID: 2"));

    let screen = render_app(&mut app, 100, 40);
    assert!(screen.contains("NID on .google.com"));
}

#[test]
fn test_save_dialog_prefills_default_name() {
    let config = Config {
        default_export_name: "mine.json".to_string(),
        ..Config::default()
    };
    let mut app = App::new(config);
    app.handle_event(Event::Paste(SAMPLE_COOKIES.to_string()));
    type_text(&mut app, "google");
    press(&mut app, KeyCode::Enter);
    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char('s'),
        KeyModifiers::CONTROL,
    )));

    let screen = render_app(&mut app, 100, 30);
    assert!(screen.contains("Save Matches"));
    assert!(screen.contains("mine.json"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = App::new(Config::default());
    app.handle_event(Event::Paste(SAMPLE_COOKIES.to_string()));
    type_text(&mut app, "com");
    press(&mut app, KeyCode::Enter);

    for (width, height) in [(20, 8), (1, 1), (40, 12)] {
        render_app(&mut app, width, height);
    }
}

#[test]
fn test_result_table_snapshot() {
    let records =
        parse(r#"[{"domain": "a.io", "name": "sid", "value": "v1", "secure": true, "id": 7}]"#)
            .unwrap();
    let rows = to_display_rows(&records);
    let mut state = CookieTableState::new();
    state.reset(rows.len());

    let mut terminal = create_test_terminal_sized(72, 4);
    terminal
        .draw(|f| {
            let table = CookieTable::new(&rows, "Matches");
            f.render_stateful_widget(table, f.area(), &mut state);
        })
        .unwrap();

    insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
    ┌ Matches ─────────────────────────────────────────────────────────────┐
    │  Domain  Name  Value  Expires  HttpOnly  Path  SameSite  Secure  ID  │
    │▶ a.io    sid   v1              False     /               True    7   │
    └──────────────────────────────────────────────────────────────────────┘
    ");
}
