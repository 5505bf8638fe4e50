//! Integration tests for the parse → filter → display → export pipeline

use super::common::fixtures::{CookieDir, SAMPLE_COOKIES};
use cookie_extractor::cookie::{export_with, to_display_rows};
use cookie_extractor::{
    export, filter, parse, CookieRecord, ErrorKind, ExportFormat, ExtractionSession,
};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = CookieRecord> {
    (
        (
            "[a-zA-Z0-9.-]{0,16}",
            "\\PC{0,12}",
            "\\PC{0,24}",
            prop_oneof![Just(0.0f64), 1.0f64..4.0e9],
            any::<bool>(),
        ),
        (
            "\\PC{0,8}",
            prop_oneof![
                Just(String::new()),
                Just("lax".to_string()),
                Just("no_restriction".to_string()),
            ],
            any::<bool>(),
            any::<i64>(),
        ),
    )
        .prop_map(
            |((domain, name, value, expiration_date, http_only), (path, same_site, secure, id))| {
                CookieRecord {
                    domain,
                    name,
                    value,
                    expiration_date,
                    http_only,
                    path,
                    same_site,
                    secure,
                    id,
                }
            },
        )
}

proptest! {
    /// Exporting what was displayed and parsing it again yields the records
    /// that were parsed in the first place.
    #[test]
    fn prop_export_round_trips(records in prop::collection::vec(record_strategy(), 1..8)) {
        let raw = serde_json::to_string(&records).unwrap();
        let parsed = parse(&raw).unwrap();
        prop_assert_eq!(&parsed, &records);

        for format in [ExportFormat::Pretty, ExportFormat::Compact] {
            let exported = export_with(&to_display_rows(&parsed), format).unwrap();
            prop_assert_eq!(&parse(&exported).unwrap(), &records);
        }
    }

    /// A literal pattern keeps exactly the records whose domain contains it,
    /// ignoring case, in input order.
    #[test]
    fn prop_filter_matches_case_insensitive_substring(
        domains in prop::collection::vec("[abcABC.]{0,8}", 0..12),
        needle in "[abc]{1,2}",
    ) {
        let records: Vec<CookieRecord> = domains
            .iter()
            .map(|domain| CookieRecord { domain: domain.clone(), ..CookieRecord::default() })
            .collect();

        let kept = filter(&records, &needle).unwrap();
        let expected: Vec<CookieRecord> = records
            .iter()
            .filter(|r| r.domain.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        prop_assert_eq!(kept, expected);
    }
}

#[test]
fn test_sample_export_snapshot() {
    let records = parse(SAMPLE_COOKIES).unwrap();
    let kept = filter(&records, r"^x\.com$").unwrap();
    let json = export(&to_display_rows(&kept)).unwrap();

    insta::assert_snapshot!(json.trim_end(), @r#"
    [
      {
        "domain": "x.com",
        "name": "ct0",
        "value": "café",
        "expirationDate": 0.0,
        "httpOnly": false,
        "path": "/",
        "sameSite": "",
        "secure": false,
        "id": 0
      }
    ]
    "#);
}

#[test]
fn test_fractional_timestamp_survives_display() {
    let records = parse(SAMPLE_COOKIES).unwrap();
    let kept = filter(&records, "twitter").unwrap();
    let rows = to_display_rows(&kept);

    let json = export_with(&rows, ExportFormat::Compact).unwrap();
    assert!(json.contains(r#""expirationDate":1735689600.5"#));
    assert!(json.contains(r#""httpOnly":true"#));
    assert!(!json.contains("hostOnly"));
    assert!(!json.contains("storeId"));
}

#[test]
fn test_duplicates_are_kept_in_order() {
    let raw = r#"[
        {"domain": "a.com", "name": "1"},
        {"domain": "b.com", "name": "2"},
        {"domain": "a.com", "name": "1"}
    ]"#;
    let records = parse(raw).unwrap();
    let kept = filter(&records, "A.COM").unwrap();
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0], kept[1]);
}

#[test]
fn test_session_file_flow() {
    let fixture = CookieDir::new();
    let output = fixture.output("filtered.json");

    let mut session = ExtractionSession::new();
    session.load_file(&fixture.input).unwrap();
    assert_eq!(session.extract("google|x\\.com").unwrap(), 2);
    assert_eq!(session.save(&output).unwrap(), 2);

    let saved = parse(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let domains: Vec<&str> = saved.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(domains, [".google.com", "x.com"]);
    assert_eq!(saved[0].path, "/");
    assert_eq!(saved[1].value, "café");
}

#[test]
fn test_failed_extract_keeps_previous_results() {
    let fixture = CookieDir::new();
    let mut session = ExtractionSession::new();
    session.load_file(&fixture.input).unwrap();
    session.extract("twitter").unwrap();

    let err = session.extract("twitter(").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPattern);
    assert_eq!(session.rows().len(), 1);
    assert_eq!(session.pattern(), Some("twitter"));

    let err = session.extract("   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingPattern);
    assert_eq!(session.rows().len(), 1);
}

#[test]
fn test_malformed_files_report_parse_errors() {
    for contents in ["{\"domain\": \"a.com\"}", "[1, 2]", "[{\"domain\": ", "[{\"id\": \"abc\"}]"] {
        let fixture = CookieDir::with_contents(contents);
        let mut session = ExtractionSession::new();
        session.load_file(&fixture.input).unwrap();
        let err = session.extract("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "contents: {contents}");
    }
}
