//! Integration tests for the headless `extract` command

use super::common::fixtures::{CookieDir, SAMPLE_COOKIES};
use assert_cmd::Command;
use cookie_extractor::parse;
use predicates::prelude::*;

/// The binary with its data directory inside the fixture
fn extractor(fixture: &CookieDir) -> Command {
    let mut cmd = Command::cargo_bin("cookie-extractor").expect("binary builds");
    cmd.arg("--data-dir").arg(fixture.output("data"));
    cmd
}

#[test]
fn test_extract_to_stdout() {
    let fixture = CookieDir::new();
    let output = extractor(&fixture)
        .args(["extract", "--pattern", "TWITTER|x\\.com", "--input"])
        .arg(&fixture.input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = String::from_utf8(output).unwrap();
    assert!(json.starts_with("[\n  {\n    \"domain\": \".twitter.com\""));
    let records = parse(&json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].value, "café");
}

#[test]
fn test_extract_reads_stdin_and_compacts() {
    let fixture = CookieDir::new();
    extractor(&fixture)
        .args(["extract", "-p", "google", "--compact"])
        .write_stdin(SAMPLE_COOKIES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"[{"domain":".google.com","name":"NID""#))
        .stdout(predicate::str::contains("\"path\":\"/\""));
}

#[test]
fn test_extract_to_output_file() {
    let fixture = CookieDir::new();
    let out = fixture.output("filtered.json");

    extractor(&fixture)
        .args(["extract", "--pattern", "google", "--input"])
        .arg(&fixture.input)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let saved = parse(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "NID");
}

#[test]
fn test_extract_honours_config_format() {
    let fixture = CookieDir::new();
    let data = fixture.output("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("config.toml"), "[export]\npretty = false\n").unwrap();

    extractor(&fixture)
        .args(["extract", "--pattern", "google", "--input"])
        .arg(&fixture.input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"domain\""));
}

#[test]
fn test_malformed_json_fails() {
    let fixture = CookieDir::with_contents("[{\"domain\": ");
    extractor(&fixture)
        .args(["extract", "--pattern", "a", "--input"])
        .arg(&fixture.input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_invalid_pattern_fails() {
    let fixture = CookieDir::new();
    extractor(&fixture)
        .args(["extract", "--pattern", "twitter(", "--input"])
        .arg(&fixture.input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid regular expression"));
}

#[test]
fn test_no_matches_fails_without_writing() {
    let fixture = CookieDir::new();
    let out = fixture.output("filtered.json");

    extractor(&fixture)
        .args(["extract", "--pattern", "example\\.org", "--input"])
        .arg(&fixture.input)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matching cookies"));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_file_fails() {
    let fixture = CookieDir::new();
    extractor(&fixture)
        .args(["extract", "--pattern", "a", "--input"])
        .arg(fixture.output("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
