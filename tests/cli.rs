//! Integration tests running the shakesearch binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn get_fixture_dir() -> PathBuf {
    FIXTURE_DIR.get_or_init(create_fixture_dir).clone()
}

fn create_fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("shakesearch_test_fixtures")
        .join(format!("test_{}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");

    fs::write(
        dir.join("completeworks.txt"),
        "The cat sat. The dog ran; the bird flew.",
    )
    .unwrap();
    fs::write(dir.join("config.json"), r#"{ "excerpt_radius": 0 }"#).unwrap();

    dir
}

fn shakesearch(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_shakesearch"))
        .args(args)
        .current_dir(get_fixture_dir())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run shakesearch")
}

#[test]
fn query_json_output() {
    let output = shakesearch(&["query", "--radius", "0", "--json", "the"]);
    assert!(output.status.success());

    let excerpts: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(excerpts, vec!["The cat sat.", " The dog ran;", " the bird flew."]);
}

#[test]
fn query_reads_radius_from_config() {
    let output = shakesearch(&["query", "--config", "config.json", "--json", "DOG"]);
    assert!(output.status.success());

    let excerpts: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(excerpts, vec![" The dog ran;"]);
}

#[test]
fn query_plain_output() {
    let output = shakesearch(&["query", "--radius", "0", "--no-color", "--limit", "1", "cat"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "4:The cat sat.\n");
}

#[test]
fn query_without_matches_prints_nothing() {
    let output = shakesearch(&["query", "--json", "unicorn"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn missing_corpus_is_fatal() {
    let output = shakesearch(&["query", "--corpus", "missing.txt", "the"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read corpus"));
}

#[test]
fn stats_reports_size() {
    let output = shakesearch(&["stats"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Corpus size:      40 bytes"));
}
