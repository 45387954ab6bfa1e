//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("embedkit")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("youtube.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"data-videoid="TVakXOkE2G4""#));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("twitter.html")).unwrap();

    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("<amp-twitter"));
}

#[test]
fn test_cli_turbo_dialect() {
    cmd()
        .args(["-d", "turbo", &get_fixture_path("iframe.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<iframe "));
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("vk_widget.html")])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["platform"], "vkontakte");
    assert_eq!(json["post"]["owner_id"], -175249128);
    assert_eq!(json["post"]["post_id"], 1156);
}

#[test]
fn test_cli_defaults_flag() {
    cmd()
        .args(["--defaults", &get_fixture_path("instagram.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"width="400" height="400""#));
}

#[test]
fn test_cli_unrecognized_input() {
    cmd()
        .arg(get_fixture_path("empty_src.html"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unrecognized-input"));
}

#[test]
fn test_cli_single_platform_reason() {
    cmd()
        .args(["-p", "vk", &get_fixture_path("vk_mismatch.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("consistency-violation"));
}

#[test]
fn test_cli_playbuzz_turbo_unsupported() {
    cmd()
        .args(["-d", "turbo", "-p", "playbuzz", &get_fixture_path("playbuzz.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported-dialect"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.html");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("playbuzz.html"))
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("<amp-playbuzz"));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_invalid_dialect() {
    cmd()
        .args(["-d", "rss", &get_fixture_path("youtube.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("youtube.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Platform"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("embedkit"));
}

#[test]
fn test_cli_missing_input() {
    cmd().assert().failure();
}
