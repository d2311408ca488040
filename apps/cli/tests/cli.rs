use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs `wmon` from an empty directory so no stray `monitor.*` file is picked up.
fn wmon(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wmon"));
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("WMON__VARIANT")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn relevant_prints_a_boolean() {
    let dir = TempDir::new().unwrap();
    wmon(&dir).args(["relevant", "ASEAN summit"]).assert().success().stdout("true\n");
    wmon(&dir)
        .args(["relevant", "China announces", "new space mission"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn locate_accepts_negative_coordinates() {
    let dir = TempDir::new().unwrap();
    wmon(&dir).args(["locate", "11.5564", "104.9282"]).assert().success().stdout("true\n");
    wmon(&dir).args(["locate", "0", "0"]).assert().success().stdout("false\n");
    wmon(&dir).args(["locate", "-33.86", "151.2"]).assert().success().stdout("false\n");
}

#[test]
fn filter_echoes_relevant_lines() {
    let dir = TempDir::new().unwrap();
    wmon(&dir)
        .arg("filter")
        .write_stdin("Mekong floods\tthousands displaced\nMarkets rally\tstocks up\n")
        .assert()
        .success()
        .stdout("Mekong floods\tthousands displaced\n");
}

#[test]
fn show_prints_the_descriptor_as_json() {
    let dir = TempDir::new().unwrap();
    let output = wmon(&dir).arg("show").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "cambodia");
    assert_eq!(value["displayName"], "Cambodia Monitor");
}

#[test]
fn validate_reports_a_consistent_catalog() {
    let dir = TempDir::new().unwrap();
    wmon(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cambodia: ok"));
}

#[test]
fn unknown_variant_fails() {
    let dir = TempDir::new().unwrap();
    wmon(&dir)
        .args(["--variant", "atlantis", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown variant `atlantis`"));
}

#[test]
fn config_file_overrides_features_and_silences_logs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[features]\nshow_crypto_markets = true\n\n[logging]\nconsole = false\n")
        .unwrap();

    let output = wmon(&dir).arg("--config").arg(&path).arg("show").output().unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["features"]["showCryptoMarkets"], true);
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    wmon(&dir)
        .args(["--config", "does-not-exist.toml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn filter_keeps_going_past_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let mut input = b"Mekong floods\t\n".to_vec();
    input.extend_from_slice(b"bad \xff line\t\n");
    input.extend_from_slice(b"ASEAN summit\t\n");

    wmon(&dir)
        .arg("filter")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("Mekong floods\t\nASEAN summit\t\n");
}

#[test]
fn variants_lists_even_when_the_configured_one_is_unknown() {
    let dir = TempDir::new().unwrap();
    wmon(&dir)
        .args(["--variant", "atlantis", "variants"])
        .assert()
        .success()
        .stdout("  cambodia\tCambodia Monitor\n")
        .stderr(predicate::str::contains("not registered"));
}

#[test]
fn configuration_loading_is_logged_once_the_logger_is_up() {
    let dir = TempDir::new().unwrap();
    wmon(&dir)
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded"));
}
