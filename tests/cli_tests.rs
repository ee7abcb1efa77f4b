//! Integration tests for the namesmith CLI
//!
//! Only offline subcommands are exercised here; `generate` needs the live
//! name registry and is covered by the library tests with a fake lookup.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Test helper to get the CLI binary
fn namesmith_cmd() -> Command {
    let mut cmd = Command::cargo_bin("namesmith").unwrap();
    for var in [
        "NAMESMITH_LOOKUP_URL",
        "CLICK_SERVICE_ID",
        "CLICK_MERCHANT_ID",
        "CLICK_MERCHANT_USER_ID",
        "BOT_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help() {
    namesmith_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("pay-link"));
}

#[test]
fn test_print_default_config() {
    namesmith_cmd()
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookup:"))
        .stdout(predicate::str::contains("names_content.php"))
        .stdout(predicate::str::contains("pools:"))
        .stdout(predicate::str::contains("payment:"));
}

#[test]
fn test_validate_config_accepts_valid_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("namesmith.yml");
    fs::write(
        &config_path,
        r#"
lookup:
  endpoint: "http://localhost:8080/names_content.php"
  timeout_secs: 3
pools:
  girls: ["Lola", "Nodira"]
  boys: ["Kamol", "Nodir"]
"#,
    )
    .unwrap();

    namesmith_cmd()
        .arg("validate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn test_validate_config_rejects_zero_timeout() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("broken.yml");
    fs::write(&config_path, "lookup:\n  timeout_secs: 0\n").unwrap();

    namesmith_cmd()
        .arg("validate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn test_rust_log_overrides_default_level() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("namesmith.yml");
    fs::write(&config_path, "lookup:\n  timeout_secs: 3\n").unwrap();

    namesmith_cmd()
        .arg("validate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("loading configuration file").not());

    namesmith_cmd()
        .env("RUST_LOG", "debug")
        .arg("validate-config")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("loading configuration file"));
}

#[test]
fn test_validate_config_requires_a_file() {
    namesmith_cmd().arg("validate-config").assert().failure();
}

#[test]
fn test_blueprints_table() {
    namesmith_cmd()
        .args(["blueprints", "--father", "Olim", "--mother", "Dildora"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Olbira"))
        .stdout(predicate::str::contains("Olirid"))
        .stdout(predicate::str::contains("Diim"));
}

#[test]
fn test_blueprints_json() {
    let output = namesmith_cmd()
        .args([
            "blueprints", "--father", "Olim", "--mother", "Dildora", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let blueprints: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let blueprints = blueprints.as_array().unwrap();
    assert_eq!(blueprints.len(), 4);
    assert_eq!(blueprints[0]["draft_name"], "Olbira");
    assert_eq!(blueprints[0]["confidence"], 95);
}

#[test]
fn test_blueprints_rejects_blank_names() {
    namesmith_cmd()
        .args(["blueprints", "--father", "  ", "--mother", "Dildora"])
        .assert()
        .failure();
}

#[test]
fn test_match_ranks_kamol_first() {
    let output = namesmith_cmd()
        .args(["match", "--prefix", "ka", "--suffix", "ol", "--gender", "boy"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let kamol = stdout.find("Kamol ").expect("Kamol listed");
    let kamoliddin = stdout.find("Kamoliddin").expect("Kamoliddin listed");
    assert!(kamol < kamoliddin);
    assert!(stdout.contains("90"));
}

#[test]
fn test_match_without_hits() {
    namesmith_cmd()
        .args(["match", "--prefix", "qq", "--gender", "girl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pool entry matches"));
}

#[test]
fn test_pay_link_rejects_out_of_range_amounts() {
    for amount in ["0", "-5", "0.4", "1e25"] {
        namesmith_cmd()
            .args(["pay-link", "--amount", amount, "--plan", "premium", "--user", "42"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("amount"));
    }
}

#[test]
fn test_pay_link_redirect() {
    namesmith_cmd()
        .args([
            "pay-link", "--amount", "150000.7", "--plan", "premium", "--user", "42",
        ])
        .env("CLICK_SERVICE_ID", "101")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://my.click.uz/services/pay?"))
        .stdout(predicate::str::contains("service_id=101"))
        .stdout(predicate::str::contains("amount=150000&"))
        .stdout(predicate::str::contains("transaction_param=42.premium"));
}

#[test]
fn test_pay_link_onetime() {
    namesmith_cmd()
        .args([
            "pay-link", "--amount", "99000", "--plan", "premium", "--user", "42", "--onetime",
            "--plan-code", "PRM",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("additional_param3=PRM"))
        .stdout(predicate::str::contains("param1=42"));
}

#[test]
fn test_plan_code_requires_onetime() {
    namesmith_cmd()
        .args([
            "pay-link", "--amount", "99000", "--plan", "premium", "--user", "42", "--plan-code",
            "PRM",
        ])
        .assert()
        .failure();
}
