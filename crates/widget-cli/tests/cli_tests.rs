//! Integration tests for the widget CLI binary.
//!
//! These tests exercise the compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use widget_test_utils::TestTree;

/// Get a Command for the widget binary
fn widget_cmd() -> Command {
    let mut cmd = Command::cargo_bin("widget").expect("Failed to find widget binary");
    cmd.env_remove("WIDGET_ROOT");
    cmd
}

#[test]
fn test_help_output() {
    widget_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_resolve_prints_configuration() {
    let tree = TestTree::arctic();
    widget_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(tree.root())
        .args([
            "--config",
            r#"{"conf_uri": "conf/stations.json"}"#,
            "--type",
            "Observation",
            "--field",
            "Station",
            "--resource",
            "/data/obs/42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"Arctic Report""#))
        .stdout(predicate::str::contains(r#""name":"Observation:Station""#))
        .stdout(predicate::str::contains("&lt;h3&gt;%(name)&lt;/h3&gt;"));
}

#[test]
fn test_resolve_from_config_file() {
    let tree = TestTree::arctic();
    let config = tree.root().join("widget-config.json");
    fs::write(&config, r#"{"name": "n", "where": "__SELF", "lang": "__CONTENT_LOCALE"}"#).unwrap();

    widget_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(tree.root())
        .arg("--config-file")
        .arg(&config)
        .args(["--resource", "/data/obs/42", "--locale", "nb_NO"])
        .assert()
        .success()
        .stdout(r#"{"name":"n","where":"/data/obs/42","lang":"nb_NO"}"#.to_string() + "\n");
}

#[test]
fn test_resolve_error_text_and_strict_failure() {
    let tree = TestTree::arctic();
    widget_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(tree.root())
        .args(["--config", "not json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Configuration error: "));

    widget_cmd()
        .arg("resolve")
        .arg("--root")
        .arg(tree.root())
        .args(["--config", "not json", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_assets_json() {
    let tree = TestTree::arctic();
    let output = widget_cmd()
        .arg("assets")
        .arg("--root")
        .arg(tree.root())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["widget"], "StringSuggestWidget");
    assert_eq!(value["css"].as_array().unwrap().len(), 2);
    assert_eq!(
        value["js"][2],
        "/opencms/opencms/system/modules/no.npolar.opencms.widgets/resources/js/underscore-min.js"
    );
}

#[test]
fn test_classify() {
    widget_cmd()
        .args(["classify", "http://cdn.example.com/x.js", "js/local.js", "/abs/x.css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("external"))
        .stdout(predicate::str::contains("module-relative"))
        .stdout(predicate::str::contains(
            "/system/modules/no.npolar.opencms.widgets/resources/js/local.js",
        ))
        .stdout(predicate::str::contains("absolute"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    widget_cmd()
        .args(["assets", "--kind", "bogus"])
        .assert()
        .failure();
}
