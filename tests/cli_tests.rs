//! CLI integration tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn peon_bin() -> Command {
    let mut cmd = Command::cargo_bin("peon-ping").expect("binary built");
    cmd.env_remove("PEON_PING_DIR")
        .env_remove("WINDSURF_PEON_DIR")
        .env_remove("PEON_PING_DEBUG");
    cmd
}

fn write_config(dir: &Path, json: &str) {
    fs::write(dir.join("config.json"), json).unwrap();
}

fn read_state(dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join(".state.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn help_output() {
    peon_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--hook"))
        .stdout(predicate::str::contains("--dir"));
}

#[test]
fn version_output() {
    peon_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("peon-ping"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_hook_exits_quietly() {
    let dir = tempdir().unwrap();

    peon_bin()
        .args(["--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn bad_arguments_exit_quietly() {
    peon_bin()
        .args(["--hook"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    peon_bin()
        .args(["--no-such-flag", "value"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_config_is_silent() {
    let dir = tempdir().unwrap();

    peon_bin()
        .args(["--hook", "pre_user_prompt", "--dir"])
        .arg(dir.path())
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(!dir.path().join(".state.json").exists());
}

#[test]
fn malformed_config_is_silent() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "{ \"hooks\": ");

    peon_bin()
        .args(["--hook", "pre_user_prompt", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn disabled_engine_writes_no_state() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "enabled": false, "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );

    peon_bin()
        .args(["--hook", "prompt", "--dir"])
        .arg(dir.path())
        .write_stdin(r#"{"agent_action_name":"pre_user_prompt"}"#)
        .assert()
        .success();

    assert!(!dir.path().join(".state.json").exists());
}

#[test]
fn inactive_hooks_write_no_state() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{
            "hooks": {
                "off": { "enabled": false, "categories": ["annoyed"] },
                "empty": { "categories": [] }
            }
        }"#,
    );

    for hook in ["off", "empty", "unknown"] {
        peon_bin()
            .args(["--hook", hook, "--dir"])
            .arg(dir.path())
            .assert()
            .success();
    }

    assert!(!dir.path().join(".state.json").exists());
}

#[test]
fn annoyed_only_hook_records_timestamp() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );

    peon_bin()
        .args(["--hook", "prompt", "--dir"])
        .arg(dir.path())
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let state = read_state(dir.path());
    assert_eq!(state["prompt_timestamps"].as_array().unwrap().len(), 1);
    assert!(state["last_played"].as_object().unwrap().is_empty());
}

#[test]
fn corrupt_state_is_replaced() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );
    fs::write(dir.path().join(".state.json"), "not json at all").unwrap();

    peon_bin()
        .args(["--hook", "prompt", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let state = read_state(dir.path());
    assert_eq!(state["prompt_timestamps"].as_array().unwrap().len(), 1);
}

#[test]
fn dir_from_environment() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );

    peon_bin()
        .env("PEON_PING_DIR", dir.path())
        .args(["--hook", "prompt"])
        .assert()
        .success();

    assert!(dir.path().join(".state.json").exists());
}

#[test]
fn dir_from_legacy_environment() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );

    peon_bin()
        .env("WINDSURF_PEON_DIR", dir.path())
        .args(["--hook", "prompt"])
        .assert()
        .success();

    assert!(dir.path().join(".state.json").exists());
}

#[test]
fn new_dir_variable_beats_legacy_one() {
    let dir = tempdir().unwrap();
    let legacy = tempdir().unwrap();
    for d in [dir.path(), legacy.path()] {
        write_config(d, r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#);
    }

    peon_bin()
        .env("PEON_PING_DIR", dir.path())
        .env("WINDSURF_PEON_DIR", legacy.path())
        .args(["--hook", "prompt"])
        .assert()
        .success();

    assert!(dir.path().join(".state.json").exists());
    assert!(!legacy.path().join(".state.json").exists());
}

#[test]
fn unknown_extra_arguments_still_run_the_hook() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );

    peon_bin()
        .args(["--verbose", "--hook", "prompt", "--dir"])
        .arg(dir.path())
        .arg("trailing")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let state = read_state(dir.path());
    assert_eq!(state["prompt_timestamps"].as_array().unwrap().len(), 1);
}

#[test]
fn repeated_hook_uses_the_first() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );

    peon_bin()
        .args(["--hook", "prompt", "--hook", "unknown", "--dir"])
        .arg(dir.path())
        .assert()
        .success();
    assert!(dir.path().join(".state.json").exists());

    let other = tempdir().unwrap();
    write_config(
        other.path(),
        r#"{ "hooks": { "prompt": { "categories": ["annoyed"] } } }"#,
    );
    peon_bin()
        .args(["--hook", "unknown", "--hook", "prompt", "--dir"])
        .arg(other.path())
        .assert()
        .success();
    assert!(!other.path().join(".state.json").exists());
}

#[test]
fn debug_logging_goes_to_file() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), r#"{ "enabled": false }"#);

    peon_bin()
        .env("PEON_PING_DEBUG", "1")
        .env_remove("RUST_LOG")
        .args(["--hook", "prompt", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let log = fs::read_to_string(dir.path().join("peon-ping.log")).unwrap();
    assert!(log.contains("Engine disabled"), "log was: {log}");
}
