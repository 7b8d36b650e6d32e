use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn ftn() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ftn"));
    cmd.env_remove("FTN_FIBONACCI_BOUND")
        .env_remove("FTN_TRIANGULAR_BOUND")
        .env_remove("FTN_POWER_BOUND")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn reads_single_value_from_stdin() {
    ftn().write_stdin("21\n").assert().success().stdout("F\n");
}

#[test]
fn accepts_value_argument() {
    ftn().arg("100").assert().success().stdout("P\n");
    ftn().arg("-3").assert().success().stdout("N\n");
}

#[test]
fn malformed_input_fails_without_output() {
    ftn()
        .write_stdin("twenty\n")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn empty_stdin_fails() {
    ftn().write_stdin("").assert().failure();
}

#[test]
fn batch_mode_labels_each_line() {
    ftn()
        .arg("--batch")
        .write_stdin(indoc! {"
            0
            6
            100

            1000000
        "})
        .assert()
        .success()
        .stdout("F\nT\nP\nN\n");
}

#[test]
fn json_format_emits_objects() {
    let output = ftn()
        .args(["--format", "json", "45"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["code"], "T");
    assert_eq!(parsed["value"], 45);
}

#[test]
fn config_file_changes_bounds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ftn.toml");
    fs::write(&path, "[bounds]\nfibonacci = 100\n").unwrap();

    ftn()
        .arg("--config")
        .arg(&path)
        .arg("89")
        .assert()
        .success()
        .stdout("F\n");
}

#[test]
fn environment_overrides_bound() {
    ftn()
        .env("FTN_POWER_BOUND", "10")
        .arg("100")
        .assert()
        .success()
        .stdout("N\n");
}

#[test]
fn invalid_bound_is_rejected() {
    ftn().args(["--power-bound", "0", "1"]).assert().failure();
}

#[test]
fn list_rules_prints_table() {
    let output = ftn().arg("--list-rules").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("fibonacci-like"));
    assert!(text.contains("100000"));
}
