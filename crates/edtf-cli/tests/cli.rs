//! End-to-end tests for the `edtf` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn edtf() -> Command {
    Command::cargo_bin("edtf").unwrap()
}

#[test]
fn parse_prints_json_value() {
    edtf()
        .args(["parse", "1985-04-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"edtf\": \"1985-04-12\""))
        .stdout(predicate::str::contains("\"level\": 0"));
}

#[test]
fn parse_compact_is_one_line() {
    let output = edtf()
        .args(["parse", "1985-04-12", "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim().lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["level"], 0);
}

#[test]
fn parse_failure_reports_coded_errors_and_exits_nonzero() {
    edtf()
        .args(["parse", "1985-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_MONTH"));
}

#[test]
fn parse_respects_max_level() {
    edtf()
        .args(["parse", "1984?", "--max-level", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_FORMAT"));

    edtf()
        .args(["parse", "1984?", "--max-level", "1"])
        .assert()
        .success();
}

#[test]
fn level_prints_minimal_level() {
    edtf()
        .args(["level", "[1667,1668]"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn relate_answers_in_caps() {
    edtf()
        .args(["relate", "before", "1985", "1990"])
        .assert()
        .success()
        .stdout("YES\n");

    edtf()
        .args(["relate", "before", "201X", "2015"])
        .assert()
        .success()
        .stdout("MAYBE\n");

    edtf()
        .args(["relate", "equals", "/1985", "1990"])
        .assert()
        .success()
        .stdout("UNKNOWN\n");
}

#[test]
fn relate_rejects_unknown_relation() {
    edtf()
        .args(["relate", "touches", "1985", "1990"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown relation"));
}

#[test]
fn relate_reports_unparseable_operand() {
    edtf()
        .args(["relate", "before", "nonsense", "1990"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse 'nonsense'"));
}
