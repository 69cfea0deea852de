//! Integration tests for the otkhi CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_search_small_range() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("search").arg("-s").arg("0").arg("-e").arg("10");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "First longest (3) sequence over 0 and under 10:",
        ))
        .stdout(predicate::str::contains("\t2: ორი (3)"))
        .stdout(predicate::str::contains("\t4: ოთხი (4)"));
}

#[test]
fn test_search_json_output() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("search")
        .arg("-s")
        .arg("0")
        .arg("-e")
        .arg("10")
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["start"], 0);
    assert_eq!(parsed["end"], 10);
    assert_eq!(parsed["backend"], "cpu");
    assert_eq!(parsed["chain"][0]["value"], 2);
}

#[test]
fn test_search_to_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.txt");

    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("search")
        .arg("-s")
        .arg("0")
        .arg("-e")
        .arg("100")
        .arg("-o")
        .arg(&path);

    cmd.assert().success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("First longest"));
    assert!(written.contains("ოთხი (4)"));
}

#[test]
fn test_search_with_explicit_lanes_is_deterministic() {
    let run = |lanes: &str| {
        let mut cmd = Command::cargo_bin("otkhi").unwrap();
        cmd.arg("search")
            .arg("-e")
            .arg("5000")
            .arg("-l")
            .arg(lanes);
        let output = cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    };

    let first_line = |text: &str| text.lines().next().unwrap().to_string();
    assert_eq!(first_line(&run("1")), first_line(&run("7")));
}

#[test]
fn test_search_no_comma_changes_counts() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("search")
        .arg("-s")
        .arg("1001")
        .arg("-e")
        .arg("1002")
        .arg("--no-comma");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1001: ათას ერთი (9)"));
}

#[test]
fn test_spell_command() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("spell").arg("2256");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2256: ორი ათას, ორას ორმოცდათექვსმეტი (31)"))
        .stdout(predicate::str::contains("chain (6): 2256 -> 31 -> 12 -> 7 -> 5 -> 4"));
}

#[test]
fn test_spell_zero() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("spell").arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0: ნული (4)"))
        .stdout(predicate::str::contains("chain (2): 0 -> 4"));
}

#[test]
fn test_devices_command() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("devices");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cpu:"))
        .stdout(predicate::str::contains("cuda:"));
}

#[test]
fn test_rejects_zero_lanes() {
    let mut cmd = Command::cargo_bin("otkhi").unwrap();
    cmd.arg("search").arg("-e").arg("10").arg("-l").arg("0");

    cmd.assert().failure();
}
