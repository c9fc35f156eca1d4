// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests that run the `testlog` binary against captured logs in `fixtures/logs`.

use camino::Utf8PathBuf;
use camino_tempfile::Utf8TempDir;
use indoc::indoc;
use pretty_assertions::assert_eq;
use test_case::test_case;
use testlog_metadata::TestlogExitCode;

mod fixtures;

use fixtures::*;

#[test_case("jest-verbose" ; "jest verbose run")]
#[test_case("pytest-verbose" ; "pytest verbose run")]
#[test_case("mixed-retry" ; "mixed run with retries")]
fn fixture_logs(name: &str) {
    let fixture = LogFixture::new(name);
    let dir = Utf8TempDir::new().unwrap();
    let output_json = dir.path().join("report.json");

    let output = TestlogCli::new()
        .args([
            fixture.stdout_path().as_str(),
            fixture.stderr_path().as_str(),
            output_json.as_str(),
        ])
        .output();

    assert_eq!(output.exit_code, Some(TestlogExitCode::OK), "{output}");
    assert_eq!(output.stdout_as_str(), "", "nothing is printed on success");
    assert_eq!(
        std::fs::read_to_string(&output_json).unwrap(),
        fixture.expected_json()
    );
}

#[test]
fn empty_logs() {
    let dir = Utf8TempDir::new().unwrap();
    let stdout_file = dir.path().join("stdout.txt");
    let stderr_file = dir.path().join("stderr.txt");
    let output_json = dir.path().join("report.json");
    std::fs::write(&stdout_file, "").unwrap();
    std::fs::write(&stderr_file, "").unwrap();

    let output = TestlogCli::new()
        .args([
            stdout_file.as_str(),
            stderr_file.as_str(),
            output_json.as_str(),
        ])
        .output();

    assert_eq!(output.exit_code, Some(TestlogExitCode::OK), "{output}");
    assert_eq!(
        std::fs::read_to_string(&output_json).unwrap(),
        indoc! {r#"
            {
              "tests": []
            }"#}
    );
}

#[test]
fn overwrites_existing_report() {
    let fixture = LogFixture::new("jest-verbose");
    let dir = Utf8TempDir::new().unwrap();
    let output_json = dir.path().join("report.json");
    std::fs::write(&output_json, "{\"tests\": [\"stale\"]}\n").unwrap();

    let output = TestlogCli::new()
        .args([
            fixture.stdout_path().as_str(),
            fixture.stderr_path().as_str(),
            output_json.as_str(),
        ])
        .output();

    assert_eq!(output.exit_code, Some(TestlogExitCode::OK), "{output}");
    assert_eq!(
        std::fs::read_to_string(&output_json).unwrap(),
        fixture.expected_json()
    );
}

#[test]
fn report_is_ascii_json() {
    let fixture = LogFixture::new("jest-verbose");
    let dir = Utf8TempDir::new().unwrap();
    let output_json = dir.path().join("report.json");

    let output = TestlogCli::new()
        .args([
            fixture.stdout_path().as_str(),
            fixture.stderr_path().as_str(),
            output_json.as_str(),
        ])
        .output();
    assert_eq!(output.exit_code, Some(TestlogExitCode::OK), "{output}");

    let contents = std::fs::read_to_string(&output_json).unwrap();
    assert!(contents.is_ascii(), "report is ASCII-only: {contents}");
    assert!(
        contents.contains(r"renders \u201csmart quotes\u201d"),
        "non-ASCII characters are escaped: {contents}"
    );

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        value["tests"][1]["name"],
        "src/utils/format.test.js::renders \u{201c}smart quotes\u{201d}"
    );
}

#[test_case(&[] ; "no arguments")]
#[test_case(&["stdout.txt", "stderr.txt"] ; "two arguments")]
#[test_case(&["stdout.txt", "stderr.txt", "report.json", "extra"] ; "four arguments")]
fn usage_error(args: &[&str]) {
    let dir = Utf8TempDir::new().unwrap();
    let args: Vec<_> = args.iter().map(|arg| dir.path().join(arg)).collect();

    let output = TestlogCli::new()
        .args(args.iter().map(|arg| arg.as_str()))
        .output();

    assert_eq!(
        output.exit_code,
        Some(TestlogExitCode::USAGE_ERROR),
        "{output}"
    );
    assert_eq!(
        output.stdout_as_str(),
        "Usage: testlog <STDOUT_FILE> <STDERR_FILE> <OUTPUT_JSON>\n"
    );
    assert!(
        !dir.path().join("report.json").exists(),
        "no report is written on a usage error"
    );
}

#[test_case(&["--help"] ; "help")]
#[test_case(&["--version"] ; "version")]
#[test_case(&["-h", "-V"] ; "short flags")]
fn flags_are_not_recognized(args: &[&str]) {
    let output = TestlogCli::new().args(args.iter().copied()).output();

    assert_eq!(
        output.exit_code,
        Some(TestlogExitCode::USAGE_ERROR),
        "{output}"
    );
    assert_eq!(
        output.stdout_as_str(),
        "Usage: testlog <STDOUT_FILE> <STDERR_FILE> <OUTPUT_JSON>\n"
    );
}

#[test_case("-out.txt", "--version", "report.json" ; "flag-like inputs")]
#[test_case("--", "-", "--help" ; "double dash and flag-like output")]
fn flag_like_names_are_paths(stdout_name: &str, stderr_name: &str, output_name: &str) {
    let fixture = LogFixture::new("mixed-retry");
    let dir = Utf8TempDir::new().unwrap();
    std::fs::copy(fixture.stdout_path(), dir.path().join(stdout_name)).unwrap();
    std::fs::copy(fixture.stderr_path(), dir.path().join(stderr_name)).unwrap();

    let output = TestlogCli::new()
        .current_dir(dir.path())
        .args([stdout_name, stderr_name, output_name])
        .output();

    assert_eq!(output.exit_code, Some(TestlogExitCode::OK), "{output}");
    assert_eq!(output.stdout_as_str(), "", "nothing is printed on success");
    assert_eq!(
        std::fs::read_to_string(dir.path().join(output_name)).unwrap(),
        fixture.expected_json()
    );
}

#[test]
fn missing_input() {
    let fixture = LogFixture::new("pytest-verbose");
    let dir = Utf8TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let output_json = dir.path().join("report.json");

    let output = TestlogCli::new()
        .args([
            fixture.stdout_path().as_str(),
            missing.as_str(),
            output_json.as_str(),
        ])
        .output();

    assert_eq!(
        output.exit_code,
        Some(TestlogExitCode::READ_INPUT_FAILED),
        "{output}"
    );
    let stderr = output.stderr_as_str();
    assert!(
        stderr.contains(&format!(
            "error: failed to read captured stderr from `{missing}`"
        )),
        "{stderr}"
    );
    assert!(stderr.contains("Caused by:"), "{stderr}");
    assert!(!output_json.exists(), "no report is written on a read error");
}

#[test]
fn unwritable_output() {
    let fixture = LogFixture::new("pytest-verbose");
    let dir = Utf8TempDir::new().unwrap();
    let output_json: Utf8PathBuf = dir.path().join("no-such-dir").join("report.json");

    let output = TestlogCli::new()
        .args([
            fixture.stdout_path().as_str(),
            fixture.stderr_path().as_str(),
            output_json.as_str(),
        ])
        .output();

    assert_eq!(
        output.exit_code,
        Some(TestlogExitCode::WRITE_OUTPUT_FAILED),
        "{output}"
    );
    let stderr = output.stderr_as_str();
    assert!(
        stderr.contains(&format!("error: failed to write report to `{output_json}`")),
        "{stderr}"
    );
}

#[test]
fn debug_logging() {
    let fixture = LogFixture::new("mixed-retry");
    let dir = Utf8TempDir::new().unwrap();
    let output_json = dir.path().join("report.json");

    let output = TestlogCli::new()
        .env("TESTLOG_LOG", "debug")
        .args([
            fixture.stdout_path().as_str(),
            fixture.stderr_path().as_str(),
            output_json.as_str(),
        ])
        .output();

    assert_eq!(output.exit_code, Some(TestlogExitCode::OK), "{output}");
    let stderr = output.stderr_as_str();
    assert!(
        stderr.contains("debug: found 7 test results for 5 unique tests"),
        "{stderr}"
    );
}
