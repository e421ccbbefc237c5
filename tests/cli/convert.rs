use crate::support::{jsontocsv, write_input};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Conversion tests
// ============================================================================

const BASIC_INPUT: &str = r#"{"data": [{"uri": "http://x/1", "name": "A"}]}"#;
const BASIC_CSV: &str =
    "esco_uri,data\r\n\"http://x/1\",\"{\"\"uri\"\":\"\"http://x/1\"\",\"\"name\"\":\"\"A\"\"}\"";

#[test]
fn test_writes_default_output_file() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), BASIC_INPUT);

    jsontocsv()
        .current_dir(dir.path())
        .arg("tilastot.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV file saved as ammattiryhma.csv"));

    let written = fs::read_to_string(dir.path().join("ammattiryhma.csv")).unwrap();
    assert_eq!(written, BASIC_CSV);
}

#[test]
fn test_default_run_reports_counts() {
    let dir = tempdir().unwrap();
    write_input(
        dir.path(),
        r#"{"data": [{"uri": "a"}, {"uri": " "}, {"uri": "b"}]}"#,
    );

    jsontocsv()
        .current_dir(dir.path())
        .arg("tilastot.json")
        .env_remove("JSONTOCSV_LOG")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("read 3 records"))
        .stdout(predicate::str::contains("wrote 2 rows"))
        .stdout(predicate::str::contains("CSV file saved as ammattiryhma.csv"));
}

#[test]
fn test_overwrites_existing_output() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), BASIC_INPUT);
    let output = dir.path().join("out.csv");
    fs::write(&output, "stale content that is longer than the new file\r\n".repeat(20)).unwrap();

    jsontocsv()
        .current_dir(dir.path())
        .args(["tilastot.json", "--output", "out.csv", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), BASIC_CSV);
}

#[test]
fn test_reads_stdin() {
    let dir = tempdir().unwrap();

    jsontocsv()
        .current_dir(dir.path())
        .args(["-", "--output", "from-stdin.csv"])
        .write_stdin(BASIC_INPUT)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("from-stdin.csv")).unwrap(),
        BASIC_CSV
    );
}

#[test]
fn test_output_dash_prints_csv_only() {
    let dir = tempdir().unwrap();

    jsontocsv()
        .current_dir(dir.path())
        .args(["--output", "-"])
        .write_stdin(BASIC_INPUT)
        .assert()
        .success()
        .stdout(predicate::eq(BASIC_CSV));

    assert!(!dir.path().join("ammattiryhma.csv").exists());
}

#[test]
fn test_empty_data_writes_empty_file() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), r#"{"data": []}"#);

    jsontocsv()
        .current_dir(dir.path())
        .arg("tilastot.json")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("ammattiryhma.csv")).unwrap(),
        ""
    );
}

#[test]
fn test_all_records_filtered_writes_header() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), r#"{"data": [{"uri": ""}, {"uri": "  "}, {"nimi": "x"}]}"#);

    jsontocsv()
        .current_dir(dir.path())
        .args(["tilastot.json", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input_records\":3"))
        .stdout(predicate::str::contains("\"output_rows\":0"));

    assert_eq!(
        fs::read_to_string(dir.path().join("ammattiryhma.csv")).unwrap(),
        "esco_uri,data"
    );
}

#[test]
fn test_json_report_counts() {
    let dir = tempdir().unwrap();
    write_input(
        dir.path(),
        r#"{"data": [{"uri": "a"}, {"uri": " "}, {"uri": "b", "say": "\"hi\""}]}"#,
    );

    let output = jsontocsv()
        .current_dir(dir.path())
        .args(["tilastot.json", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["output"], "ammattiryhma.csv");
    assert_eq!(report["input_records"], 3);
    assert_eq!(report["output_rows"], 2);

    let written = fs::read_to_string(dir.path().join("ammattiryhma.csv")).unwrap();
    assert!(written.ends_with(r#""b","{""uri"":""b"",""say"":""\""hi\""""}""#));
}

#[test]
fn test_info_level_logs_counts_on_stderr() {
    let dir = tempdir().unwrap();
    write_input(dir.path(), BASIC_INPUT);

    jsontocsv()
        .current_dir(dir.path())
        .args(["tilastot.json", "--log-level", "info"])
        .env_remove("JSONTOCSV_LOG")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("input_records=1"))
        .stderr(predicate::str::contains("output_rows=1"));
}
