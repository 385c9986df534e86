use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &tempfile::TempDir, calculation_body: &str) -> PathBuf {
    let body = if calculation_body.is_empty() {
        "method = \"A\"\nsigma_pt = 0.1\n"
    } else {
        calculation_body
    };
    let toml = format!(
        r#"
[input_data]
id_col = "Lab"
result_col = "Value"
uncertainty_col = "U"

[calculation]
{body}
"#
    );
    let path = dir.path().join("cfg.toml");
    fs::write(&path, toml).unwrap();
    path
}

fn write_dataset(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("data.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[rstest]
fn validate_reports_dropped_rows() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "");
    let data = write_dataset(&dir, "Lab,Value,U\nA,9.8,0.1\nB,abc,0.1\nC,10.0,0.2\n");

    let mut cmd = Command::cargo_bin("ptcalc").unwrap();
    cmd.arg("validate").arg("--config").arg(&cfg).arg("--data").arg(&data);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("validated 2 row(s), dropped 1 row(s)"));
}

#[rstest]
fn calculate_prints_assigned_value() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "");
    let data = write_dataset(
        &dir,
        "Lab,Value,U\np1,9.8,\np2,9.9,\np3,10.0,\np4,10.1,\np5,10.2,\n",
    );

    let mut cmd = Command::cargo_bin("ptcalc").unwrap();
    cmd.arg("calculate").arg("--config").arg(&cfg).arg("--data").arg(&data);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("x_pt:       10"));
}

#[rstest]
fn calculate_json_output_round_trips_through_report_only() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "");
    let data = write_dataset(
        &dir,
        "Lab,Value,U\np1,9.8,\np2,9.9,\np3,10.0,\np4,10.1,\np5,10.2,\n",
    );
    let record_path = dir.path().join("record.json");

    let mut cmd = Command::cargo_bin("ptcalc").unwrap();
    cmd.arg("calculate")
        .arg("--config")
        .arg(&cfg)
        .arg("--data")
        .arg(&data)
        .arg("--out")
        .arg(&record_path);
    cmd.assert().success();

    assert!(record_path.exists());
    let contents = fs::read_to_string(&record_path).unwrap();
    assert!(contents.contains("\"method\""));

    // report-only with a renderer that doesn't exist should fail with a
    // typed renderer error, not a panic.
    let template = dir.path().join("template.html");
    fs::write(&template, "<html></html>").unwrap();
    let output = dir.path().join("out.pdf");

    let mut cmd = Command::cargo_bin("ptcalc").unwrap();
    cmd.arg("report-only")
        .arg("--record")
        .arg(&record_path)
        .arg("--template")
        .arg(&template)
        .arg("--format")
        .arg("pdf")
        .arg("--output")
        .arg(&output)
        .arg("--renderer")
        .arg("definitely-not-a-real-binary-xyz");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("renderer"));
}

#[rstest]
fn missing_column_yields_typed_exit_code() {
    let dir = tempdir().unwrap();
    let cfg = write_config(&dir, "");
    let data = write_dataset(&dir, "Lab,Other\nA,1\n");

    let mut cmd = Command::cargo_bin("ptcalc").unwrap();
    cmd.arg("validate").arg("--config").arg(&cfg).arg("--data").arg(&data);

    cmd.assert().failure().code(2);
}

#[rstest]
fn crm_method_requires_supplied_value() {
    let dir = tempdir().unwrap();
    let cfg = write_config(
        &dir,
        "method = \"CRM\"\n\n[calculation.crm]\nuncertainty = 0.05\n",
    );
    let data = write_dataset(&dir, "Lab,Value,U\nA,9.8,0.1\nB,9.9,0.1\n");

    let mut cmd = Command::cargo_bin("ptcalc").unwrap();
    cmd.arg("calculate").arg("--config").arg(&cfg).arg("--data").arg(&data);

    cmd.assert().failure().code(7);
}
