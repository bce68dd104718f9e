use predicates::prelude::*;
use std::fs;

fn export(format: &str, output_arg: &str) -> assert_cmd::assert::Assert {
    let mut cmd = assert_cmd::cargo_bin_cmd!("runway");
    cmd.args([
        "export",
        "--total-cash",
        "1000000",
        "--monthly-burn",
        "200000",
        "--growth-rate",
        "10",
        "--monthly-revenue",
        "50000",
        "-s",
        "2026-02-01",
        "-f",
        format,
        "-o",
        output_arg,
    ]);
    cmd.assert()
}

#[test]
fn export_writes_markdown_report() {
    let output_file = assert_fs::NamedTempFile::new("report.md").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    export("markdown", output_arg)
        .success()
        .stdout(predicate::str::contains("Report Exported"));

    let output = fs::read_to_string(output_arg).unwrap();
    assert!(output.contains("# Startup Runway Analysis"));
    assert!(output.contains("| Monthly Growth Rate | 10% |"));
    assert!(output.contains("| Monthly Revenue | ₹50,000 |"));
    assert!(output.contains("| Month 1 | 1 February 2026 | ₹50,000 | ₹2,00,000 | ₹10,00,000 |"));
    assert!(output.contains("| Month 2 | 1 March 2026 | ₹55,000 | ₹2,00,000 | ₹8,50,000 |"));
}

#[test]
fn export_writes_html_report() {
    let output_file = assert_fs::NamedTempFile::new("report.html").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    export("html", output_arg).success();

    let output = fs::read_to_string(output_arg).unwrap();
    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<h2>Monthly Cash Projection</h2>"));
}

#[test]
fn export_writes_json_result() {
    let output_file = assert_fs::NamedTempFile::new("report.json").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    export("json", output_arg).success();

    let output = fs::read_to_string(output_arg).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["growth_rate"], 10.0);
    assert_eq!(value["start_date"], "2026-02-01");
    assert_eq!(value["projected_data"][1]["remaining"], 850_000.0);
}

#[test]
fn export_writes_pdf_report() {
    let output_file = assert_fs::NamedTempFile::new("report.pdf").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    export("pdf", output_arg)
        .success()
        .stdout(predicate::str::contains("Report Exported"));

    let output = fs::read(output_arg).unwrap();
    assert!(output.starts_with(b"%PDF"));
}

#[test]
fn export_reports_unwritable_destination() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output_arg = temp.path().join("missing").join("report.md");

    export("markdown", output_arg.to_str().unwrap())
        .success()
        .stderr(predicate::str::contains("Export Error"));
}

#[test]
fn export_defaults_output_name_from_format() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("runway");
    cmd.current_dir(temp.path()).args([
        "export",
        "--total-cash",
        "1000000",
        "--monthly-burn",
        "200000",
        "-f",
        "html",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("runway-analysis.html"));
    assert!(temp.path().join("runway-analysis.html").exists());
}
