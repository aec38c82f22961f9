//! Integration tests for the pipeline stage functions.

use std::fs;
use std::path::PathBuf;

use er_analytics::compute_metrics;
use er_cli::pipeline::{OutputConfig, ingest, output};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("er_cli_pipeline_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

const FIXTURE: &str = "\
encounter_id,date,time,gender,age,race,department,admitted,satisfaction,wait_minutes
E-1,2024-03-04,09:15,F,34,Asian,Orthopedics,TRUE,9,25
E-2,2024-03-05,22:40,M,71,White,,FALSE,,64
E-3,2024-03-06,13:05,M,8,Black,General Practice,TRUE,3,112
E-4,2024-03-07,07:55,NC,55,White,General Practice,FALSE,6,41
E-5,bad-date,07:55,F,55,White,None,FALSE,6,41
";

#[test]
fn ingest_accounts_for_every_row() {
    let dir = temp_dir();
    let input = dir.join("encounters.csv");
    fs::write(&input, FIXTURE).expect("write fixture");

    let result = ingest(&input).expect("ingest");
    assert_eq!(result.source_rows, 5);
    assert_eq!(result.quality.raw_rows, 5);
    assert_eq!(result.quality.kept_rows, 4);
    assert_eq!(result.quality.dropped_rows(), 1);
    assert_eq!(result.encounters.len(), 4);
    assert_eq!(result.quality.no_referral_rows, 1);
    assert_eq!(result.quality.unscored_rows, 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn output_writes_report_and_metrics() {
    let dir = temp_dir();
    let input = dir.join("encounters.csv");
    fs::write(&input, FIXTURE).expect("write fixture");

    let ingested = ingest(&input).expect("ingest");
    let bundle = compute_metrics(&ingested.encounters).expect("metrics");
    let output_dir = dir.join("output");
    let result = output(&OutputConfig {
        output_dir: &output_dir,
        bundle: &bundle,
        quality: &ingested.quality,
        encounters: &ingested.encounters,
        write_charts: false,
        write_markdown: true,
        write_json: true,
        dry_run: false,
    })
    .expect("output");

    assert!(result.errors.is_empty());
    assert!(result.charts.is_empty());
    let report = result.report_md.expect("report path");
    let metrics = result.metrics_json.expect("metrics path");
    assert!(report.exists());
    assert!(metrics.exists());
    let json = fs::read_to_string(&metrics).expect("read metrics");
    assert!(json.contains("\"admission_overall\""));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = temp_dir();
    let input = dir.join("encounters.csv");
    fs::write(&input, FIXTURE).expect("write fixture");

    let ingested = ingest(&input).expect("ingest");
    let bundle = compute_metrics(&ingested.encounters).expect("metrics");
    let output_dir = dir.join("output");
    let result = output(&OutputConfig {
        output_dir: &output_dir,
        bundle: &bundle,
        quality: &ingested.quality,
        encounters: &ingested.encounters,
        write_charts: true,
        write_markdown: true,
        write_json: true,
        dry_run: true,
    })
    .expect("output");

    assert!(result.charts.is_empty());
    assert!(result.report_md.is_none());
    assert!(result.metrics_json.is_none());
    assert!(!output_dir.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_column_is_fatal() {
    let dir = temp_dir();
    let input = dir.join("encounters.csv");
    fs::write(&input, "encounter_id,date\nE-1,2024-03-04\n").expect("write fixture");

    let error = ingest(&input).expect_err("missing columns");
    assert!(error.to_string().contains("resolve columns"));

    let _ = fs::remove_dir_all(&dir);
}
