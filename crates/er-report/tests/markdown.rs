use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use er_analytics::compute_metrics;
use er_model::{Encounter, Gender, QualityReport};
use er_report::{
    METRICS_JSON, REPORT_MD, render_markdown_report, write_markdown_report, write_metrics_json,
};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("er_report_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn fixture() -> Vec<Encounter> {
    (0u32..8)
        .map(|index| Encounter {
            encounter_id: format!("E-{index}"),
            date: NaiveDate::from_ymd_opt(2024, 1 + index % 3, 10 + index).unwrap(),
            time: NaiveTime::from_hms_opt((index * 3) % 24, 15, 0).unwrap(),
            gender: if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            },
            age: (5 + index * 9) as u8,
            race: if index % 3 == 0 { "Asian" } else { "White" }.to_string(),
            department: if index % 4 == 0 {
                None
            } else {
                Some("General Practice".to_string())
            },
            admitted: index % 2 == 1,
            satisfaction: if index % 2 == 0 { Some((index % 11) as u8) } else { None },
            wait_minutes: index * 13,
        })
        .collect()
}

#[test]
fn report_contains_every_section() {
    let encounters = fixture();
    let bundle = compute_metrics(&encounters).expect("metrics");
    let quality = QualityReport {
        raw_rows: 9,
        kept_rows: 8,
        no_referral_rows: 2,
        unscored_rows: 4,
        issues: Vec::new(),
    };
    let report = render_markdown_report(&bundle, &quality);

    assert!(report.starts_with("# Emergency Department Encounter Report"));
    for heading in [
        "## Monthly volume",
        "## Volume by weekday",
        "## Volume by hour",
        "## Weekday and hour pattern",
        "## Gender mix",
        "## Age bands",
        "## Race distribution",
        "## Department referrals",
        "## Referral-to-admission funnel",
        "## Admission rate by gender",
        "## Admission rate by age band",
        "## Satisfaction",
        "## Satisfaction by race",
        "## Satisfaction by department",
        "## Satisfaction segments",
        "## Wait time",
        "## Wait by department",
        "## Wait by race",
        "## Wait bands",
        "## Breach rate by weekday",
        "## Correlations",
    ] {
        assert!(report.contains(heading), "missing section: {heading}");
    }
    assert!(report.contains("1 dropped as malformed"));
    assert!(report.contains("60-minute breach threshold"));
}

#[test]
fn report_and_metrics_files_are_written() {
    let encounters = fixture();
    let bundle = compute_metrics(&encounters).expect("metrics");
    let quality = QualityReport::default();
    let dir = temp_dir();

    let report_path =
        write_markdown_report(&bundle, &quality, &dir.join(REPORT_MD)).expect("write report");
    let metrics_path = write_metrics_json(&bundle, &dir.join(METRICS_JSON)).expect("write metrics");

    let report = fs::read_to_string(&report_path).expect("read report");
    assert!(report.contains("## Correlations"));

    let json = fs::read_to_string(&metrics_path).expect("read metrics");
    let round: er_model::MetricsBundle = serde_json::from_str(&json).expect("parse metrics");
    assert_eq!(round, bundle);

    let _ = fs::remove_dir_all(&dir);
}
