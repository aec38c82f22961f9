use std::fs;
use std::path::PathBuf;

use er_ingest::{read_csv_table, resolve_columns};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("er_ingest_table_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_table_with_normalized_headers() {
    let path = temp_file(
        "encounters.csv",
        "\u{feff}Patient Id ,  Admission Date,Wait Time\nE-1,2024-03-01,25\nE-2,2024-03-02,70\n",
    );
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Patient Id", "Admission Date", "Wait Time"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["E-1", "2024-03-01", "25"]);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn skips_blank_rows_and_pads_short_rows() {
    let path = temp_file(
        "ragged.csv",
        "id,date,time\n,,\nE-1,2024-03-01\nE-2,2024-03-02,09:15,extra\n",
    );
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["E-1", "2024-03-01", ""]);
    assert_eq!(table.rows[1], vec!["E-2", "2024-03-02", "09:15"]);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn empty_file_yields_empty_table() {
    let path = temp_file("empty.csv", "");
    let table = read_csv_table(&path).expect("read csv");
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn resolves_aliased_headers() {
    let headers: Vec<String> = [
        "Patient Id",
        "Patient Admission Date",
        "Patient Admission Time",
        "Patient Gender",
        "Patient Age",
        "Patient Race",
        "Department Referral",
        "Patient Admin Flag",
        "Patient Sat Score",
        "Patient Waittime",
    ]
    .iter()
    .map(|header| (*header).to_string())
    .collect();
    let map = resolve_columns(&headers).expect("resolve");
    assert_eq!(map.index_of("encounter_id"), 0);
    assert_eq!(map.index_of("date"), 1);
    assert_eq!(map.index_of("department"), 6);
    assert_eq!(map.index_of("wait_minutes"), 9);
}

#[test]
fn missing_columns_are_fatal() {
    let headers: Vec<String> = ["id", "date", "time"]
        .iter()
        .map(|header| (*header).to_string())
        .collect();
    let error = resolve_columns(&headers).expect_err("missing columns");
    let message = error.to_string();
    assert!(message.contains("missing required columns"));
    assert!(message.contains("gender"));
    assert!(message.contains("wait_minutes"));
}
