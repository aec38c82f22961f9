use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};

use er_ingest::{decode_encounters, load_encounter_frame};
use er_model::Gender;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("er_ingest_decode_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

const HEADER: &str = "encounter_id,date,time,gender,age,race,department,admitted,satisfaction,wait_minutes";

#[test]
fn decodes_clean_rows() {
    let contents = format!(
        "{HEADER}\n\
         E-1,2024-03-01,09:15,F,34,Asian,Orthopedics,TRUE,9,25\n\
         E-2,03/02/2024,22:40,M,71,White,,FALSE,,64\n"
    );
    let path = temp_file("clean.csv", &contents);
    let frame = load_encounter_frame(&path).expect("load frame");
    assert_eq!(frame.record_count(), 2);

    let (encounters, report) = decode_encounters(&frame);
    assert_eq!(report.raw_rows, 2);
    assert_eq!(report.kept_rows, 2);
    assert_eq!(report.dropped_rows(), 0);
    assert_eq!(report.no_referral_rows, 1);
    assert_eq!(report.unscored_rows, 1);

    let first = &encounters[0];
    assert_eq!(first.encounter_id, "E-1");
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(first.time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(first.gender, Gender::Female);
    assert_eq!(first.age, 34);
    assert_eq!(first.department.as_deref(), Some("Orthopedics"));
    assert!(first.admitted);
    assert_eq!(first.satisfaction, Some(9));
    assert_eq!(first.wait_minutes, 25);

    let second = &encounters[1];
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    assert_eq!(second.department, None);
    assert_eq!(second.department_label(), "None");
    assert_eq!(second.satisfaction, None);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn malformed_rows_are_dropped_and_recorded() {
    let contents = format!(
        "{HEADER}\n\
         E-1,2024-03-01,09:15,F,34,Asian,Orthopedics,TRUE,9,25\n\
         E-2,not-a-date,09:15,M,50,White,None,TRUE,5,30\n\
         E-3,2024-03-03,09:15,M,181,White,None,TRUE,5,30\n\
         E-4,2024-03-04,09:15,F,60,Black,None,maybe,5,30\n\
         E-5,2024-03-05,09:15,F,60,Black,None,TRUE,15,30\n\
         E-6,2024-03-06,09:15,F,60,Black,None,TRUE,5,-4\n"
    );
    let path = temp_file("dirty.csv", &contents);
    let frame = load_encounter_frame(&path).expect("load frame");
    let (encounters, report) = decode_encounters(&frame);

    assert_eq!(report.raw_rows, 6);
    assert_eq!(report.kept_rows, 1);
    assert_eq!(report.dropped_rows(), 5);
    assert_eq!(encounters.len(), 1);
    assert_eq!(report.raw_rows, report.kept_rows + report.dropped_rows());

    let fields: Vec<&str> = report
        .issues
        .iter()
        .map(|issue| issue.field.as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["date", "age", "admitted", "satisfaction", "wait_minutes"]
    );
    assert_eq!(report.issues[0].row, 2);
    assert!(report.issues[1].message.contains("181"));

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn unknown_gender_codes_are_kept_as_not_confirmed() {
    let contents = format!("{HEADER}\nE-1,2024-03-01,09:15,NC,34,Asian,None,FALSE,7,12\n");
    let path = temp_file("gender.csv", &contents);
    let frame = load_encounter_frame(&path).expect("load frame");
    let (encounters, report) = decode_encounters(&frame);
    assert_eq!(report.kept_rows, 1);
    assert_eq!(encounters[0].gender, Gender::NotConfirmed);

    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}
