//! Decode the raw frame into typed encounter records.
//!
//! Rows with unparseable or out-of-range values are dropped and recorded
//! in the [`QualityReport`]; the run continues with what remains. Null
//! satisfaction scores and null departments are kept as `None`, never
//! imputed.

use chrono::{NaiveDate, NaiveTime};
use polars::prelude::DataFrame;
use tracing::debug;

use er_model::{Encounter, FieldError, Gender, QualityReport};

use crate::columns::{
    COL_ADMITTED, COL_AGE, COL_DATE, COL_DEPARTMENT, COL_ENCOUNTER_ID, COL_GENDER, COL_RACE,
    COL_SATISFACTION, COL_TIME, COL_WAIT_MINUTES,
};
use crate::frame::EncounterFrame;
use crate::polars_utils::{column_value_string, parse_i64};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Decode every frame row, returning the kept encounters and the
/// data-quality accounting for the pass.
pub fn decode_encounters(frame: &EncounterFrame) -> (Vec<Encounter>, QualityReport) {
    let df = &frame.data;
    let mut report = QualityReport {
        raw_rows: df.height(),
        ..QualityReport::default()
    };
    let mut encounters = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        match decode_row(df, idx) {
            Ok(encounter) => {
                if encounter.department.is_none() {
                    report.no_referral_rows += 1;
                }
                if encounter.satisfaction.is_none() {
                    report.unscored_rows += 1;
                }
                encounters.push(encounter);
            }
            Err((field, error)) => {
                debug!(row = idx + 1, field, %error, "dropping malformed row");
                report.push_issue(idx + 1, field, &error);
            }
        }
    }
    report.kept_rows = encounters.len();
    (encounters, report)
}

fn decode_row(df: &DataFrame, idx: usize) -> Result<Encounter, (&'static str, FieldError)> {
    let date_raw = column_value_string(df, COL_DATE, idx);
    let date = parse_date(&date_raw).ok_or((COL_DATE, FieldError::Date(date_raw.clone())))?;

    let time_raw = column_value_string(df, COL_TIME, idx);
    let time = parse_time(&time_raw).ok_or((COL_TIME, FieldError::Time(time_raw.clone())))?;

    let age_raw = column_value_string(df, COL_AGE, idx);
    let age = parse_i64(&age_raw)
        .filter(|value| (0..=i64::from(er_model::MAX_AGE)).contains(value))
        .map(|value| value as u8)
        .ok_or((COL_AGE, FieldError::Age(age_raw.clone())))?;

    let admitted_raw = column_value_string(df, COL_ADMITTED, idx);
    let admitted = parse_admitted(&admitted_raw)
        .ok_or((COL_ADMITTED, FieldError::Admission(admitted_raw.clone())))?;

    let satisfaction_raw = column_value_string(df, COL_SATISFACTION, idx);
    let satisfaction = if satisfaction_raw.trim().is_empty() {
        None
    } else {
        let score = parse_i64(&satisfaction_raw)
            .filter(|value| (0..=i64::from(er_model::MAX_SATISFACTION)).contains(value))
            .map(|value| value as u8)
            .ok_or((
                COL_SATISFACTION,
                FieldError::Satisfaction(satisfaction_raw.clone()),
            ))?;
        Some(score)
    };

    let wait_raw = column_value_string(df, COL_WAIT_MINUTES, idx);
    let wait_minutes = parse_i64(&wait_raw)
        .filter(|value| *value >= 0)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or((COL_WAIT_MINUTES, FieldError::Wait(wait_raw.clone())))?;

    let department_raw = column_value_string(df, COL_DEPARTMENT, idx);
    let department = normalize_department(&department_raw);

    Ok(Encounter {
        encounter_id: column_value_string(df, COL_ENCOUNTER_ID, idx),
        date,
        time,
        gender: Gender::parse(&column_value_string(df, COL_GENDER, idx)),
        age,
        race: column_value_string(df, COL_RACE, idx).trim().to_string(),
        department,
        admitted,
        satisfaction,
        wait_minutes,
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
}

fn parse_admitted(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "TRUE" | "T" | "Y" | "YES" | "1" => Some(true),
        "FALSE" | "F" | "N" | "NO" | "0" => Some(false),
        _ => None,
    }
}

/// Null and placeholder department values become `None`; the grouping
/// layer renders them under the no-referral label.
fn normalize_department(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("n/a")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_accepted() {
        assert!(parse_date("2024-03-01").is_some());
        assert!(parse_date("03/01/2024").is_some());
        assert!(parse_date("01-03-2024").is_some());
        assert!(parse_date("March 1, 2024").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn time_formats_accepted() {
        assert_eq!(
            parse_time("14:05"),
            NaiveTime::from_hms_opt(14, 5, 0)
        );
        assert_eq!(
            parse_time("14:05:33"),
            NaiveTime::from_hms_opt(14, 5, 33)
        );
        assert!(parse_time("2pm").is_none());
    }

    #[test]
    fn admission_flags_accepted() {
        assert_eq!(parse_admitted("TRUE"), Some(true));
        assert_eq!(parse_admitted(" y "), Some(true));
        assert_eq!(parse_admitted("0"), Some(false));
        assert_eq!(parse_admitted("maybe"), None);
    }

    #[test]
    fn department_placeholders_become_none() {
        assert_eq!(normalize_department(""), None);
        assert_eq!(normalize_department("None"), None);
        assert_eq!(normalize_department("N/A"), None);
        assert_eq!(
            normalize_department(" Orthopedics "),
            Some("Orthopedics".to_string())
        );
    }
}
