//! Canonical column names and source-header resolution.
//!
//! Source exports spell the encounter columns several ways. Headers are
//! matched case-insensitively after stripping everything that is not a
//! letter or digit, so `Patient Admission Date` and `patient_admission_date`
//! both resolve to `date`.

use anyhow::{Result, bail};

pub const COL_ENCOUNTER_ID: &str = "encounter_id";
pub const COL_DATE: &str = "date";
pub const COL_TIME: &str = "time";
pub const COL_GENDER: &str = "gender";
pub const COL_AGE: &str = "age";
pub const COL_RACE: &str = "race";
pub const COL_DEPARTMENT: &str = "department";
pub const COL_ADMITTED: &str = "admitted";
pub const COL_SATISFACTION: &str = "satisfaction";
pub const COL_WAIT_MINUTES: &str = "wait_minutes";

/// Canonical columns in frame order.
pub const CANONICAL_COLUMNS: [&str; 10] = [
    COL_ENCOUNTER_ID,
    COL_DATE,
    COL_TIME,
    COL_GENDER,
    COL_AGE,
    COL_RACE,
    COL_DEPARTMENT,
    COL_ADMITTED,
    COL_SATISFACTION,
    COL_WAIT_MINUTES,
];

/// Source spellings accepted for each canonical column.
const ALIASES: [(&str, &[&str]); 10] = [
    (COL_ENCOUNTER_ID, &["encounterid", "patientid", "caseid", "id"]),
    (COL_DATE, &["date", "admissiondate", "patientadmissiondate"]),
    (COL_TIME, &["time", "admissiontime", "patientadmissiontime"]),
    (COL_GENDER, &["gender", "patientgender", "sex"]),
    (COL_AGE, &["age", "patientage"]),
    (COL_RACE, &["race", "patientrace"]),
    (
        COL_DEPARTMENT,
        &[
            "department",
            "departmentreferral",
            "patientdepartmentreferral",
            "referreddepartment",
        ],
    ),
    (
        COL_ADMITTED,
        &["admitted", "admissionflag", "patientadminflag"],
    ),
    (
        COL_SATISFACTION,
        &[
            "satisfaction",
            "satisfactionscore",
            "patientsatscore",
            "satscore",
        ],
    ),
    (
        COL_WAIT_MINUTES,
        &["waitminutes", "waittime", "patientwaittime"],
    ),
];

/// Resolved source-column index for each canonical column.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    indices: [usize; 10],
}

impl ColumnMap {
    /// Source index of a canonical column. Panics on an unknown name,
    /// which would be a programming error.
    pub fn index_of(&self, canonical: &str) -> usize {
        let position = CANONICAL_COLUMNS
            .iter()
            .position(|name| *name == canonical)
            .expect("canonical column name");
        self.indices[position]
    }
}

fn squash_header(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Resolve source headers to the canonical columns.
///
/// # Errors
///
/// Fails when any canonical column has no matching header. This is the
/// one fatal ingest condition; everything else is row-level quality
/// handling.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap> {
    let squashed: Vec<String> = headers.iter().map(|header| squash_header(header)).collect();
    let mut indices = [0usize; 10];
    let mut missing: Vec<&str> = Vec::new();
    for (slot, &(canonical, aliases)) in ALIASES.iter().enumerate() {
        let found = squashed
            .iter()
            .position(|header| aliases.contains(&header.as_str()));
        match found {
            Some(index) => indices[slot] = index,
            None => missing.push(canonical),
        }
    }
    if !missing.is_empty() {
        bail!("input is missing required columns: {}", missing.join(", "));
    }
    Ok(ColumnMap { indices })
}
