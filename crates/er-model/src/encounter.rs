//! Patient encounter record types.
//!
//! One [`Encounter`] per emergency-department visit. Records are immutable
//! input data with no relationships between them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::bands::is_breach;

/// Label used when an encounter has no department referral.
///
/// Null departments are coalesced to this label before grouping so that
/// percentage columns still close over the full row count.
pub const NO_REFERRAL_LABEL: &str = "None";

/// Self-reported gender as captured at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// Not confirmed at registration, or outside the M/F capture codes.
    NotConfirmed,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NotConfirmed];

    /// Display label for summary tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NotConfirmed => "Not Confirmed",
        }
    }

    /// Lenient parse from source capture codes.
    ///
    /// Unrecognized values map to [`Gender::NotConfirmed`] rather than
    /// dropping the row.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Gender::Male,
            "F" | "FEMALE" => Gender::Female,
            _ => Gender::NotConfirmed,
        }
    }
}

/// A single patient encounter.
///
/// `department` and `satisfaction` are the two nullable fields: a missing
/// department means the visit ended without a referral, and a missing
/// satisfaction score means the patient did not respond to the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub encounter_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub gender: Gender,
    /// Validated to 0-79 at decode time.
    pub age: u8,
    pub race: String,
    pub department: Option<String>,
    pub admitted: bool,
    /// Validated to 0-10 at decode time when present.
    pub satisfaction: Option<u8>,
    pub wait_minutes: u32,
}

impl Encounter {
    /// Department label with nulls coalesced to [`NO_REFERRAL_LABEL`].
    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or(NO_REFERRAL_LABEL)
    }

    /// Whether the patient responded to the satisfaction survey.
    pub fn is_scored(&self) -> bool {
        self.satisfaction.is_some()
    }

    /// Whether the wait exceeded the breach threshold.
    pub fn is_breach(&self) -> bool {
        is_breach(self.wait_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parse_is_lenient() {
        assert_eq!(Gender::parse("m"), Gender::Male);
        assert_eq!(Gender::parse(" FEMALE "), Gender::Female);
        assert_eq!(Gender::parse("NC"), Gender::NotConfirmed);
        assert_eq!(Gender::parse("nonbinary"), Gender::NotConfirmed);
        assert_eq!(Gender::parse(""), Gender::NotConfirmed);
    }

    #[test]
    fn department_label_coalesces_null() {
        let encounter = Encounter {
            encounter_id: "E-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            gender: Gender::Female,
            age: 42,
            race: "Asian".to_string(),
            department: None,
            admitted: false,
            satisfaction: None,
            wait_minutes: 25,
        };
        assert_eq!(encounter.department_label(), NO_REFERRAL_LABEL);
        assert!(!encounter.is_scored());
        assert!(!encounter.is_breach());
    }
}
