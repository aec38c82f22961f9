use thiserror::Error;

/// Field-level decode failure for a single encounter row.
///
/// These surface as data-quality issues in the [`crate::QualityReport`];
/// they never abort a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("unparseable date `{0}`")]
    Date(String),
    #[error("unparseable time `{0}`")]
    Time(String),
    #[error("age `{0}` outside 0-79")]
    Age(String),
    #[error("admission flag `{0}` not recognized")]
    Admission(String),
    #[error("satisfaction score `{0}` outside 0-10")]
    Satisfaction(String),
    #[error("wait minutes `{0}` not a non-negative integer")]
    Wait(String),
}
