//! Data-quality accounting for the cleaning pass.
//!
//! Malformed rows are dropped and recorded here rather than aborting the
//! run. The counts let callers verify that dropped plus kept rows equal
//! the raw row count.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// A single dropped-row record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    /// 1-based data row number in the source file (header excluded).
    pub row: usize,
    /// Canonical field name the failure was detected on.
    pub field: String,
    pub message: String,
}

/// Outcome of the cleaning pass over the raw table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Non-empty data rows in the source file.
    pub raw_rows: usize,
    /// Rows that decoded into valid encounters.
    pub kept_rows: usize,
    /// Kept rows whose department was null and coalesced.
    pub no_referral_rows: usize,
    /// Kept rows without a satisfaction score.
    pub unscored_rows: usize,
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn dropped_rows(&self) -> usize {
        self.raw_rows.saturating_sub(self.kept_rows)
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Record a dropped row caused by a field-level decode failure.
    pub fn push_issue(&mut self, row: usize, field: &str, error: &FieldError) {
        self.issues.push(QualityIssue {
            row,
            field: field.to_string(),
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts() {
        let mut report = QualityReport {
            raw_rows: 10,
            kept_rows: 8,
            no_referral_rows: 3,
            unscored_rows: 5,
            issues: Vec::new(),
        };
        report.push_issue(4, "age", &FieldError::Age("181".to_string()));
        report.push_issue(7, "date", &FieldError::Date("not-a-date".to_string()));
        assert_eq!(report.dropped_rows(), 2);
        assert!(report.has_issues());
        assert_eq!(report.issues[0].message, "age `181` outside 0-79");
    }
}
