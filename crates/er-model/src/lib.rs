pub mod bands;
pub mod encounter;
pub mod error;
pub mod metrics;
pub mod quality;

pub use bands::{
    AgeBand, BREACH_THRESHOLD_MIN, CsatSegment, MAX_AGE, MAX_SATISFACTION, WaitBand, is_breach,
};
pub use encounter::{Encounter, Gender, NO_REFERRAL_LABEL};
pub use error::FieldError;
pub use metrics::{
    CategoryCount, CategoryMean, CategoryRate, Correlation, CsatOverall, FunnelStage,
    MetricsBundle, Overview, WeekdayHourMatrix,
};
pub use quality::{QualityIssue, QualityReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_hour_matrix_totals() {
        let mut matrix = WeekdayHourMatrix::default();
        matrix.counts[0][9] = 4;
        matrix.counts[6][23] = 2;
        assert_eq!(matrix.total(), 6);
        assert_eq!(matrix.max(), 4);
        assert_eq!(matrix.get(6, 23), 2);
    }

    #[test]
    fn quality_report_serializes() {
        let report = QualityReport {
            raw_rows: 3,
            kept_rows: 2,
            no_referral_rows: 1,
            unscored_rows: 1,
            issues: vec![QualityIssue {
                row: 2,
                field: "wait_minutes".to_string(),
                message: "wait minutes `-5` not a non-negative integer".to_string(),
            }],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: QualityReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
