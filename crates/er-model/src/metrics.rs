//! Typed result rows for the aggregate computations.
//!
//! Every computation returns one of a handful of small row shapes so the
//! console, markdown, and JSON renderers share a single representation.
//! Percent fields are expressed on a 0-100 scale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-line dataset facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_encounters: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub admitted: usize,
    pub scored: usize,
}

/// One group of a count partition with its share of the denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// One group of a grouped mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMean {
    pub label: String,
    pub mean: f64,
    /// Rows contributing to the mean (nulls excluded).
    pub n: usize,
}

/// One group of a grouped rate (hits over total, as a percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    pub label: String,
    pub hits: usize,
    pub total: usize,
    pub percent: f64,
}

/// One department stage of the referral-to-admission funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub department: String,
    pub referred: usize,
    pub admitted: usize,
    pub admission_pct: f64,
}

/// Encounter counts by weekday and hour of day.
///
/// Rows are weekdays Monday through Sunday, columns are hours 0-23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHourMatrix {
    pub counts: [[u32; 24]; 7],
}

impl Default for WeekdayHourMatrix {
    fn default() -> Self {
        Self {
            counts: [[0; 24]; 7],
        }
    }
}

impl WeekdayHourMatrix {
    pub fn get(&self, weekday: usize, hour: usize) -> u32 {
        self.counts[weekday][hour]
    }

    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .map(|count| u64::from(*count))
            .sum()
    }

    pub fn max(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Overall satisfaction summary.
///
/// `mean` is `None` when no encounter carries a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsatOverall {
    pub mean: Option<f64>,
    pub scored: usize,
    pub response_pct: f64,
}

/// A Pearson correlation over one pair of fields.
///
/// `coefficient` is `None` when fewer than two pairs exist or either
/// series is constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub label: String,
    pub coefficient: Option<f64>,
    /// Pairs included after pairwise null exclusion.
    pub n: usize,
}

/// Every computed metric for one run, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    pub overview: Overview,
    pub monthly_volume: Vec<CategoryCount>,
    pub weekday_volume: Vec<CategoryCount>,
    pub hourly_volume: Vec<CategoryCount>,
    pub weekday_hour: WeekdayHourMatrix,
    pub gender_mix: Vec<CategoryCount>,
    pub age_bands: Vec<CategoryCount>,
    pub race_mix: Vec<CategoryCount>,
    pub department_referrals: Vec<CategoryCount>,
    pub admission_funnel: Vec<FunnelStage>,
    pub admission_overall: CategoryRate,
    pub admission_by_gender: Vec<CategoryRate>,
    pub admission_by_age_band: Vec<CategoryRate>,
    pub csat_overall: CsatOverall,
    pub csat_by_race: Vec<CategoryMean>,
    pub csat_by_department: Vec<CategoryMean>,
    pub csat_segments: Vec<CategoryCount>,
    pub wait_overall: CategoryMean,
    pub wait_by_department: Vec<CategoryMean>,
    pub wait_by_race: Vec<CategoryMean>,
    pub wait_bands: Vec<CategoryCount>,
    pub breach_overall: CategoryRate,
    pub breach_by_weekday: Vec<CategoryRate>,
    pub correlations: Vec<Correlation>,
}
