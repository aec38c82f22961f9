//! Catalog of the supported metric computations.

/// Name and description of one metric computation.
#[derive(Debug, Clone, Copy)]
pub struct MetricInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every computation a run produces, in presentation order.
pub const METRIC_CATALOG: [MetricInfo; 24] = [
    MetricInfo {
        name: "overview",
        description: "Total encounters, date span, admissions, survey responses",
    },
    MetricInfo {
        name: "monthly_volume",
        description: "Encounters per calendar month",
    },
    MetricInfo {
        name: "weekday_volume",
        description: "Encounters per weekday",
    },
    MetricInfo {
        name: "hourly_volume",
        description: "Encounters per hour of day",
    },
    MetricInfo {
        name: "weekday_hour",
        description: "Encounter counts by weekday and hour (heatmap)",
    },
    MetricInfo {
        name: "gender_mix",
        description: "Encounters by gender with share of total",
    },
    MetricInfo {
        name: "age_bands",
        description: "Encounters by ten-year age band",
    },
    MetricInfo {
        name: "race_mix",
        description: "Encounters by self-reported race with share of total",
    },
    MetricInfo {
        name: "department_referrals",
        description: "Referrals per department, nulls under the None bucket",
    },
    MetricInfo {
        name: "admission_funnel",
        description: "Referred to admitted counts per department",
    },
    MetricInfo {
        name: "admission_overall",
        description: "Share of encounters admitted",
    },
    MetricInfo {
        name: "admission_by_gender",
        description: "Admission rate per gender",
    },
    MetricInfo {
        name: "admission_by_age_band",
        description: "Admission rate per age band",
    },
    MetricInfo {
        name: "csat_overall",
        description: "Mean satisfaction score and survey response rate",
    },
    MetricInfo {
        name: "csat_by_race",
        description: "Mean satisfaction score per race",
    },
    MetricInfo {
        name: "csat_by_department",
        description: "Mean satisfaction score per department",
    },
    MetricInfo {
        name: "csat_segments",
        description: "Detractor, passive, and promoter split of scored encounters",
    },
    MetricInfo {
        name: "wait_overall",
        description: "Mean wait in minutes",
    },
    MetricInfo {
        name: "wait_by_department",
        description: "Mean wait per department",
    },
    MetricInfo {
        name: "wait_by_race",
        description: "Mean wait per race",
    },
    MetricInfo {
        name: "wait_bands",
        description: "Encounters over the five wait-time bands",
    },
    MetricInfo {
        name: "breach_overall",
        description: "Share of waits above 60 minutes",
    },
    MetricInfo {
        name: "breach_by_weekday",
        description: "Breach rate per weekday",
    },
    MetricInfo {
        name: "correlations",
        description: "Pearson correlation over wait, age, and satisfaction",
    },
];
