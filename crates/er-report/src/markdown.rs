//! Narrative markdown report.
//!
//! Renders every metric table together with a short interpretation line,
//! so the written report reads as an analysis rather than a data dump.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use er_ingest::format_numeric;
use er_model::{
    CategoryCount, CategoryMean, CategoryRate, MetricsBundle, QualityReport, WeekdayHourMatrix,
};

/// Default report file name.
pub const REPORT_MD: &str = "report.md";

/// Write the narrative report and return its path.
pub fn write_markdown_report(
    bundle: &MetricsBundle,
    quality: &QualityReport,
    path: &Path,
) -> Result<PathBuf> {
    let contents = render_markdown_report(bundle, quality);
    fs::write(path, contents).with_context(|| format!("write report: {}", path.display()))?;
    debug!(path = %path.display(), "markdown report written");
    Ok(path.to_path_buf())
}

/// Render the full report as a markdown string.
pub fn render_markdown_report(bundle: &MetricsBundle, quality: &QualityReport) -> String {
    let mut out = String::new();
    let overview = &bundle.overview;

    let _ = writeln!(out, "# Emergency Department Encounter Report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} encounters between {} and {}. {} ({}) ended in admission; \
         {} ({}) answered the satisfaction survey.",
        overview.total_encounters,
        overview.first_date,
        overview.last_date,
        overview.admitted,
        pct(bundle.admission_overall.percent),
        overview.scored,
        pct(bundle.csat_overall.response_pct),
    );

    if quality.dropped_rows() > 0 || quality.no_referral_rows > 0 {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Data quality: {} of {} raw rows kept, {} dropped as malformed; \
             {} encounters had no department referral and {} carried no score.",
            quality.kept_rows,
            quality.raw_rows,
            quality.dropped_rows(),
            quality.no_referral_rows,
            quality.unscored_rows,
        );
    }

    section_counts(
        &mut out,
        "Monthly volume",
        "Month",
        &bundle.monthly_volume,
        busiest_line("month", &bundle.monthly_volume),
    );
    section_counts(
        &mut out,
        "Volume by weekday",
        "Weekday",
        &bundle.weekday_volume,
        busiest_line("weekday", &bundle.weekday_volume),
    );
    section_counts(
        &mut out,
        "Volume by hour",
        "Hour",
        &bundle.hourly_volume,
        busiest_line("hour", &bundle.hourly_volume),
    );
    section_heatmap(&mut out, &bundle.weekday_hour);

    section_counts(
        &mut out,
        "Gender mix",
        "Gender",
        &bundle.gender_mix,
        String::new(),
    );
    section_counts(
        &mut out,
        "Age bands",
        "Age band",
        &bundle.age_bands,
        busiest_line("age band", &bundle.age_bands),
    );
    section_counts(
        &mut out,
        "Race distribution",
        "Race",
        &bundle.race_mix,
        String::new(),
    );

    section_counts(
        &mut out,
        "Department referrals",
        "Department",
        &bundle.department_referrals,
        busiest_line("department", &bundle.department_referrals),
    );
    section_funnel(&mut out, bundle);
    section_rates(
        &mut out,
        "Admission rate by gender",
        "Gender",
        "Admitted",
        &bundle.admission_by_gender,
    );
    section_rates(
        &mut out,
        "Admission rate by age band",
        "Age band",
        "Admitted",
        &bundle.admission_by_age_band,
    );

    section_csat(&mut out, bundle);
    section_means(
        &mut out,
        "Satisfaction by race",
        "Race",
        "Mean score",
        &bundle.csat_by_race,
    );
    section_means(
        &mut out,
        "Satisfaction by department",
        "Department",
        "Mean score",
        &bundle.csat_by_department,
    );
    section_counts(
        &mut out,
        "Satisfaction segments",
        "Segment",
        &bundle.csat_segments,
        detractor_line(&bundle.csat_segments),
    );

    section_wait(&mut out, bundle);
    section_means(
        &mut out,
        "Wait by department",
        "Department",
        "Mean wait (min)",
        &bundle.wait_by_department,
    );
    section_means(
        &mut out,
        "Wait by race",
        "Race",
        "Mean wait (min)",
        &bundle.wait_by_race,
    );
    section_counts(
        &mut out,
        "Wait bands",
        "Wait (min)",
        &bundle.wait_bands,
        String::new(),
    );
    section_rates(
        &mut out,
        "Breach rate by weekday",
        "Weekday",
        "Breaches",
        &bundle.breach_by_weekday,
    );

    section_correlations(&mut out, bundle);
    out
}

fn section_counts(
    out: &mut String,
    title: &str,
    head: &str,
    rows: &[CategoryCount],
    narrative: String,
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "| {head} | Encounters | Share |");
    let _ = writeln!(out, "| --- | ---: | ---: |");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            row.label,
            row.count,
            pct(row.percent)
        );
    }
    if !narrative.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{narrative}");
    }
}

fn section_means(
    out: &mut String,
    title: &str,
    head: &str,
    value_head: &str,
    rows: &[CategoryMean],
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "| {head} | {value_head} | N |");
    let _ = writeln!(out, "| --- | ---: | ---: |");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            row.label,
            format_numeric((row.mean * 100.0).round() / 100.0),
            row.n
        );
    }
}

fn section_rates(
    out: &mut String,
    title: &str,
    head: &str,
    hits_head: &str,
    rows: &[CategoryRate],
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "| {head} | {hits_head} | Total | Rate |");
    let _ = writeln!(out, "| --- | ---: | ---: | ---: |");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            row.label,
            row.hits,
            row.total,
            pct(row.percent)
        );
    }
}

fn section_heatmap(out: &mut String, matrix: &WeekdayHourMatrix) {
    let peak = matrix.max();
    let mut peak_cell = (0usize, 0usize);
    for (weekday, row) in matrix.counts.iter().enumerate() {
        for (hour, count) in row.iter().enumerate() {
            if *count == peak {
                peak_cell = (weekday, hour);
            }
        }
    }
    const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let _ = writeln!(out);
    let _ = writeln!(out, "## Weekday and hour pattern");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "The busiest single cell is {} at {:02}:00 with {} encounters \
         (see `weekday_hour_heatmap.png`).",
        WEEKDAYS[peak_cell.0], peak_cell.1, peak
    );
}

fn section_funnel(out: &mut String, bundle: &MetricsBundle) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## Referral-to-admission funnel");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Department | Referred | Admitted | Admission rate |");
    let _ = writeln!(out, "| --- | ---: | ---: | ---: |");
    for stage in &bundle.admission_funnel {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            stage.department,
            stage.referred,
            stage.admitted,
            pct(stage.admission_pct)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Across all encounters the admission rate is {} ({} of {}).",
        pct(bundle.admission_overall.percent),
        bundle.admission_overall.hits,
        bundle.admission_overall.total
    );
}

fn section_csat(out: &mut String, bundle: &MetricsBundle) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## Satisfaction");
    let _ = writeln!(out);
    match bundle.csat_overall.mean {
        Some(mean) => {
            let _ = writeln!(
                out,
                "Mean satisfaction is {} over {} responses, a {} response rate.",
                format_numeric((mean * 100.0).round() / 100.0),
                bundle.csat_overall.scored,
                pct(bundle.csat_overall.response_pct)
            );
        }
        None => {
            let _ = writeln!(out, "No encounter carried a satisfaction score.");
        }
    }
}

fn section_wait(out: &mut String, bundle: &MetricsBundle) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## Wait time");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Mean wait is {} minutes. {} of {} encounters ({}) waited past \
         the 60-minute breach threshold.",
        format_numeric((bundle.wait_overall.mean * 10.0).round() / 10.0),
        bundle.breach_overall.hits,
        bundle.breach_overall.total,
        pct(bundle.breach_overall.percent)
    );
}

fn section_correlations(out: &mut String, bundle: &MetricsBundle) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## Correlations");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Pair | Pearson r | N |");
    let _ = writeln!(out, "| --- | ---: | ---: |");
    for correlation in &bundle.correlations {
        let value = correlation
            .coefficient
            .map(|coefficient| format_numeric((coefficient * 1000.0).round() / 1000.0))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "| {} | {} | {} |", correlation.label, value, correlation.n);
    }
    for correlation in &bundle.correlations {
        if let Some(coefficient) = correlation.coefficient {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{} shows a {} relationship (r = {}).",
                correlation.label,
                describe_strength(coefficient),
                format_numeric((coefficient * 1000.0).round() / 1000.0)
            );
        }
    }
}

fn busiest_line(noun: &str, rows: &[CategoryCount]) -> String {
    rows.iter()
        .max_by_key(|row| row.count)
        .map(|row| {
            format!(
                "The busiest {noun} is {} with {} encounters ({}).",
                row.label,
                row.count,
                pct(row.percent)
            )
        })
        .unwrap_or_default()
}

fn detractor_line(segments: &[CategoryCount]) -> String {
    segments
        .iter()
        .find(|segment| segment.label == "Detractor")
        .map(|segment| {
            format!(
                "{} of scored encounters ({}) are detractors with a score of 4 or below.",
                segment.count,
                pct(segment.percent)
            )
        })
        .unwrap_or_default()
}

/// Plain-language strength wording for a Pearson coefficient.
fn describe_strength(coefficient: f64) -> String {
    let direction = if coefficient >= 0.0 {
        "positive"
    } else {
        "negative"
    };
    let strength = match coefficient.abs() {
        value if value < 0.1 => "negligible",
        value if value < 0.3 => "weak",
        value if value < 0.6 => "moderate",
        _ => "strong",
    };
    format!("{strength} {direction}")
}

fn pct(value: f64) -> String {
    format!("{value:.1}%")
}
