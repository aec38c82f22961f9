//! Pipeline stage functions for the report run.
//!
//! Three stages: ingest the CSV into typed encounters, compute the metric
//! bundle, write the requested outputs. Output failures are collected per
//! surface so one bad chart does not abandon the markdown report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use er_ingest::{decode_encounters, load_encounter_frame};
use er_model::{Encounter, MetricsBundle, QualityReport};
use er_report::{
    METRICS_JSON, REPORT_MD, render_charts, write_markdown_report, write_metrics_json,
};

/// Outcome of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub encounters: Vec<Encounter>,
    pub quality: QualityReport,
    pub source_rows: usize,
}

/// Load and clean the input file.
pub fn ingest(path: &Path) -> Result<IngestResult> {
    let frame = load_encounter_frame(path)?;
    let source_rows = frame.record_count();
    let (encounters, quality) = decode_encounters(&frame);
    Ok(IngestResult {
        encounters,
        quality,
        source_rows,
    })
}

/// What the output stage should write.
#[derive(Debug)]
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    pub bundle: &'a MetricsBundle,
    pub quality: &'a QualityReport,
    pub encounters: &'a [Encounter],
    pub write_charts: bool,
    pub write_markdown: bool,
    pub write_json: bool,
    pub dry_run: bool,
}

/// Paths written by the output stage, plus per-surface errors.
#[derive(Debug, Default)]
pub struct OutputResult {
    pub charts: Vec<PathBuf>,
    pub report_md: Option<PathBuf>,
    pub metrics_json: Option<PathBuf>,
    pub errors: Vec<String>,
}

/// Write the requested report surfaces into the output directory.
///
/// A dry run skips every write. Chart, markdown, and JSON failures are
/// recorded in `errors` rather than aborting the run.
pub fn output(config: &OutputConfig<'_>) -> Result<OutputResult> {
    let mut result = OutputResult::default();
    if config.dry_run {
        return Ok(result);
    }
    fs::create_dir_all(config.output_dir)
        .with_context(|| format!("create output dir: {}", config.output_dir.display()))?;

    if config.write_charts {
        match render_charts(config.bundle, config.encounters, config.output_dir) {
            Ok(paths) => result.charts = paths,
            Err(error) => {
                warn!(%error, "chart rendering failed");
                result.errors.push(format!("charts: {error}"));
            }
        }
    }
    if config.write_markdown {
        let path = config.output_dir.join(REPORT_MD);
        match write_markdown_report(config.bundle, config.quality, &path) {
            Ok(path) => result.report_md = Some(path),
            Err(error) => {
                warn!(%error, "markdown report failed");
                result.errors.push(format!("report: {error}"));
            }
        }
    }
    if config.write_json {
        let path = config.output_dir.join(METRICS_JSON);
        match write_metrics_json(config.bundle, &path) {
            Ok(path) => result.metrics_json = Some(path),
            Err(error) => {
                warn!(%error, "metrics json failed");
                result.errors.push(format!("metrics: {error}"));
            }
        }
    }
    Ok(result)
}
