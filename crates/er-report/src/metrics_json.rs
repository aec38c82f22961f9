//! JSON dump of the computed metrics for downstream consumption.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use er_model::MetricsBundle;

/// Default metrics file name.
pub const METRICS_JSON: &str = "metrics.json";

/// Serialize the metric bundle as pretty JSON and return the path.
pub fn write_metrics_json(bundle: &MetricsBundle, path: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(bundle).context("serialize metrics")?;
    fs::write(path, json).with_context(|| format!("write metrics: {}", path.display()))?;
    debug!(path = %path.display(), "metrics json written");
    Ok(path.to_path_buf())
}
