use std::path::PathBuf;

use er_model::{MetricsBundle, QualityReport};

/// Everything a finished report run produced.
#[derive(Debug)]
pub struct ReportResult {
    pub source_file: PathBuf,
    pub output_dir: PathBuf,
    pub quality: QualityReport,
    pub metrics: MetricsBundle,
    pub charts: Vec<PathBuf>,
    pub report_md: Option<PathBuf>,
    pub metrics_json: Option<PathBuf>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
