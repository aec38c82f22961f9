use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{info, info_span};

use er_analytics::{METRIC_CATALOG, compute_metrics};
use er_cli::pipeline::{IngestResult, OutputConfig, ingest, output};
use er_cli::summary::apply_table_style;
use er_cli::types::ReportResult;

use crate::cli::ReportArgs;

pub fn run_metrics() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Description"]);
    apply_table_style(&mut table);
    for metric in METRIC_CATALOG {
        table.add_row(vec![metric.name, metric.description]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let input = &args.input;
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        input
            .parent()
            .map(|parent| parent.join("output"))
            .unwrap_or_else(|| "output".into())
    });

    // =========================================================================
    // Stage 1: Ingest - load the CSV, clean rows, account for data quality
    // =========================================================================
    let ingest_span = info_span!("ingest", input = %input.display());
    let ingest_start = Instant::now();
    let IngestResult {
        encounters,
        quality,
        source_rows,
    } = ingest_span
        .in_scope(|| ingest(input))
        .with_context(|| format!("ingest {}", input.display()))?;
    info!(
        source_rows,
        kept_rows = quality.kept_rows,
        dropped_rows = quality.dropped_rows(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    if encounters.is_empty() {
        return Err(anyhow!(
            "no usable rows in {} ({} raw rows, all dropped)",
            input.display(),
            quality.raw_rows
        ));
    }

    // =========================================================================
    // Stage 2: Compute - the full aggregate metric set
    // =========================================================================
    let compute_span = info_span!("compute");
    let compute_start = Instant::now();
    let metrics = compute_span
        .in_scope(|| compute_metrics(&encounters))
        .ok_or_else(|| anyhow!("no encounters to aggregate"))?;
    info!(
        metric_count = METRIC_CATALOG.len(),
        duration_ms = compute_start.elapsed().as_millis(),
        "metrics computed"
    );

    // =========================================================================
    // Stage 3: Output - charts, markdown report, metrics JSON
    // =========================================================================
    let output_span = info_span!("output", output_dir = %output_dir.display());
    let output_start = Instant::now();
    let output_result = output_span.in_scope(|| {
        output(&OutputConfig {
            output_dir: &output_dir,
            bundle: &metrics,
            quality: &quality,
            encounters: &encounters,
            write_charts: !args.no_charts,
            write_markdown: !args.no_markdown,
            write_json: !args.no_json,
            dry_run: args.dry_run,
        })
    })?;
    info!(
        charts = output_result.charts.len(),
        dry_run = args.dry_run,
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    let errors = output_result.errors;
    Ok(ReportResult {
        source_file: input.clone(),
        output_dir,
        quality,
        metrics,
        charts: output_result.charts,
        report_md: output_result.report_md,
        metrics_json: output_result.metrics_json,
        has_errors: !errors.is_empty(),
        errors,
    })
}
