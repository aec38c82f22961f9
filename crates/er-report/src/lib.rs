//! Report generation for the encounter analytics run.
//!
//! Three output surfaces share the computed metric bundle:
//!
//! - **Charts**: a fixed set of PNG images via the plotters bitmap backend
//! - **Markdown**: a narrative report with tables and interpretation
//! - **JSON**: the raw metrics for downstream consumption

mod charts;
mod markdown;
mod metrics_json;

pub use charts::{
    AGE_BANDS_PNG, DEPARTMENT_REFERRALS_PNG, MONTHLY_VOLUME_PNG, WAIT_VS_SATISFACTION_PNG,
    WEEKDAY_HOUR_HEATMAP_PNG, render_bar_chart, render_charts, render_heatmap, render_scatter,
};
pub use markdown::{REPORT_MD, render_markdown_report, write_markdown_report};
pub use metrics_json::{METRICS_JSON, write_metrics_json};
