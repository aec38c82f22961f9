pub mod catalog;
pub mod correlation;
pub mod demographics;
pub mod departments;
pub mod metrics;
pub mod satisfaction;
pub mod util;
pub mod volume;
pub mod wait;

pub use catalog::{METRIC_CATALOG, MetricInfo};
pub use correlation::{correlations, pearson};
pub use metrics::compute_metrics;
pub use volume::{WEEKDAY_LABELS, weekday_index};
