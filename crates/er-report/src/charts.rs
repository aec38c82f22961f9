//! Chart rendering for the fixed report image set.
//!
//! Five PNGs per run: three bar charts, the weekday-by-hour heatmap, and
//! the wait-versus-satisfaction scatter. Rendering uses the plotters
//! bitmap backend and needs no display.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use plotters::prelude::{
    BLACK, BitMapBackend, ChartBuilder, Circle, Color, IntoDrawingArea, IntoSegmentedCoord,
    RGBColor, Rectangle, SegmentValue, WHITE,
};
use tracing::debug;

use er_model::{CategoryCount, Encounter, MetricsBundle, WeekdayHourMatrix};

pub const MONTHLY_VOLUME_PNG: &str = "monthly_volume.png";
pub const DEPARTMENT_REFERRALS_PNG: &str = "department_referrals.png";
pub const AGE_BANDS_PNG: &str = "age_bands.png";
pub const WEEKDAY_HOUR_HEATMAP_PNG: &str = "weekday_hour_heatmap.png";
pub const WAIT_VS_SATISFACTION_PNG: &str = "wait_vs_satisfaction.png";

const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);
const HEAT_COLOR: RGBColor = RGBColor(220, 20, 60);

/// Weekday labels, Monday first, matching the matrix row order.
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn draw_error(what: &str, error: impl std::fmt::Display) -> anyhow::Error {
    anyhow!("{what}: {error}")
}

/// Render every chart into `output_dir` and return the written paths.
pub fn render_charts(
    bundle: &MetricsBundle,
    encounters: &[Encounter],
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    paths.push(render_bar_chart(
        &output_dir.join(MONTHLY_VOLUME_PNG),
        "Encounters per month",
        "Month",
        &bundle.monthly_volume,
    )?);
    paths.push(render_bar_chart(
        &output_dir.join(DEPARTMENT_REFERRALS_PNG),
        "Department referrals",
        "Department",
        &bundle.department_referrals,
    )?);
    paths.push(render_bar_chart(
        &output_dir.join(AGE_BANDS_PNG),
        "Encounters per age band",
        "Age band",
        &bundle.age_bands,
    )?);
    paths.push(render_heatmap(
        &output_dir.join(WEEKDAY_HOUR_HEATMAP_PNG),
        &bundle.weekday_hour,
    )?);
    paths.push(render_scatter(
        &output_dir.join(WAIT_VS_SATISFACTION_PNG),
        encounters,
    )?);
    debug!(count = paths.len(), "charts rendered");
    Ok(paths)
}

/// Vertical bar chart over labeled categories.
pub fn render_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    rows: &[CategoryCount],
) -> Result<PathBuf> {
    let root = BitMapBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|error| draw_error("fill chart background", error))?;
    let y_max = rows
        .iter()
        .map(|row| row.count as u32)
        .max()
        .unwrap_or(0)
        .max(1);
    let x_max = rows.len().max(1) as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(56)
        .y_label_area_size(64)
        .build_cartesian_2d((0u32..x_max).into_segmented(), 0u32..y_max + y_max / 10 + 1)
        .map_err(|error| draw_error("build chart axes", error))?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len().max(1))
        .x_label_formatter(&|value| {
            let index = match value {
                SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => *index as usize,
                SegmentValue::Last => return String::new(),
            };
            rows.get(index)
                .map(|row| row.label.clone())
                .unwrap_or_default()
        })
        .x_desc(x_desc)
        .y_desc("Encounters")
        .draw()
        .map_err(|error| draw_error("draw chart mesh", error))?;
    chart
        .draw_series(rows.iter().enumerate().map(|(index, row)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(index as u32), 0),
                    (SegmentValue::Exact(index as u32 + 1), row.count as u32),
                ],
                BAR_COLOR.filled(),
            )
        }))
        .map_err(|error| draw_error("draw bars", error))?;
    root.present()
        .map_err(|error| draw_error("write chart file", error))?;
    Ok(path.to_path_buf())
}

/// Weekday-by-hour heatmap. Monday is the top row.
pub fn render_heatmap(path: &Path, matrix: &WeekdayHourMatrix) -> Result<PathBuf> {
    let root = BitMapBackend::new(path, (1280, 480)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|error| draw_error("fill chart background", error))?;
    let max = matrix.max().max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption("Encounters by weekday and hour", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(0u32..24u32, 0u32..7u32)
        .map_err(|error| draw_error("build chart axes", error))?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(24)
        .y_labels(7)
        .x_label_formatter(&|hour| format!("{hour:02}"))
        .y_label_formatter(&|row| {
            WEEKDAYS
                .get(6usize.wrapping_sub(*row as usize))
                .map(|label| (*label).to_string())
                .unwrap_or_default()
        })
        .x_desc("Hour of day")
        .draw()
        .map_err(|error| draw_error("draw chart mesh", error))?;
    chart
        .draw_series((0u32..7).flat_map(|row| {
            (0u32..24).map(move |hour| {
                let weekday = 6 - row as usize;
                let count = matrix.get(weekday, hour as usize);
                let ratio = f64::from(count) / f64::from(max);
                Rectangle::new(
                    [(hour, row), (hour + 1, row + 1)],
                    heat_color(ratio).filled(),
                )
            })
        }))
        .map_err(|error| draw_error("draw heatmap cells", error))?;
    root.present()
        .map_err(|error| draw_error("write chart file", error))?;
    Ok(path.to_path_buf())
}

/// Wait versus satisfaction scatter over scored encounters.
pub fn render_scatter(path: &Path, encounters: &[Encounter]) -> Result<PathBuf> {
    let points: Vec<(f64, f64)> = encounters
        .iter()
        .filter_map(|encounter| {
            encounter
                .satisfaction
                .map(|score| (f64::from(encounter.wait_minutes), f64::from(score)))
        })
        .collect();
    let x_max = points
        .iter()
        .map(|(wait, _)| *wait)
        .fold(0.0f64, f64::max)
        .max(10.0);

    let root = BitMapBackend::new(path, (900, 640)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|error| draw_error("fill chart background", error))?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Wait time vs satisfaction", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0f64..x_max * 1.05, 0.0f64..10.5f64)
        .map_err(|error| draw_error("build chart axes", error))?;
    chart
        .configure_mesh()
        .x_desc("Wait minutes")
        .y_desc("Satisfaction score")
        .draw()
        .map_err(|error| draw_error("draw chart mesh", error))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 4, BAR_COLOR.mix(0.45).filled())),
        )
        .map_err(|error| draw_error("draw scatter points", error))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 4, BLACK.mix(0.12))),
        )
        .map_err(|error| draw_error("draw point outlines", error))?;
    root.present()
        .map_err(|error| draw_error("write chart file", error))?;
    Ok(path.to_path_buf())
}

/// Linear white-to-red ramp over a 0-1 ratio.
fn heat_color(ratio: f64) -> RGBColor {
    let clamped = ratio.clamp(0.0, 1.0);
    let blend = |target: u8| {
        let base = 255.0;
        (base - (base - f64::from(target)) * clamped).round() as u8
    };
    RGBColor(blend(HEAT_COLOR.0), blend(HEAT_COLOR.1), blend(HEAT_COLOR.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_ramp_endpoints() {
        assert_eq!(heat_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(heat_color(1.0), HEAT_COLOR);
        assert_eq!(heat_color(-2.0), RGBColor(255, 255, 255));
        assert_eq!(heat_color(5.0), HEAT_COLOR);
    }

    #[test]
    fn heat_ramp_is_monotonic_toward_red() {
        let low = heat_color(0.2);
        let high = heat_color(0.8);
        assert!(high.1 < low.1);
        assert!(high.2 < low.2);
    }
}
