//! Console rendering of the computed metrics.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use er_ingest::format_numeric;
use er_model::{CategoryCount, CategoryMean, CategoryRate, FunnelStage};

use crate::types::ReportResult;

pub fn print_summary(result: &ReportResult) {
    let overview = &result.metrics.overview;
    println!("Source: {}", result.source_file.display());
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.report_md {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &result.metrics_json {
        println!("Metrics: {}", path.display());
    }
    println!(
        "Encounters: {} between {} and {}",
        overview.total_encounters, overview.first_date, overview.last_date
    );

    print_quality(result);

    print_count_table("Monthly volume", "Month", &result.metrics.monthly_volume);
    print_count_table("Volume by weekday", "Weekday", &result.metrics.weekday_volume);
    print_count_table("Volume by hour", "Hour", &result.metrics.hourly_volume);
    print_count_table("Gender mix", "Gender", &result.metrics.gender_mix);
    print_count_table("Age bands", "Age band", &result.metrics.age_bands);
    print_count_table("Race distribution", "Race", &result.metrics.race_mix);
    print_count_table(
        "Department referrals",
        "Department",
        &result.metrics.department_referrals,
    );
    print_funnel_table(&result.metrics.admission_funnel);
    print_rate_table(
        "Admission rate",
        "Group",
        std::iter::once(&result.metrics.admission_overall)
            .chain(&result.metrics.admission_by_gender)
            .chain(&result.metrics.admission_by_age_band),
    );
    print_csat(result);
    print_mean_table(
        "Satisfaction by race",
        "Race",
        "Mean score",
        &result.metrics.csat_by_race,
    );
    print_mean_table(
        "Satisfaction by department",
        "Department",
        "Mean score",
        &result.metrics.csat_by_department,
    );
    print_count_table("Satisfaction segments", "Segment", &result.metrics.csat_segments);
    print_mean_table(
        "Wait by department",
        "Department",
        "Mean wait (min)",
        &result.metrics.wait_by_department,
    );
    print_mean_table(
        "Wait by race",
        "Race",
        "Mean wait (min)",
        &result.metrics.wait_by_race,
    );
    print_count_table("Wait bands", "Wait (min)", &result.metrics.wait_bands);
    print_rate_table(
        "Breach rate (wait > 60 min)",
        "Group",
        std::iter::once(&result.metrics.breach_overall)
            .chain(&result.metrics.breach_by_weekday),
    );
    print_correlations(result);

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_quality(result: &ReportResult) {
    let quality = &result.quality;
    println!(
        "Rows: {} raw, {} kept, {} dropped ({} unreferred, {} unscored)",
        quality.raw_rows,
        quality.kept_rows,
        quality.dropped_rows(),
        quality.no_referral_rows,
        quality.unscored_rows
    );
    if !quality.has_issues() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in &quality.issues {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.field),
            Cell::new(&issue.message).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Dropped rows:");
    println!("{table}");
}

fn print_count_table(title: &str, head: &str, rows: &[CategoryCount]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(head),
        header_cell("Encounters"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total = 0usize;
    for row in rows {
        total += row.count;
        table.add_row(vec![
            Cell::new(&row.label),
            count_cell(row.count),
            Cell::new(format_pct(row.percent)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_mean_table(title: &str, head: &str, value_head: &str, rows: &[CategoryMean]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(head),
        header_cell(value_head),
        header_cell("N"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(format_numeric((row.mean * 100.0).round() / 100.0)),
            Cell::new(row.n),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_rate_table<'a>(
    title: &str,
    head: &str,
    rows: impl Iterator<Item = &'a CategoryRate>,
) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(head),
        header_cell("Hits"),
        header_cell("Total"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            count_cell(row.hits),
            Cell::new(row.total),
            Cell::new(format_pct(row.percent)),
        ]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_funnel_table(stages: &[FunnelStage]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Referred"),
        header_cell("Admitted"),
        header_cell("Admission rate"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for stage in stages {
        table.add_row(vec![
            Cell::new(&stage.department)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stage.referred),
            count_cell(stage.admitted),
            Cell::new(format_pct(stage.admission_pct)),
        ]);
    }
    println!();
    println!("Referral-to-admission funnel:");
    println!("{table}");
}

fn print_csat(result: &ReportResult) {
    let csat = &result.metrics.csat_overall;
    println!();
    match csat.mean {
        Some(mean) => println!(
            "Satisfaction: mean {} over {} responses ({} response rate)",
            format_numeric((mean * 100.0).round() / 100.0),
            csat.scored,
            format_pct(csat.response_pct)
        ),
        None => println!("Satisfaction: no scored encounters"),
    }
    let wait = &result.metrics.wait_overall;
    println!(
        "Wait: mean {} minutes over {} encounters",
        format_numeric((wait.mean * 10.0).round() / 10.0),
        wait.n
    );
}

fn print_correlations(result: &ReportResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pair"),
        header_cell("Pearson r"),
        header_cell("N"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for correlation in &result.metrics.correlations {
        let value_cell = match correlation.coefficient {
            Some(value) => Cell::new(format_numeric((value * 1000.0).round() / 1000.0)),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&correlation.label),
            value_cell,
            Cell::new(correlation.n),
        ]);
    }
    println!();
    println!("Correlations:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value == 0 {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}
