//! Encounter volume over time: monthly trend, weekday and hour
//! distributions, and the weekday-by-hour matrix behind the heatmap.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike, Weekday};

use er_model::{CategoryCount, Encounter, WeekdayHourMatrix};

use crate::util::percent;

/// Weekday labels in matrix row order.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Matrix row index for a weekday (Monday first).
pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

/// Encounter counts per calendar month, ascending by year-month.
pub fn monthly_volume(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut groups: BTreeMap<String, usize> = BTreeMap::new();
    for encounter in encounters {
        let key = format!(
            "{:04}-{:02}",
            encounter.date.year(),
            encounter.date.month()
        );
        *groups.entry(key).or_insert(0) += 1;
    }
    let total = encounters.len();
    groups
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label,
            count,
            percent: percent(count, total),
        })
        .collect()
}

/// Encounter counts per weekday, Monday through Sunday.
pub fn weekday_volume(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut counts = [0usize; 7];
    for encounter in encounters {
        counts[weekday_index(encounter.date.weekday())] += 1;
    }
    let total = encounters.len();
    WEEKDAY_LABELS
        .iter()
        .zip(counts)
        .map(|(label, count)| CategoryCount {
            label: (*label).to_string(),
            count,
            percent: percent(count, total),
        })
        .collect()
}

/// Encounter counts per hour of day, 0 through 23.
pub fn hourly_volume(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut counts = [0usize; 24];
    for encounter in encounters {
        counts[encounter.time.hour() as usize] += 1;
    }
    let total = encounters.len();
    counts
        .iter()
        .enumerate()
        .map(|(hour, count)| CategoryCount {
            label: format!("{hour:02}"),
            count: *count,
            percent: percent(*count, total),
        })
        .collect()
}

/// Dense weekday-by-hour counts for the heatmap.
pub fn weekday_hour_matrix(encounters: &[Encounter]) -> WeekdayHourMatrix {
    let mut matrix = WeekdayHourMatrix::default();
    for encounter in encounters {
        let row = weekday_index(encounter.date.weekday());
        let column = encounter.time.hour() as usize;
        matrix.counts[row][column] += 1;
    }
    matrix
}
