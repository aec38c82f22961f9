//! Wait-time summaries: grouped means, the five wait bands, and breach
//! rates against the 60-minute threshold.

use std::collections::BTreeMap;

use chrono::Datelike;

use er_model::{CategoryCount, CategoryMean, CategoryRate, Encounter, WaitBand};

use crate::util::{mean, percent};
use crate::volume::{WEEKDAY_LABELS, weekday_index};

/// Mean wait over all encounters.
pub fn wait_overall(encounters: &[Encounter]) -> CategoryMean {
    let waits: Vec<f64> = encounters
        .iter()
        .map(|encounter| f64::from(encounter.wait_minutes))
        .collect();
    CategoryMean {
        label: "All encounters".to_string(),
        mean: mean(&waits).unwrap_or(0.0),
        n: waits.len(),
    }
}

/// Mean wait per department (no-referral bucket included).
pub fn wait_by_department(encounters: &[Encounter]) -> Vec<CategoryMean> {
    grouped_wait_mean(encounters, Encounter::department_label)
}

/// Mean wait per self-reported race, ascending by label.
pub fn wait_by_race(encounters: &[Encounter]) -> Vec<CategoryMean> {
    grouped_wait_mean(encounters, |encounter| encounter.race.as_str())
}

/// Encounter counts over the five wait bands, shortest first.
pub fn wait_bands(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<WaitBand, usize> = BTreeMap::new();
    for encounter in encounters {
        *counts
            .entry(WaitBand::from_minutes(encounter.wait_minutes))
            .or_insert(0) += 1;
    }
    let total = encounters.len();
    WaitBand::ALL
        .iter()
        .map(|band| {
            let count = counts.get(band).copied().unwrap_or(0);
            CategoryCount {
                label: band.as_str().to_string(),
                count,
                percent: percent(count, total),
            }
        })
        .collect()
}

/// Overall share of encounters whose wait breached the threshold.
pub fn breach_overall(encounters: &[Encounter]) -> CategoryRate {
    let breaches = encounters.iter().filter(|e| e.is_breach()).count();
    CategoryRate {
        label: "All encounters".to_string(),
        hits: breaches,
        total: encounters.len(),
        percent: percent(breaches, encounters.len()),
    }
}

/// Breach rate per weekday, Monday through Sunday.
pub fn breach_by_weekday(encounters: &[Encounter]) -> Vec<CategoryRate> {
    let mut totals = [0usize; 7];
    let mut breaches = [0usize; 7];
    for encounter in encounters {
        let index = weekday_index(encounter.date.weekday());
        totals[index] += 1;
        if encounter.is_breach() {
            breaches[index] += 1;
        }
    }
    WEEKDAY_LABELS
        .iter()
        .zip(totals.iter().zip(breaches))
        .map(|(label, (total, hits))| CategoryRate {
            label: (*label).to_string(),
            hits,
            total: *total,
            percent: percent(hits, *total),
        })
        .collect()
}

fn grouped_wait_mean<'a, F>(encounters: &'a [Encounter], key: F) -> Vec<CategoryMean>
where
    F: Fn(&'a Encounter) -> &'a str,
{
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for encounter in encounters {
        groups
            .entry(key(encounter))
            .or_default()
            .push(f64::from(encounter.wait_minutes));
    }
    groups
        .into_iter()
        .filter_map(|(label, waits)| {
            mean(&waits).map(|value| CategoryMean {
                label: label.to_string(),
                mean: value,
                n: waits.len(),
            })
        })
        .collect()
}
