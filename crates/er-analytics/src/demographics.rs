//! Who shows up: gender mix, age bands, and race distribution.

use std::collections::BTreeMap;

use er_model::{AgeBand, CategoryCount, Encounter, Gender};

use crate::util::percent;

/// Encounter counts per gender, in capture-code order.
pub fn gender_mix(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let total = encounters.len();
    Gender::ALL
        .iter()
        .map(|gender| {
            let count = encounters
                .iter()
                .filter(|encounter| encounter.gender == *gender)
                .count();
            CategoryCount {
                label: gender.as_str().to_string(),
                count,
                percent: percent(count, total),
            }
        })
        .collect()
}

/// Encounter counts per ten-year age band, youngest first.
///
/// Every band appears even when empty so the partition stays visible.
pub fn age_band_distribution(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<AgeBand, usize> = BTreeMap::new();
    for encounter in encounters {
        if let Some(band) = AgeBand::from_age(encounter.age) {
            *counts.entry(band).or_insert(0) += 1;
        }
    }
    let total = encounters.len();
    AgeBand::ALL
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

/// Encounter counts per self-reported race with each group's share of the
/// total, descending by count.
pub fn race_mix(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for encounter in encounters {
        *groups.entry(encounter.race.as_str()).or_insert(0) += 1;
    }
    let total = encounters.len();
    let mut rows: Vec<CategoryCount> = groups
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
            percent: percent(count, total),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}
