//! Satisfaction (CSAT) summaries.
//!
//! Null scores are excluded from every mean and from the segmentation
//! denominator; the response rate reports how many encounters carried a
//! score at all.

use std::collections::BTreeMap;

use er_model::{CategoryCount, CategoryMean, CsatOverall, CsatSegment, Encounter};

use crate::util::{mean, percent};

/// Overall mean score and survey response rate.
pub fn csat_overall(encounters: &[Encounter]) -> CsatOverall {
    let scores: Vec<f64> = encounters
        .iter()
        .filter_map(|encounter| encounter.satisfaction)
        .map(f64::from)
        .collect();
    CsatOverall {
        mean: mean(&scores),
        scored: scores.len(),
        response_pct: percent(scores.len(), encounters.len()),
    }
}

/// Mean score per self-reported race, ascending by label.
pub fn csat_by_race(encounters: &[Encounter]) -> Vec<CategoryMean> {
    grouped_mean(encounters, |encounter| encounter.race.as_str())
}

/// Mean score per department (no-referral bucket included).
pub fn csat_by_department(encounters: &[Encounter]) -> Vec<CategoryMean> {
    grouped_mean(encounters, Encounter::department_label)
}

/// Detractor / passive / promoter split over scored encounters.
pub fn csat_segments(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<CsatSegment, usize> = BTreeMap::new();
    let mut scored = 0usize;
    for encounter in encounters {
        let Some(score) = encounter.satisfaction else {
            continue;
        };
        scored += 1;
        if let Some(segment) = CsatSegment::from_score(score) {
            *counts.entry(segment).or_insert(0) += 1;
        }
    }
    CsatSegment::ALL
        .iter()
        .map(|segment| {
            let count = counts.get(segment).copied().unwrap_or(0);
            CategoryCount {
                label: segment.as_str().to_string(),
                count,
                percent: percent(count, scored),
            }
        })
        .collect()
}

fn grouped_mean<'a, F>(encounters: &'a [Encounter], key: F) -> Vec<CategoryMean>
where
    F: Fn(&'a Encounter) -> &'a str,
{
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for encounter in encounters {
        let Some(score) = encounter.satisfaction else {
            continue;
        };
        groups
            .entry(key(encounter))
            .or_default()
            .push(f64::from(score));
    }
    groups
        .into_iter()
        .filter_map(|(label, scores)| {
            mean(&scores).map(|value| CategoryMean {
                label: label.to_string(),
                mean: value,
                n: scores.len(),
            })
        })
        .collect()
}
