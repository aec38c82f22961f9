//! Department referrals and admission outcomes.

use std::collections::BTreeMap;

use er_model::{AgeBand, CategoryCount, CategoryRate, Encounter, FunnelStage, Gender};

use crate::util::percent;

/// Encounter counts per referred department, descending. Encounters
/// without a referral appear under the coalesced no-referral label.
pub fn department_referrals(encounters: &[Encounter]) -> Vec<CategoryCount> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for encounter in encounters {
        *groups.entry(encounter.department_label()).or_insert(0) += 1;
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

/// Referred-to-admitted funnel per department, descending by referrals.
///
/// Only encounters with an actual referral take part; the no-referral
/// bucket is not a funnel stage.
pub fn admission_funnel(encounters: &[Encounter]) -> Vec<FunnelStage> {
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for encounter in encounters {
        let Some(department) = encounter.department.as_deref() else {
            continue;
        };
        let entry = groups.entry(department).or_insert((0, 0));
        entry.0 += 1;
        if encounter.admitted {
            entry.1 += 1;
        }
    }
    let mut stages: Vec<FunnelStage> = groups
        .into_iter()
        .map(|(department, (referred, admitted))| FunnelStage {
            department: department.to_string(),
            referred,
            admitted,
            admission_pct: percent(admitted, referred),
        })
        .collect();
    stages.sort_by(|a, b| {
        b.referred
            .cmp(&a.referred)
            .then_with(|| a.department.cmp(&b.department))
    });
    stages
}

/// Overall share of encounters that ended in admission.
pub fn admission_overall(encounters: &[Encounter]) -> CategoryRate {
    let admitted = encounters.iter().filter(|e| e.admitted).count();
    CategoryRate {
        label: "All encounters".to_string(),
        hits: admitted,
        total: encounters.len(),
        percent: percent(admitted, encounters.len()),
    }
}

/// Admission rate per gender.
pub fn admission_by_gender(encounters: &[Encounter]) -> Vec<CategoryRate> {
    Gender::ALL
        .iter()
        .map(|gender| {
            let total = encounters
                .iter()
                .filter(|encounter| encounter.gender == *gender)
                .count();
            let hits = encounters
                .iter()
                .filter(|encounter| encounter.gender == *gender && encounter.admitted)
                .count();
            CategoryRate {
                label: gender.as_str().to_string(),
                hits,
                total,
                percent: percent(hits, total),
            }
        })
        .collect()
}

/// Admission rate per ten-year age band.
pub fn admission_by_age_band(encounters: &[Encounter]) -> Vec<CategoryRate> {
    AgeBand::ALL
        .iter()
        .map(|band| {
            let in_band = |encounter: &&Encounter| AgeBand::from_age(encounter.age) == Some(*band);
            let total = encounters.iter().filter(in_band).count();
            let hits = encounters
                .iter()
                .filter(in_band)
                .filter(|encounter| encounter.admitted)
                .count();
            CategoryRate {
                label: band.as_str().to_string(),
                hits,
                total,
                percent: percent(hits, total),
            }
        })
        .collect()
}
