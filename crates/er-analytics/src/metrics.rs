//! Assemble every metric for one run.

use tracing::debug;

use er_model::{Encounter, MetricsBundle, Overview};

use crate::correlation::correlations;
use crate::demographics::{age_band_distribution, gender_mix, race_mix};
use crate::departments::{
    admission_by_age_band, admission_by_gender, admission_funnel, admission_overall,
    department_referrals,
};
use crate::satisfaction::{csat_by_department, csat_by_race, csat_overall, csat_segments};
use crate::volume::{hourly_volume, monthly_volume, weekday_hour_matrix, weekday_volume};
use crate::wait::{
    breach_by_weekday, breach_overall, wait_bands, wait_by_department, wait_by_race, wait_overall,
};

/// Compute the full metric set over the cleaned encounters.
///
/// Returns `None` when no encounter survived cleaning; there is nothing
/// meaningful to aggregate and callers treat it as a failed run.
pub fn compute_metrics(encounters: &[Encounter]) -> Option<MetricsBundle> {
    let first_date = encounters.iter().map(|encounter| encounter.date).min()?;
    let last_date = encounters
        .iter()
        .map(|encounter| encounter.date)
        .max()
        .unwrap_or(first_date);

    let overview = Overview {
        total_encounters: encounters.len(),
        first_date,
        last_date,
        admitted: encounters.iter().filter(|e| e.admitted).count(),
        scored: encounters.iter().filter(|e| e.is_scored()).count(),
    };
    debug!(
        total = overview.total_encounters,
        admitted = overview.admitted,
        scored = overview.scored,
        "computed overview"
    );

    let bundle = MetricsBundle {
        overview,
        monthly_volume: monthly_volume(encounters),
        weekday_volume: weekday_volume(encounters),
        hourly_volume: hourly_volume(encounters),
        weekday_hour: weekday_hour_matrix(encounters),
        gender_mix: gender_mix(encounters),
        age_bands: age_band_distribution(encounters),
        race_mix: race_mix(encounters),
        department_referrals: department_referrals(encounters),
        admission_funnel: admission_funnel(encounters),
        admission_overall: admission_overall(encounters),
        admission_by_gender: admission_by_gender(encounters),
        admission_by_age_band: admission_by_age_band(encounters),
        csat_overall: csat_overall(encounters),
        csat_by_race: csat_by_race(encounters),
        csat_by_department: csat_by_department(encounters),
        csat_segments: csat_segments(encounters),
        wait_overall: wait_overall(encounters),
        wait_by_department: wait_by_department(encounters),
        wait_by_race: wait_by_race(encounters),
        wait_bands: wait_bands(encounters),
        breach_overall: breach_overall(encounters),
        breach_by_weekday: breach_by_weekday(encounters),
        correlations: correlations(encounters),
    };
    debug!(
        departments = bundle.department_referrals.len(),
        races = bundle.race_mix.len(),
        "computed metric bundle"
    );
    Some(bundle)
}
