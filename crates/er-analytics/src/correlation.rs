//! Pearson correlation over encounter field pairs.

use er_model::{Correlation, Encounter};

/// Pearson correlation coefficient of two equal-length series.
///
/// Returns `None` for fewer than two pairs or when either series is
/// constant. The result is clamped to [-1, 1] so accumulated floating
/// error cannot push it outside the valid range.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }
    if variance_x == 0.0 || variance_y == 0.0 {
        return None;
    }
    Some((covariance / (variance_x * variance_y).sqrt()).clamp(-1.0, 1.0))
}

/// The fixed correlation pairs, with null sides excluded pairwise.
pub fn correlations(encounters: &[Encounter]) -> Vec<Correlation> {
    let scored: Vec<&Encounter> = encounters
        .iter()
        .filter(|encounter| encounter.is_scored())
        .collect();

    let wait_scored: Vec<f64> = scored
        .iter()
        .map(|encounter| f64::from(encounter.wait_minutes))
        .collect();
    let age_scored: Vec<f64> = scored
        .iter()
        .map(|encounter| f64::from(encounter.age))
        .collect();
    let scores: Vec<f64> = scored
        .iter()
        .filter_map(|encounter| encounter.satisfaction)
        .map(f64::from)
        .collect();

    let ages: Vec<f64> = encounters
        .iter()
        .map(|encounter| f64::from(encounter.age))
        .collect();
    let waits: Vec<f64> = encounters
        .iter()
        .map(|encounter| f64::from(encounter.wait_minutes))
        .collect();

    vec![
        Correlation {
            label: "Wait minutes vs satisfaction".to_string(),
            coefficient: pearson(&wait_scored, &scores),
            n: scores.len(),
        },
        Correlation {
            label: "Age vs satisfaction".to_string(),
            coefficient: pearson(&age_scored, &scores),
            n: scores.len(),
        },
        Correlation {
            label: "Age vs wait minutes".to_string(),
            coefficient: pearson(&ages, &waits),
            n: encounters.len(),
        },
    ]
}
