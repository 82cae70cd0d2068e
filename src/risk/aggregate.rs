use crate::core::{ComputedModuleRisk, OverallRisk};

use super::classify;

/// Project-level risk: the rounded mean of module scores, classified.
///
/// The status classifies the mean; it is not a vote among module levels.
/// An empty collection yields [`OverallRisk::default`] (score 0, LOW).
pub fn overall_risk(modules: &[ComputedModuleRisk]) -> OverallRisk {
    if modules.is_empty() {
        return OverallRisk::default();
    }

    let total: i64 = modules.iter().map(ComputedModuleRisk::risk_score).sum();
    let mean = total as f64 / modules.len() as f64;
    let score = mean.round() as i64;
    let status = classify(score);

    OverallRisk {
        score,
        level: status.banner(),
        status,
    }
}
