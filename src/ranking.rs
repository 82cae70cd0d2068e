//! Module ranking by risk score.

use crate::core::ComputedModuleRisk;

/// Number of modules shown in the risk bar chart.
pub const DEFAULT_TOP_MODULES: usize = 6;

/// Sorts modules by risk score, highest first.
///
/// The sort is stable: modules with equal scores keep their input order.
pub fn rank(modules: &[ComputedModuleRisk]) -> Vec<ComputedModuleRisk> {
    let mut ranked = modules.to_vec();
    ranked.sort_by(|a, b| b.risk_score().cmp(&a.risk_score()));
    tracing::debug!(modules = ranked.len(), "ranked modules by risk score");
    ranked
}

/// The first `n` entries of an already ranked sequence.
pub fn top_n(ranked: &[ComputedModuleRisk], n: usize) -> &[ComputedModuleRisk] {
    &ranked[..n.min(ranked.len())]
}
