//! Per-module risk scoring.
//!
//! ```text
//! score = bugs*5 + vulnerabilities*8 + (100 - coverage) + duplication*3
//! ```
//!
//! The score is not clamped. Coverage above 100 can drive it negative; inputs
//! are expected to be valid scan metrics.

pub mod aggregate;

pub use aggregate::overall_risk;

use crate::core::{ComputedModuleRisk, ModuleMetric, RiskLevel};

pub const BUG_WEIGHT: f64 = 5.0;
pub const VULNERABILITY_WEIGHT: f64 = 8.0;
pub const DUPLICATION_WEIGHT: f64 = 3.0;

/// Lowest score classified as [`RiskLevel::High`].
pub const HIGH_RISK_THRESHOLD: i64 = 71;
/// Lowest score classified as [`RiskLevel::Medium`].
pub const MEDIUM_RISK_THRESHOLD: i64 = 31;

/// Risk score for one module.
///
/// Fractional coverage or duplication is rounded to the nearest integer
/// after the weighted sum, and classification sees the rounded value: a raw
/// 70.6 scores 71 and is [`RiskLevel::High`], not `Medium`.
pub fn score(bugs: u32, vulnerabilities: u32, coverage: f64, duplication: f64) -> i64 {
    let raw = f64::from(bugs) * BUG_WEIGHT
        + f64::from(vulnerabilities) * VULNERABILITY_WEIGHT
        + (100.0 - coverage)
        + duplication * DUPLICATION_WEIGHT;
    raw.round() as i64
}

pub fn classify(score: i64) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn compute_module_risk(metric: ModuleMetric) -> ComputedModuleRisk {
    let risk_score = score(
        metric.bugs,
        metric.vulnerabilities,
        metric.coverage,
        metric.duplication,
    );
    ComputedModuleRisk::new(metric, risk_score, classify(risk_score))
}

/// Scores every module, preserving input order.
pub fn compute_module_risks<'a, I>(metrics: I) -> Vec<ComputedModuleRisk>
where
    I: IntoIterator<Item = &'a ModuleMetric>,
{
    let risks: Vec<ComputedModuleRisk> = metrics
        .into_iter()
        .cloned()
        .map(compute_module_risk)
        .collect();
    tracing::trace!(modules = risks.len(), "computed module risks");
    risks
}
