use serde::{Deserialize, Serialize};

use crate::core::ComputedModuleRisk;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLayout {
    /// Height of the tallest bar.
    pub height: f64,
    /// Y coordinate bars grow upward from.
    pub baseline: f64,
    /// Floor so zero-score bars stay visible.
    pub min_height: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            height: 240.0,
            baseline: 260.0,
            min_height: 4.0,
        }
    }
}

/// One bar of the module-risk chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub name: String,
    pub value: i64,
    pub y: f64,
    pub height: f64,
}

/// Bars for an already ranked and truncated series.
///
/// Heights are proportional to the largest score (floored at 1 so the scale
/// never divides by zero) and never below `layout.min_height`.
pub fn build_bars(modules: &[ComputedModuleRisk], layout: &BarLayout) -> Vec<BarPoint> {
    let max_score = modules
        .iter()
        .map(ComputedModuleRisk::risk_score)
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    modules
        .iter()
        .map(|module| {
            let value = module.risk_score();
            let scaled = (value as f64 / max_score) * layout.height;
            let height = scaled.max(layout.min_height);
            BarPoint {
                name: module.module_name().to_string(),
                value,
                y: layout.baseline - height,
                height,
            }
        })
        .collect()
}
