use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::IssueDistributionDto;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutLayout {
    pub radius: f64,
}

impl Default for DonutLayout {
    fn default() -> Self {
        Self { radius: 80.0 }
    }
}

impl DonutLayout {
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCounts {
    pub bugs: u64,
    pub vulnerabilities: u64,
    pub code_smells: u64,
}

impl IssueCounts {
    pub fn total(&self) -> u64 {
        self.bugs + self.vulnerabilities + self.code_smells
    }
}

impl From<IssueDistributionDto> for IssueCounts {
    fn from(dto: IssueDistributionDto) -> Self {
        Self {
            bugs: dto.bugs,
            vulnerabilities: dto.vulnerabilities,
            code_smells: dto.code_smells,
        }
    }
}

/// One arc of the issue donut, in `stroke-dasharray`/`stroke-dashoffset` terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSegment {
    pub label: &'static str,
    pub count: u64,
    pub length: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub circumference: f64,
    pub total: u64,
    pub segments: Vec<DonutSegment>,
}

/// Arcs for bugs, vulnerabilities and code smells, stacked in that order.
///
/// With no issues at all the ring is split into three equal thirds instead of
/// collapsing to nothing.
pub fn build_donut(counts: IssueCounts, layout: &DonutLayout) -> DonutChart {
    let circumference = layout.circumference();
    let total = counts.total();
    let parts = [
        ("Bugs", counts.bugs),
        ("Vulnerabilities", counts.vulnerabilities),
        ("Code Smells", counts.code_smells),
    ];

    let mut preceding = 0.0;
    let segments = parts
        .into_iter()
        .map(|(label, count)| {
            let length = if total == 0 {
                circumference / parts.len() as f64
            } else {
                (count as f64 / total as f64) * circumference
            };
            // `0.0 - x` keeps the first offset at +0.0
            let offset = 0.0 - preceding;
            preceding += length;
            DonutSegment {
                label,
                count,
                length,
                offset,
            }
        })
        .collect();

    DonutChart {
        circumference,
        total,
        segments,
    }
}
