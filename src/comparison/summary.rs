use serde::Serialize;

use super::{ComparisonRow, MatchResult};

/// Headline counts for the QA comparison cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total: usize,
    pub matched: usize,
    pub manual_only: usize,
    /// Matched share of all entries, as a rounded percentage.
    pub match_rate: u32,
}

pub fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
    let matched = rows
        .iter()
        .filter(|row| row.result == MatchResult::Matched)
        .count();
    let total = rows.len();

    ComparisonSummary {
        total,
        matched,
        manual_only: total - matched,
        match_rate: percentage(matched, total),
    }
}

pub(crate) fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
