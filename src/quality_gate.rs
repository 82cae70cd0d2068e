//! Quality-gate history rows and rating grades.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use crate::comparison::summary::percentage;
use crate::core::QualityGateHistoryDto;

/// Placeholder rendered for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Commit ids are shown abbreviated to this many characters.
const SHORT_COMMIT_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    Pass,
    Fail,
}

impl GateStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("PASS") {
            Some(Self::Pass)
        } else if raw.eq_ignore_ascii_case("FAIL") {
            Some(Self::Fail)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateHistoryRow {
    pub date: String,
    pub branch: String,
    pub status: Option<GateStatus>,
    pub commit: String,
}

impl GateHistoryRow {
    pub fn from_dto(dto: &QualityGateHistoryDto) -> Self {
        Self {
            date: format_scan_date(&dto.date),
            branch: or_placeholder(dto.branch.as_deref()),
            status: dto.status.as_deref().and_then(GateStatus::parse),
            commit: dto
                .commit_id
                .as_deref()
                .map(short_commit)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map_or(NOT_AVAILABLE, |s| s.as_str())
    }
}

pub fn history_rows(history: &[QualityGateHistoryDto]) -> Vec<GateHistoryRow> {
    history.iter().map(GateHistoryRow::from_dto).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub unknown: usize,
    /// Passed share of all rows, as a rounded percentage.
    pub pass_rate: u32,
}

pub fn gate_summary(rows: &[GateHistoryRow]) -> GateSummary {
    let count = |status: Option<GateStatus>| rows.iter().filter(|r| r.status == status).count();
    let passed = count(Some(GateStatus::Pass));
    let failed = count(Some(GateStatus::Fail));

    GateSummary {
        total: rows.len(),
        passed,
        failed,
        unknown: rows.len() - passed - failed,
        pass_rate: percentage(passed, rows.len()),
    }
}

/// Renders an ISO-8601 timestamp as `30 Jan 2026`.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` or a bare date.
/// Anything else is returned unchanged.
pub fn format_scan_date(raw: &str) -> String {
    const DISPLAY: &str = "%d %b %Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY).to_string();
    }
    if raw.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    raw.to_string()
}

/// Maps a `"1.0"`..`"5.0"` rating to its `A`..`E` grade.
pub fn rating_to_grade(rating: Option<&str>) -> String {
    match rating {
        None => NOT_AVAILABLE.to_string(),
        Some("1.0") => "A".to_string(),
        Some("2.0") => "B".to_string(),
        Some("3.0") => "C".to_string(),
        Some("4.0") => "D".to_string(),
        Some("5.0") => "E".to_string(),
        Some(other) => other.to_string(),
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn short_commit(commit: &str) -> String {
    commit.trim().chars().take(SHORT_COMMIT_LEN).collect()
}
