//! Manual-vs-automated finding matcher.
//!
//! Matching is a coarse heuristic: an entry is `Matched` when the scan
//! reported at least one issue of the same type in a module with exactly the
//! same name. It does not correlate individual findings, so several distinct
//! manual findings in one module and type all match the same automated count.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::core::{ModuleMetric, QaEntryDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    Bug,
    Vulnerability,
    CodeSmell,
}

impl IssueType {
    /// Parses the exact labels used by the QA form.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Bug" => Some(Self::Bug),
            "Vulnerability" => Some(Self::Vulnerability),
            "Code Smell" => Some(Self::CodeSmell),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Vulnerability => "Vulnerability",
            Self::CodeSmell => "Code Smell",
        }
    }

    fn automated_count(&self, metric: &ModuleMetric) -> u32 {
        match self {
            Self::Bug => metric.bugs,
            Self::Vulnerability => metric.vulnerabilities,
            Self::CodeSmell => metric.code_smells,
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Matched,
    ManualOnly,
}

impl MatchResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Matched => "Matched",
            Self::ManualOnly => "Manual Only",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A manual QA entry joined with the automated count it was matched against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    #[serde(flatten)]
    pub entry: QaEntryDto,
    pub automated_count: u32,
    pub result: MatchResult,
}

/// Joins every manual entry with the automated module metrics.
///
/// Lookup is by exact module name; when several modules share a name the
/// first one wins. Unknown modules or unrecognized issue types count as 0
/// and classify as `Manual Only`.
pub fn match_entries(entries: &[QaEntryDto], modules: &[ModuleMetric]) -> Vec<ComparisonRow> {
    let mut by_name: HashMap<&str, &ModuleMetric> = HashMap::with_capacity(modules.len());
    for module in modules {
        by_name.entry(module.module_name.as_str()).or_insert(module);
    }

    let rows: Vec<ComparisonRow> = entries
        .iter()
        .map(|entry| {
            let automated_count = by_name
                .get(entry.module_name.as_str())
                .zip(IssueType::parse(&entry.issue_type))
                .map(|(module, issue_type)| issue_type.automated_count(module))
                .unwrap_or(0);
            let result = if automated_count > 0 {
                MatchResult::Matched
            } else {
                MatchResult::ManualOnly
            };
            ComparisonRow {
                entry: entry.clone(),
                automated_count,
                result,
            }
        })
        .collect();

    tracing::debug!(
        entries = rows.len(),
        matched = rows
            .iter()
            .filter(|r| r.result == MatchResult::Matched)
            .count(),
        "cross-referenced QA entries"
    );
    rows
}
