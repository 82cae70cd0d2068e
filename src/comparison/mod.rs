//! Cross-reference of manual QA findings against automated scan counts.

pub mod matcher;
pub mod summary;

pub use matcher::{match_entries, ComparisonRow, IssueType, MatchResult};
pub use summary::{summarize, ComparisonSummary};
