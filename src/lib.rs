// Export modules for library usage
pub mod chart;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod io;
pub mod observability;
pub mod pagination;
pub mod quality_gate;
pub mod ranking;
pub mod risk;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ComputedModuleRisk, Error, ModuleMetric, OverallRisk, ProjectSnapshot, Result, RiskLevel,
};

pub use crate::chart::{build_bars, build_donut, build_trend, BarPoint, DonutChart, TrendLine};
pub use crate::comparison::{match_entries, summarize, ComparisonRow, IssueType, MatchResult};
pub use crate::config::ScanlensConfig;
pub use crate::dashboard::{derive_dashboard, DashboardReport, Settings};
pub use crate::pagination::{build_page_items, paginate, PageItem, PageState};
pub use crate::ranking::{rank, top_n};
pub use crate::risk::{classify, compute_module_risk, compute_module_risks, overall_risk, score};
pub use crate::session::ProjectSession;
