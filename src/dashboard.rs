//! Whole-dashboard derivation for one project snapshot.
//!
//! [`derive_dashboard`] is a pure function of its inputs: callers re-run it
//! whenever the snapshot, the page or the settings change.

use serde::Serialize;

use crate::chart::{
    build_bars, build_donut, build_trend, BarPoint, ChartLayout, DonutChart, TrendLine,
    TrendSample,
};
use crate::comparison::{match_entries, summarize, ComparisonRow, ComparisonSummary};
use crate::config::{DisplayConfig, ScanlensConfig};
use crate::core::{ComputedModuleRisk, ModuleMetric, OverallRisk, ProjectSnapshot};
use crate::pagination::{build_page_items, paginate, PageItem};
use crate::quality_gate::{gate_summary, history_rows, GateHistoryRow, GateSummary, NOT_AVAILABLE};
use crate::ranking::{rank, top_n};
use crate::risk::{compute_module_risks, overall_risk};

/// Display constraints and chart geometry used by a derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub display: DisplayConfig,
    pub chart: ChartLayout,
}

impl From<&ScanlensConfig> for Settings {
    fn from(config: &ScanlensConfig) -> Self {
        Self {
            display: config.display(),
            chart: config.chart(),
        }
    }
}

/// The visible page of the ranked module table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePage {
    pub items: Vec<ComputedModuleRisk>,
    pub page: usize,
    pub total_pages: usize,
    pub page_start: usize,
    pub page_end: usize,
    pub total_items: usize,
    pub page_items: Vec<PageItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub project_id: u64,
    pub project_name: String,
    pub branch: String,
    pub overall_risk: OverallRisk,
    pub modules: ModulePage,
    pub risk_chart: Vec<BarPoint>,
    pub issue_donut: DonutChart,
    pub coverage_trend: TrendLine,
    pub comparison: Vec<ComparisonRow>,
    pub comparison_summary: ComparisonSummary,
    pub gate_history: Vec<GateHistoryRow>,
    pub gate_summary: GateSummary,
}

/// Automated per-module metrics, used for QA cross-referencing.
pub fn automated_metrics(snapshot: &ProjectSnapshot) -> Vec<ModuleMetric> {
    snapshot.module_metrics.iter().map(ModuleMetric::from).collect()
}

/// Modules fed to risk scoring: the risk-analysis rows when the API sent
/// any, otherwise the plain module metrics.
pub fn risk_inputs(snapshot: &ProjectSnapshot) -> Vec<ModuleMetric> {
    if snapshot.high_risk_modules.is_empty() {
        automated_metrics(snapshot)
    } else {
        snapshot
            .high_risk_modules
            .iter()
            .map(ModuleMetric::from)
            .collect()
    }
}

/// Ranked module risks for a snapshot.
pub fn ranked_modules(snapshot: &ProjectSnapshot) -> Vec<ComputedModuleRisk> {
    rank(&compute_module_risks(&risk_inputs(snapshot)))
}

/// Derives every dashboard view for `page` of the module ranking.
///
/// A page outside the ranking's bounds falls back to page 1.
pub fn derive_dashboard(
    snapshot: &ProjectSnapshot,
    page: usize,
    settings: &Settings,
) -> DashboardReport {
    let _span =
        tracing::debug_span!("derive_dashboard", project_id = snapshot.project_id, page).entered();

    let ranked = ranked_modules(snapshot);
    let modules = module_page(&ranked, page, settings.display.page_size);

    let samples: Vec<TrendSample> = snapshot.coverage_trend.iter().map(TrendSample::from).collect();
    let comparison = match_entries(&snapshot.qa_entries, &automated_metrics(snapshot));
    let gate_history = history_rows(&snapshot.quality_gate_history);

    DashboardReport {
        project_id: snapshot.project_id,
        project_name: snapshot.project_name.clone(),
        branch: snapshot
            .branch
            .clone()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        overall_risk: overall_risk(&ranked),
        risk_chart: build_bars(top_n(&ranked, settings.display.top_modules), &settings.chart.bar),
        issue_donut: build_donut(snapshot.issue_distribution().into(), &settings.chart.donut),
        coverage_trend: build_trend(&samples, &settings.chart.trend),
        comparison_summary: summarize(&comparison),
        comparison,
        gate_summary: gate_summary(&gate_history),
        gate_history,
        modules,
    }
}

fn module_page(ranked: &[ComputedModuleRisk], page: usize, page_size: usize) -> ModulePage {
    let slice = paginate(ranked, page, page_size).or_else(|| {
        tracing::debug!(page, "requested page out of range, showing page 1");
        paginate(ranked, 1, page_size)
    });

    match slice {
        Some(slice) => ModulePage {
            items: slice.items.to_vec(),
            page: slice.page,
            total_pages: slice.total_pages,
            page_start: slice.page_start,
            page_end: slice.page_end,
            total_items: slice.total_items,
            page_items: build_page_items(slice.page, slice.total_pages),
        },
        // page 1 always exists
        None => ModulePage {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            page_start: 1,
            page_end: 0,
            total_items: 0,
            page_items: build_page_items(1, 1),
        },
    }
}
