//! End-to-end derivation over the storefront fixture snapshot.

mod common;

use pretty_assertions::assert_eq;
use scanlens::comparison::MatchResult;
use scanlens::config::DisplayConfig;
use scanlens::core::RiskLevel;
use scanlens::dashboard::{derive_dashboard, Settings};
use scanlens::pagination::PageItem;
use scanlens::quality_gate::GateStatus;
use scanlens::session::ProjectSession;

const EPSILON: f64 = 1e-9;

fn module_names(report: &scanlens::DashboardReport) -> Vec<&str> {
    report
        .modules
        .items
        .iter()
        .map(|m| m.module_name())
        .collect()
}

#[test]
fn test_first_page_is_ranked_by_risk() {
    let report = derive_dashboard(&common::load_fixture(), 1, &Settings::default());

    assert_eq!(
        module_names(&report),
        vec![
            "src/checkout/Payment.js",
            "src/cart/Cart.js",
            "src/auth/Login.js",
            "src/api/client.js",
            "src/store/index.js",
            "src/utils/format.js",
            "src/ui/Header.js",
        ]
    );
    let scores: Vec<i64> = report.modules.items.iter().map(|m| m.risk_score()).collect();
    assert_eq!(scores, vec![166, 89, 72, 49, 41, 36, 20]);
    assert_eq!(report.modules.items[2].risk_level(), RiskLevel::High);
    assert_eq!(report.modules.items[3].risk_level(), RiskLevel::Medium);
    assert_eq!(report.modules.items[6].risk_level(), RiskLevel::Low);
    assert_eq!(report.modules.total_pages, 2);
    assert_eq!(report.modules.page_items, vec![PageItem::Page(1), PageItem::Page(2)]);
}

#[test]
fn test_second_page_keeps_tied_modules_in_input_order() {
    let report = derive_dashboard(&common::load_fixture(), 2, &Settings::default());

    // Header.js and Nav.js both score 20; Header.js comes first in the snapshot
    assert_eq!(
        module_names(&report),
        vec!["src/ui/Nav.js", "src/utils/date.js", "src/ui/Footer.js"]
    );
    assert_eq!(report.modules.page_start, 8);
    assert_eq!(report.modules.page_end, 10);
    assert_eq!(report.modules.total_items, 10);
}

#[test]
fn test_overall_risk_is_rounded_mean() {
    let report = derive_dashboard(&common::load_fixture(), 1, &Settings::default());

    // (166 + 89 + 72 + 49 + 41 + 36 + 20 + 20 + 18 + 5) / 10 = 51.6
    assert_eq!(report.overall_risk.score, 52);
    assert_eq!(report.overall_risk.status, RiskLevel::Medium);
    assert_eq!(report.overall_risk.level, "MEDIUM RISK");
}

#[test]
fn test_risk_chart_scales_to_highest_score() {
    let report = derive_dashboard(&common::load_fixture(), 2, &Settings::default());

    assert_eq!(report.risk_chart.len(), 6);
    let first = &report.risk_chart[0];
    assert_eq!(first.name, "src/checkout/Payment.js");
    assert_eq!(first.height, 240.0);
    assert_eq!(first.y, 20.0);

    let cart = &report.risk_chart[1];
    assert!((cart.height - 89.0 / 166.0 * 240.0).abs() < EPSILON);
    assert!((cart.y + cart.height - 260.0).abs() < EPSILON);
}

#[test]
fn test_issue_donut_sums_module_counts() {
    let report = derive_dashboard(&common::load_fixture(), 1, &Settings::default());
    let donut = &report.issue_donut;

    assert_eq!(donut.total, 31 + 7 + 53);
    let counts: Vec<u64> = donut.segments.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![31, 7, 53]);

    let arc_sum: f64 = donut.segments.iter().map(|s| s.length).sum();
    assert!((arc_sum - donut.circumference).abs() < 1e-6);
    assert_eq!(donut.segments[0].offset, 0.0);
    assert!((donut.segments[1].offset + donut.segments[0].length).abs() < EPSILON);
}

#[test]
fn test_coverage_trend_polyline() {
    let report = derive_dashboard(&common::load_fixture(), 1, &Settings::default());
    assert_eq!(
        report.coverage_trend.polyline,
        "50.00,106.00 300.00,87.00 550.00,68.00"
    );
}

#[test]
fn test_qa_comparison() {
    let report = derive_dashboard(&common::load_fixture(), 1, &Settings::default());

    let outcomes: Vec<(u32, MatchResult)> = report
        .comparison
        .iter()
        .map(|row| (row.automated_count, row.result))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            (12, MatchResult::Matched),
            (2, MatchResult::Matched),
            (0, MatchResult::ManualOnly),
            (0, MatchResult::ManualOnly),
            (0, MatchResult::ManualOnly),
        ]
    );
    assert_eq!(report.comparison_summary.matched, 2);
    assert_eq!(report.comparison_summary.manual_only, 3);
    assert_eq!(report.comparison_summary.match_rate, 40);
}

#[test]
fn test_gate_history_placeholders() {
    let report = derive_dashboard(&common::load_fixture(), 1, &Settings::default());
    let rows = &report.gate_history;

    assert_eq!(rows[0].date, "02 Mar 2026");
    assert_eq!(rows[0].commit, "a1b2c3d4");
    assert_eq!(rows[0].status, Some(GateStatus::Pass));
    assert_eq!(rows[2].branch, "N/A");
    assert_eq!(rows[2].commit, "N/A");
    assert_eq!(rows[2].status_label(), "N/A");
    assert_eq!(report.gate_summary.unknown, 1);
    assert_eq!(report.gate_summary.pass_rate, 33);
}

#[test]
fn test_custom_page_size() {
    let settings = Settings {
        display: DisplayConfig {
            page_size: 4,
            top_modules: 3,
        },
        ..Settings::default()
    };
    let report = derive_dashboard(&common::load_fixture(), 3, &settings);
    assert_eq!(report.modules.total_pages, 3);
    assert_eq!(module_names(&report), vec!["src/utils/date.js", "src/ui/Footer.js"]);
    assert_eq!(report.risk_chart.len(), 3);
}

#[test]
fn test_session_walks_pages() {
    let mut session = ProjectSession::new(Settings::default());
    session.select_project(common::load_fixture());

    assert!(session.next_page());
    assert!(!session.next_page());
    let report = session.report().unwrap();
    assert_eq!(report.modules.page, 2);
    assert_eq!(report.modules.items.len(), 3);

    assert!(!session.go_to_page(0));
    assert!(session.go_to_page(1));
    assert_eq!(session.report().unwrap().modules.page, 1);
}
