use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;

use crate::core::{Result, RiskLevel};
use crate::dashboard::{DashboardReport, ModulePage};
use crate::quality_gate::GateStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// Part of the dashboard to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportSection {
    #[default]
    All,
    /// Overall risk and charts
    Risk,
    /// Ranked module table
    Modules,
    /// Manual QA vs automated comparison
    Compare,
    /// Quality-gate history
    Gates,
}

impl ReportSection {
    pub fn includes(&self, section: ReportSection) -> bool {
        *self == ReportSection::All || *self == section
    }

    fn json_keys(&self) -> &'static [&'static str] {
        match self {
            ReportSection::All => &[],
            ReportSection::Risk => &["overallRisk", "riskChart", "issueDonut", "coverageTrend"],
            ReportSection::Modules => &["modules"],
            ReportSection::Compare => &["comparison", "comparisonSummary"],
            ReportSection::Gates => &["gateHistory", "gateSummary"],
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DashboardReport, section: ReportSection) -> Result<()>;

    /// Pushes buffered output to the destination; write errors surface here.
    fn finish(&mut self) -> Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DashboardReport, section: ReportSection) -> Result<()> {
        let value = section_json(report, section)?;
        let json = serde_json::to_string_pretty(&value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Report JSON limited to `section`; project identity is always kept.
fn section_json(report: &DashboardReport, section: ReportSection) -> Result<Value> {
    let full = serde_json::to_value(report)?;
    if section == ReportSection::All {
        return Ok(full);
    }

    let Value::Object(fields) = full else {
        return Ok(full);
    };
    let keep = ["projectId", "projectName", "branch"]
        .iter()
        .chain(section.json_keys());
    let subset: Map<String, Value> = keep
        .filter_map(|key| fields.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect();
    Ok(Value::Object(subset))
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DashboardReport, section: ReportSection) -> Result<()> {
        writeln!(self.writer, "# {} Quality Dashboard", report.project_name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Project: {} | Branch: {}",
            report.project_id, report.branch
        )?;
        writeln!(self.writer)?;

        if section.includes(ReportSection::Risk) {
            self.write_risk(report)?;
        }
        if section.includes(ReportSection::Modules) {
            self.write_modules(&report.modules)?;
        }
        if section.includes(ReportSection::Compare) {
            self.write_comparison(report)?;
        }
        if section.includes(ReportSection::Gates) {
            self.write_gates(report)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_risk(&mut self, report: &DashboardReport) -> Result<()> {
        let overall = &report.overall_risk;
        writeln!(self.writer, "## Risk Overview")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** (score {})",
            overall.level, overall.score
        )?;
        writeln!(self.writer)?;

        if !report.risk_chart.is_empty() {
            writeln!(self.writer, "| Module | Risk Score |")?;
            writeln!(self.writer, "|--------|------------|")?;
            for bar in &report.risk_chart {
                writeln!(self.writer, "| {} | {} |", bar.name, bar.value)?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "| Issue Type | Count |")?;
        writeln!(self.writer, "|------------|-------|")?;
        for segment in &report.issue_donut.segments {
            writeln!(self.writer, "| {} | {} |", segment.label, segment.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_modules(&mut self, modules: &ModulePage) -> Result<()> {
        writeln!(self.writer, "## Module Risk Ranking")?;
        writeln!(self.writer)?;
        if modules.items.is_empty() {
            writeln!(self.writer, "_No module metrics available._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| # | Module | Bugs | Vulnerabilities | Coverage % | Duplication % | Score | Level |"
        )?;
        writeln!(
            self.writer,
            "|---|--------|------|-----------------|------------|---------------|-------|-------|"
        )?;
        for (offset, module) in modules.items.iter().enumerate() {
            let metric = module.metric();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.1} | {:.1} | {} | {} |",
                modules.page_start + offset,
                metric.module_name,
                metric.bugs,
                metric.vulnerabilities,
                metric.coverage,
                metric.duplication,
                module.risk_score(),
                module.risk_level()
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", page_caption(modules))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_comparison(&mut self, report: &DashboardReport) -> Result<()> {
        let summary = &report.comparison_summary;
        writeln!(self.writer, "## Manual QA vs Automated Scan")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} matched, {} manual only ({}% match rate)",
            summary.matched, summary.manual_only, summary.match_rate
        )?;
        writeln!(self.writer)?;
        if report.comparison.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "| Module | Issue Type | Severity | Automated | Result |")?;
        writeln!(self.writer, "|--------|------------|----------|-----------|--------|")?;
        for row in &report.comparison {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                row.entry.module_name,
                row.entry.issue_type,
                row.entry.severity,
                row.automated_count,
                row.result
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gates(&mut self, report: &DashboardReport) -> Result<()> {
        let summary = &report.gate_summary;
        writeln!(self.writer, "## Quality Gate History")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} passed, {} failed ({}% pass rate)",
            summary.passed, summary.failed, summary.pass_rate
        )?;
        writeln!(self.writer)?;
        if report.gate_history.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "| Date | Branch | Status | Commit |")?;
        writeln!(self.writer, "|------|--------|--------|--------|")?;
        for row in &report.gate_history {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.date,
                row.branch,
                row.status_label(),
                row.commit
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &DashboardReport, section: ReportSection) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("{} ({})", report.project_name, report.branch).bold().blue()
        )?;
        writeln!(self.writer, "{}", "=".repeat(40).blue())?;
        writeln!(self.writer)?;

        if section.includes(ReportSection::Risk) {
            self.print_risk(report)?;
        }
        if section.includes(ReportSection::Modules) {
            self.print_modules(&report.modules)?;
        }
        if section.includes(ReportSection::Compare) {
            self.print_comparison(report)?;
        }
        if section.includes(ReportSection::Gates) {
            self.print_gates(report)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_risk(&mut self, report: &DashboardReport) -> Result<()> {
        let overall = &report.overall_risk;
        writeln!(
            self.writer,
            "Overall risk: {} (score {})",
            paint_level(overall.status, &overall.level),
            overall.score
        )?;

        let donut = &report.issue_donut;
        writeln!(self.writer, "Issues: {} total", donut.total)?;
        for segment in &donut.segments {
            writeln!(self.writer, "  {:<16} {}", segment.label, segment.count)?;
        }
        writeln!(self.writer)?;

        if !report.risk_chart.is_empty() {
            writeln!(self.writer, "{}", "Top risk modules".bold())?;
            let name_width = report
                .risk_chart
                .iter()
                .map(|bar| bar.name.chars().count())
                .max()
                .unwrap_or(0);
            for bar in &report.risk_chart {
                // one block per 8 units of bar height
                let blocks = (bar.height / 8.0).round().max(1.0) as usize;
                writeln!(
                    self.writer,
                    "  {:<width$} {} {}",
                    bar.name,
                    "█".repeat(blocks).red(),
                    bar.value,
                    width = name_width
                )?;
            }
            writeln!(self.writer)?;
        }

        if let (Some(first), Some(last)) = (
            report.coverage_trend.points.first(),
            report.coverage_trend.points.last(),
        ) {
            writeln!(
                self.writer,
                "Coverage trend: {:.1}% -> {:.1}% over {} scans",
                first.value,
                last.value,
                report.coverage_trend.points.len()
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn print_modules(&mut self, modules: &ModulePage) -> Result<()> {
        writeln!(self.writer, "{}", "Module risk ranking".bold())?;
        if modules.items.is_empty() {
            writeln!(self.writer, "  No module metrics available.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        for (offset, module) in modules.items.iter().enumerate() {
            let metric = module.metric();
            writeln!(
                self.writer,
                "  {:>3}. {:<32} bugs {:>3}  vulns {:>3}  cov {:>5.1}%  dup {:>5.1}%  {:>4} {}",
                modules.page_start + offset,
                metric.module_name,
                metric.bugs,
                metric.vulnerabilities,
                metric.coverage,
                metric.duplication,
                module.risk_score(),
                paint_level(module.risk_level(), module.risk_level().as_str())
            )?;
        }
        writeln!(self.writer, "  {}", page_caption(modules).dimmed())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_comparison(&mut self, report: &DashboardReport) -> Result<()> {
        let summary = &report.comparison_summary;
        writeln!(self.writer, "{}", "Manual QA vs automated scan".bold())?;
        writeln!(
            self.writer,
            "  {} matched, {} manual only, {}% match rate",
            summary.matched.to_string().green(),
            summary.manual_only.to_string().yellow(),
            summary.match_rate
        )?;
        for row in &report.comparison {
            writeln!(
                self.writer,
                "  {:<28} {:<14} {:<9} automated {:>3}  {}",
                row.entry.module_name,
                row.entry.issue_type,
                row.entry.severity,
                row.automated_count,
                row.result
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_gates(&mut self, report: &DashboardReport) -> Result<()> {
        let summary = &report.gate_summary;
        writeln!(self.writer, "{}", "Quality gate history".bold())?;
        writeln!(
            self.writer,
            "  {} passed, {} failed, {}% pass rate",
            summary.passed, summary.failed, summary.pass_rate
        )?;
        for row in &report.gate_history {
            let status = match row.status {
                Some(GateStatus::Pass) => "PASS".green(),
                Some(GateStatus::Fail) => "FAIL".red(),
                None => row.status_label().dimmed(),
            };
            writeln!(
                self.writer,
                "  {:<12} {:<20} {:<5} {}",
                row.date, row.branch, status, row.commit
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn paint_level(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::High => text.red().bold(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::Low => text.green(),
    }
}

/// "Showing 8-14 of 20 (page 2 of 3)  [1] 2 3"
fn page_caption(modules: &ModulePage) -> String {
    let controls: Vec<String> = modules
        .page_items
        .iter()
        .map(|item| match item {
            crate::pagination::PageItem::Page(n) if *n == modules.page => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect();
    format!(
        "Showing {}-{} of {} (page {} of {})  {}",
        modules.page_start,
        modules.page_end,
        modules.total_items,
        modules.page,
        modules.total_pages,
        controls.join(" ")
    )
}
