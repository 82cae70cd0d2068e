//! Record shapes returned by the scan analytics API.
//!
//! Field names follow the API's camelCase JSON. Nullable API fields are
//! `Option`s here; placeholders are substituted by the derivations, never
//! at deserialization time.

use serde::{Deserialize, Serialize};

/// `/api/projects/{id}/metrics` module row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetricDto {
    pub module_name: String,
    #[serde(default)]
    pub qualifier: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub bugs: u32,
    pub vulnerabilities: u32,
    #[serde(default)]
    pub code_smells: u32,
    pub coverage: f64,
    pub duplication: f64,
    #[serde(default)]
    pub complexity: u32,
    #[serde(default)]
    pub lines_of_code: u64,
}

/// `/api/projects/{id}/risk-analysis` high-risk module row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskModuleDto {
    pub module_name: String,
    #[serde(default)]
    pub language: Option<String>,
    pub bugs: u32,
    pub vulnerabilities: u32,
    pub coverage: f64,
    pub duplication: f64,
    #[serde(default)]
    pub complexity: u32,
    #[serde(default)]
    pub lines_of_code: u64,
}

/// Manually reported QA finding. `id` and `createdAt` are assigned by the
/// server and absent on submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaEntryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub module_name: String,
    pub issue_type: String,
    pub severity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateHistoryDto {
    pub date: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub commit_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageTrendPointDto {
    pub date: String,
    pub coverage: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDistributionDto {
    pub bugs: u64,
    pub vulnerabilities: u64,
    pub code_smells: u64,
}

impl IssueDistributionDto {
    /// Sums per-module counts when the API did not send a distribution.
    pub fn from_modules(modules: &[ModuleMetricDto]) -> Self {
        modules.iter().fold(Self::default(), |acc, m| Self {
            bugs: acc.bugs + u64::from(m.bugs),
            vulnerabilities: acc.vulnerabilities + u64::from(m.vulnerabilities),
            code_smells: acc.code_smells + u64::from(m.code_smells),
        })
    }
}

/// Everything the dashboard needs for one project, as exported from the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub project_id: u64,
    pub project_name: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub module_metrics: Vec<ModuleMetricDto>,
    #[serde(default)]
    pub high_risk_modules: Vec<HighRiskModuleDto>,
    #[serde(default)]
    pub qa_entries: Vec<QaEntryDto>,
    #[serde(default)]
    pub quality_gate_history: Vec<QualityGateHistoryDto>,
    #[serde(default)]
    pub coverage_trend: Vec<CoverageTrendPointDto>,
    #[serde(default)]
    pub issue_distribution: Option<IssueDistributionDto>,
}

impl ProjectSnapshot {
    /// Empty snapshot for a project with no scan data yet.
    pub fn empty(project_id: u64, project_name: impl Into<String>) -> Self {
        Self {
            project_id,
            project_name: project_name.into(),
            branch: None,
            module_metrics: Vec::new(),
            high_risk_modules: Vec::new(),
            qa_entries: Vec::new(),
            quality_gate_history: Vec::new(),
            coverage_trend: Vec::new(),
            issue_distribution: None,
        }
    }

    /// Issue distribution, summed from module metrics when not provided.
    pub fn issue_distribution(&self) -> IssueDistributionDto {
        self.issue_distribution
            .unwrap_or_else(|| IssueDistributionDto::from_modules(&self.module_metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults_missing_collections() {
        let snapshot: ProjectSnapshot =
            serde_json::from_str(r#"{"projectId": 7, "projectName": "billing"}"#).unwrap();
        assert_eq!(snapshot, ProjectSnapshot::empty(7, "billing"));
    }

    #[test]
    fn test_module_metric_dto_reads_camel_case() {
        let dto: ModuleMetricDto = serde_json::from_str(
            r#"{"moduleName":"src/api","qualifier":"DIR","language":null,"bugs":3,
                "vulnerabilities":1,"codeSmells":9,"coverage":71.5,"duplication":4.2,
                "complexity":40,"linesOfCode":1200}"#,
        )
        .unwrap();
        assert_eq!(dto.module_name, "src/api");
        assert_eq!(dto.code_smells, 9);
        assert_eq!(dto.lines_of_code, 1200);
        assert!(dto.language.is_none());
    }

    #[test]
    fn test_issue_distribution_summed_when_absent() {
        let mut snapshot = ProjectSnapshot::empty(1, "p");
        for (bugs, smells) in [(2, 5), (3, 1)] {
            snapshot.module_metrics.push(ModuleMetricDto {
                module_name: format!("m{bugs}"),
                qualifier: None,
                language: None,
                bugs,
                vulnerabilities: 1,
                code_smells: smells,
                coverage: 50.0,
                duplication: 0.0,
                complexity: 0,
                lines_of_code: 0,
            });
        }
        let dist = snapshot.issue_distribution();
        assert_eq!(dist.bugs, 5);
        assert_eq!(dist.vulnerabilities, 2);
        assert_eq!(dist.code_smells, 6);

        snapshot.issue_distribution = Some(IssueDistributionDto {
            bugs: 1,
            vulnerabilities: 0,
            code_smells: 0,
        });
        assert_eq!(snapshot.issue_distribution().bugs, 1);
    }
}
