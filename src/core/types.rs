//! Value objects shared by every derivation in the crate.
//!
//! All of these are immutable snapshots: they are produced from DTOs or from
//! other value objects and are never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dto::{HighRiskModuleDto, ModuleMetricDto};

/// Scan result for a single module (file or directory).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetric {
    pub module_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub bugs: u32,
    pub vulnerabilities: u32,
    #[serde(default)]
    pub code_smells: u32,
    pub coverage: f64,
    pub duplication: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines_of_code: Option<u64>,
}

impl From<&ModuleMetricDto> for ModuleMetric {
    fn from(dto: &ModuleMetricDto) -> Self {
        Self {
            module_name: dto.module_name.clone(),
            language: dto.language.clone(),
            bugs: dto.bugs,
            vulnerabilities: dto.vulnerabilities,
            code_smells: dto.code_smells,
            coverage: dto.coverage,
            duplication: dto.duplication,
            complexity: Some(dto.complexity),
            lines_of_code: Some(dto.lines_of_code),
        }
    }
}

impl From<&HighRiskModuleDto> for ModuleMetric {
    fn from(dto: &HighRiskModuleDto) -> Self {
        Self {
            module_name: dto.module_name.clone(),
            language: dto.language.clone(),
            bugs: dto.bugs,
            vulnerabilities: dto.vulnerabilities,
            code_smells: 0,
            coverage: dto.coverage,
            duplication: dto.duplication,
            complexity: Some(dto.complexity),
            lines_of_code: Some(dto.lines_of_code),
        }
    }
}

/// Qualitative risk bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        }
    }

    /// Banner text used by the overall-risk card, e.g. `"MEDIUM RISK"`.
    pub fn banner(&self) -> String {
        format!("{} RISK", self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module metric together with its derived risk score and level.
///
/// The score is only ever produced by [`crate::risk::compute_module_risk`],
/// so the fields are private and there is no `Deserialize` impl.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedModuleRisk {
    #[serde(flatten)]
    metric: ModuleMetric,
    risk_score: i64,
    risk_level: RiskLevel,
}

impl ComputedModuleRisk {
    pub(crate) fn new(metric: ModuleMetric, risk_score: i64, risk_level: RiskLevel) -> Self {
        Self {
            metric,
            risk_score,
            risk_level,
        }
    }

    pub fn metric(&self) -> &ModuleMetric {
        &self.metric
    }

    pub fn module_name(&self) -> &str {
        &self.metric.module_name
    }

    pub fn risk_score(&self) -> i64 {
        self.risk_score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

/// Project-level aggregate over a set of module risks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallRisk {
    pub score: i64,
    pub level: String,
    pub status: RiskLevel,
}

impl Default for OverallRisk {
    fn default() -> Self {
        Self {
            score: 0,
            level: RiskLevel::Low.banner(),
            status: RiskLevel::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_serializes_uppercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(RiskLevel::High.banner(), "HIGH RISK");
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
    }

    #[test]
    fn test_computed_risk_flattens_metric() {
        let metric = ModuleMetric {
            module_name: "UserAuth.js".into(),
            language: None,
            bugs: 1,
            vulnerabilities: 0,
            code_smells: 0,
            coverage: 90.0,
            duplication: 0.0,
            complexity: None,
            lines_of_code: None,
        };
        let risk = ComputedModuleRisk::new(metric, 15, RiskLevel::Low);
        let value = serde_json::to_value(&risk).unwrap();
        assert_eq!(value["moduleName"], "UserAuth.js");
        assert_eq!(value["riskScore"], 15);
        assert_eq!(value["riskLevel"], "LOW");
    }
}
