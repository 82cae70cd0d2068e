pub mod dto;
pub mod errors;
pub mod types;

pub use dto::{
    CoverageTrendPointDto, HighRiskModuleDto, IssueDistributionDto, ModuleMetricDto,
    ProjectSnapshot, QaEntryDto, QualityGateHistoryDto,
};
pub use errors::{Error, Result, ResultExt};
pub use types::{ComputedModuleRisk, ModuleMetric, OverallRisk, RiskLevel};
