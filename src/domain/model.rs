use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// The package that was analyzed by the upstream scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub path: String,
}

impl Package {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One finding reported by an upstream static-analysis tool.
///
/// `Eq + Hash` so exact duplicates can be collapsed when counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    pub filename: String,
    pub line_number: u64,
    pub tool: String,
    pub issue_type: String,
    pub severity: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_reference: Option<String>,
}

/// Issues keyed by the tool that found them, as exported by the host tool.
pub type IssueMap = HashMap<String, Vec<Issue>>;

/// Risk levels recognised by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Output of the risk analyzer, serialized verbatim under `risk_assessment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub package_analyzed: String,
    pub analysis_type: String,
    pub overall_risk_level: String,
    pub risks_per_level: BTreeMap<String, u64>,
    pub cert_references_per_level: BTreeMap<String, BTreeMap<String, u64>>,
}

/// The report document written to disk and uploaded to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub risk_assessment: RiskAssessment,
    pub issue_count_by_tool: BTreeMap<String, u64>,
    pub generated_at: DateTime<Utc>,
}
