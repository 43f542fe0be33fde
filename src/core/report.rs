use crate::core::{IssueMap, RiskAssessment, RiskReport};
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};

/// Name under which the host tool dispatches this reporting plugin.
pub const PLUGIN_NAME: &str = "upload_risk_assessment";

/// Count unique issues per tool. Exact duplicates are collapsed; tools with
/// an empty issue list still appear with a count of 0.
pub fn unique_issue_counts(issues: &IssueMap) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for (tool, found) in issues {
        let mut seen = HashSet::new();
        let unique = found.iter().filter(|issue| seen.insert(*issue)).count() as u64;
        counts.insert(tool.clone(), unique);
    }
    counts
}

pub fn build_report(assessment: RiskAssessment, issues: &IssueMap) -> RiskReport {
    RiskReport {
        risk_assessment: assessment,
        issue_count_by_tool: unique_issue_counts(issues),
        generated_at: Utc::now(),
    }
}

/// Relative output path: `{package}-{level}/{package}-{level}.json`.
pub fn report_file_name(package: &str, level: &str) -> String {
    format!("{}-{}/{}-{}.json", package, level, package, level)
}
