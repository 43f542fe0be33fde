use crate::core::{IssueMap, Package, RiskAnalyzer, RiskAssessment};
use crate::domain::model::{Issue, RiskLevel};
use crate::utils::error::Result;
use std::collections::{BTreeMap, HashSet};

/// Built-in analyzer behind the `RiskAnalyzer` seam.
///
/// Issues carrying a CERT reference rank High; otherwise the numeric
/// severity decides the bucket. Registry deployments that ship their own
/// scoring model plug it in through the trait instead.
#[derive(Debug, Default, Clone)]
pub struct SeverityAnalyzer;

impl SeverityAnalyzer {
    fn bucket(issue: &Issue) -> RiskLevel {
        if issue.cert_reference.is_some() || issue.severity >= 5 {
            RiskLevel::High
        } else if issue.severity >= 3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl RiskAnalyzer for SeverityAnalyzer {
    fn analyze(
        &self,
        issues: &IssueMap,
        package: &Package,
        level: &str,
    ) -> Result<RiskAssessment> {
        let mut risks_per_level: BTreeMap<String, u64> = BTreeMap::new();
        let mut cert_references_per_level: BTreeMap<String, BTreeMap<String, u64>> =
            BTreeMap::new();

        let mut seen = HashSet::new();
        for issue in issues.values().flatten() {
            if !seen.insert(issue) {
                continue;
            }
            let bucket = Self::bucket(issue).as_str();
            *risks_per_level.entry(bucket.to_string()).or_insert(0) += 1;
            if let Some(cert) = &issue.cert_reference {
                *cert_references_per_level
                    .entry(bucket.to_string())
                    .or_default()
                    .entry(cert.clone())
                    .or_insert(0) += 1;
            }
        }

        let overall_risk_level = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]
            .iter()
            .find(|risk_level| risks_per_level.contains_key(risk_level.as_str()))
            .map(|risk_level| risk_level.as_str())
            .unwrap_or("None")
            .to_string();

        Ok(RiskAssessment {
            package_analyzed: package.name.clone(),
            analysis_type: level.to_string(),
            overall_risk_level,
            risks_per_level,
            cert_references_per_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn issue(line: u64, severity: i64, cert: Option<&str>) -> Issue {
        Issue {
            filename: "test.txt".to_string(),
            line_number: line,
            tool: "tool_a".to_string(),
            issue_type: "type".to_string(),
            severity,
            message: "This is a test".to_string(),
            cert_reference: cert.map(str::to_string),
        }
    }

    fn package() -> Package {
        Package::new("valid_package", "/tmp/valid_package")
    }

    #[test]
    fn test_cert_referenced_issue_ranks_high() {
        let mut issues: IssueMap = HashMap::new();
        issues.insert(
            "tool_a".to_string(),
            vec![issue(1, 1, Some("MEM50-CPP"))],
        );

        let assessment = SeverityAnalyzer.analyze(&issues, &package(), "level").unwrap();

        assert_eq!(assessment.package_analyzed, "valid_package");
        assert_eq!(assessment.analysis_type, "level");
        assert_eq!(assessment.overall_risk_level, "High");
        assert_eq!(assessment.risks_per_level["High"], 1);
        assert_eq!(assessment.cert_references_per_level["High"]["MEM50-CPP"], 1);
    }

    #[test]
    fn test_severity_bucketing() {
        let mut issues: IssueMap = HashMap::new();
        issues.insert(
            "tool_a".to_string(),
            vec![issue(1, 5, None), issue(2, 3, None), issue(3, 1, None)],
        );

        let assessment = SeverityAnalyzer.analyze(&issues, &package(), "level").unwrap();

        assert_eq!(assessment.risks_per_level["High"], 1);
        assert_eq!(assessment.risks_per_level["Medium"], 1);
        assert_eq!(assessment.risks_per_level["Low"], 1);
        assert_eq!(assessment.overall_risk_level, "High");
        assert!(assessment.cert_references_per_level.is_empty());
    }

    #[test]
    fn test_duplicates_collapsed_before_counting() {
        let mut issues: IssueMap = HashMap::new();
        issues.insert(
            "tool_a".to_string(),
            vec![issue(1, 1, None), issue(1, 1, None)],
        );

        let assessment = SeverityAnalyzer.analyze(&issues, &package(), "level").unwrap();

        assert_eq!(assessment.risks_per_level["Low"], 1);
    }

    #[test]
    fn test_no_issues_means_no_overall_level() {
        let issues: IssueMap = HashMap::new();

        let assessment = SeverityAnalyzer.analyze(&issues, &package(), "level").unwrap();

        assert_eq!(assessment.overall_risk_level, "None");
        assert!(assessment.risks_per_level.is_empty());
    }
}
