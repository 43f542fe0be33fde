use crate::core::registry::RegistryClient;
use crate::core::report;
use crate::core::{
    ConfigProvider, IssueMap, Package, ReportPipeline, RiskAnalyzer, RiskAssessment, RiskReport,
    Storage,
};
use crate::utils::error::Result;
use std::time::Duration;

/// The reporting pipeline for one (package, analysis-level) pair.
pub struct RiskReportPipeline<S: Storage, C: ConfigProvider, A: RiskAnalyzer> {
    storage: S,
    config: C,
    analyzer: A,
    package: Package,
    issues: IssueMap,
    level: String,
}

impl<S: Storage, C: ConfigProvider, A: RiskAnalyzer> RiskReportPipeline<S, C, A> {
    pub fn new(
        storage: S,
        config: C,
        analyzer: A,
        package: Package,
        issues: IssueMap,
        level: String,
    ) -> Self {
        Self {
            storage,
            config,
            analyzer,
            package,
            issues,
            level,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, A: RiskAnalyzer> ReportPipeline
    for RiskReportPipeline<S, C, A>
{
    async fn analyze(&self) -> Result<RiskAssessment> {
        tracing::debug!(
            "Running risk analysis for {} at level {}",
            self.package.name,
            self.level
        );
        self.analyzer.analyze(&self.issues, &self.package, &self.level)
    }

    async fn assemble(&self, assessment: RiskAssessment) -> Result<RiskReport> {
        Ok(report::build_report(assessment, &self.issues))
    }

    async fn publish(&self, report: RiskReport) -> Result<String> {
        let file_name = report::report_file_name(&self.package.name, &self.level);
        let output_path = format!("{}/{}", self.config.output_directory(), file_name);
        let json = serde_json::to_string_pretty(&report)?;

        tracing::info!("Writing output to {}", output_path);
        self.storage.write_file(&file_name, json.as_bytes()).await?;

        // Registry sync is optional; an offline run stops at the file.
        if let Some(endpoint) = self.config.registry_endpoint() {
            let record_id = format!("{}-{}", self.package.name, self.level);
            let client = RegistryClient::new(
                endpoint,
                self.config.registry_token(),
                Duration::from_secs(self.config.request_timeout_seconds()),
            )?;
            let outcome = client.sync(&record_id, &report).await?;
            tracing::info!("Registry record {} {}", record_id, outcome);
        }

        Ok(output_path)
    }
}
