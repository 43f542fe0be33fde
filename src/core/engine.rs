use crate::core::ReportPipeline;
use crate::utils::error::Result;

/// Drives the three reporting stages in order: analyze, assemble, publish.
pub struct ReportEngine<P: ReportPipeline> {
    pipeline: P,
}

impl<P: ReportPipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting risk report generation");

        let assessment = self.pipeline.analyze().await?;
        tracing::info!(
            "Risk analysis complete, overall level: {}",
            assessment.overall_risk_level
        );

        let report = self.pipeline.assemble(assessment).await?;
        tracing::info!(
            "Assembled report covering {} tools",
            report.issue_count_by_tool.len()
        );

        let output_path = self.pipeline.publish(report).await?;
        tracing::info!("Report published to {}", output_path);

        Ok(output_path)
    }
}
