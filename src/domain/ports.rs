use crate::domain::model::{IssueMap, Package, RiskAssessment, RiskReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_directory(&self) -> &str;
    fn registry_endpoint(&self) -> Option<&str>;
    fn registry_token(&self) -> Option<&str>;
    fn request_timeout_seconds(&self) -> u64;
}

/// The risk-scoring collaborator. The scoring algorithm itself lives behind
/// this seam; the reporting flow only consumes its output.
pub trait RiskAnalyzer: Send + Sync {
    fn analyze(&self, issues: &IssueMap, package: &Package, level: &str)
        -> Result<RiskAssessment>;
}

#[async_trait]
pub trait ReportPipeline: Send + Sync {
    async fn analyze(&self) -> Result<RiskAssessment>;
    async fn assemble(&self, assessment: RiskAssessment) -> Result<RiskReport>;
    async fn publish(&self, report: RiskReport) -> Result<String>;
}
