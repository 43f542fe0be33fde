pub mod analyzer;
pub mod engine;
pub mod pipeline;
pub mod registry;
pub mod report;

pub use crate::domain::model::{IssueMap, Package, RiskAssessment, RiskReport};
pub use crate::domain::ports::{ConfigProvider, ReportPipeline, RiskAnalyzer, Storage};
pub use crate::utils::error::Result;

pub use analyzer::SeverityAnalyzer;
pub use engine::ReportEngine;
pub use pipeline::RiskReportPipeline;
pub use registry::{RegistryClient, SyncOutcome};
