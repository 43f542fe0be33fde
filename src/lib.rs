pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::{CliConfig, YamlConfig};
pub use core::{
    RegistryClient, ReportEngine, RiskReportPipeline, SeverityAnalyzer, SyncOutcome,
};
pub use domain::model::{Issue, IssueMap, Package, RiskAssessment, RiskReport};
pub use utils::error::{ReportError, Result};
