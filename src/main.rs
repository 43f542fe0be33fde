use clap::Parser;
use risk_report::config::cli::load_issues;
use risk_report::core::ConfigProvider;
use risk_report::utils::{logger, validation::Validate};
use risk_report::{
    CliConfig, LocalStorage, Package, ReportEngine, RiskReportPipeline, SeverityAnalyzer,
    YamlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting risk-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config_file.clone() {
        let yaml = YamlConfig::from_file(&path)?;
        yaml.validate()?;
        config.apply_yaml(&yaml);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let package = Package::new(config.package_name.clone(), config.package_path.clone());
    let level = config.level.clone();

    let issues = match load_issues(&config.issues_file) {
        Ok(issues) => issues,
        Err(e) => {
            tracing::error!("❌ Could not load issues from {}: {}", config.issues_file, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(config.output_directory().to_string());
    let pipeline = RiskReportPipeline::new(
        storage,
        config,
        SeverityAnalyzer,
        package,
        issues,
        level,
    );
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Risk report completed successfully!");
            println!("✅ Risk report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Risk report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                risk_report::utils::error::ErrorSeverity::Low => 0,
                risk_report::utils::error::ErrorSeverity::Medium => 2,
                risk_report::utils::error::ErrorSeverity::High => 1,
                risk_report::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
