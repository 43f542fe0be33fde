pub mod cli;
pub mod yaml_config;

pub use yaml_config::{YamlConfig, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_REQUEST_TIMEOUT_SECONDS};

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "risk-report"),
    command(about = "Generate a JSON risk assessment report and upload it to the registry")
)]
pub struct CliConfig {
    /// Issues exported by the host tool, JSON keyed by tool name
    #[cfg_attr(feature = "cli", arg(long))]
    pub issues_file: String,

    #[cfg_attr(feature = "cli", arg(long))]
    pub package_name: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub package_path: String,

    /// Name of the analysis level used in the scan
    #[cfg_attr(feature = "cli", arg(long))]
    pub level: String,

    #[cfg_attr(feature = "cli", arg(long))]
    pub output_directory: Option<String>,

    /// Registry base URL; when absent the report is only written to disk
    #[cfg_attr(feature = "cli", arg(long))]
    pub registry_endpoint: Option<String>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub registry_token: Option<String>,

    #[cfg_attr(feature = "cli", arg(long))]
    pub request_timeout_seconds: Option<u64>,

    /// Optional YAML configuration file; CLI arguments take precedence
    #[cfg_attr(feature = "cli", arg(long))]
    pub config_file: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Fill unset options from a YAML configuration file.
    pub fn apply_yaml(&mut self, yaml: &YamlConfig) {
        if self.output_directory.is_none() {
            self.output_directory = Some(yaml.output.directory.clone());
        }
        if let Some(registry) = &yaml.registry {
            if self.registry_endpoint.is_none() {
                self.registry_endpoint = Some(registry.endpoint.clone());
            }
            if self.registry_token.is_none() {
                self.registry_token = registry.token.clone();
            }
            if self.request_timeout_seconds.is_none() {
                self.request_timeout_seconds = registry.timeout_seconds;
            }
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_directory(&self) -> &str {
        self.output_directory
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_DIRECTORY)
    }

    fn registry_endpoint(&self) -> Option<&str> {
        self.registry_endpoint.as_deref()
    }

    fn registry_token(&self) -> Option<&str> {
        self.registry_token.as_deref()
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("package_name", &self.package_name)?;
        validation::validate_non_empty_string("level", &self.level)?;
        validation::validate_path("issues_file", &self.issues_file)?;
        validation::validate_path("output_directory", self.output_directory())?;

        if let Some(endpoint) = &self.registry_endpoint {
            validation::validate_url("registry_endpoint", endpoint)?;
        }
        validation::validate_range(
            "request_timeout_seconds",
            self.request_timeout_seconds(),
            1,
            300,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::yaml_config::{OutputConfig, RegistryConfig};

    fn base_config() -> CliConfig {
        CliConfig {
            issues_file: "issues.json".to_string(),
            package_name: "valid_package".to_string(),
            package_path: ".".to_string(),
            level: "level".to_string(),
            output_directory: None,
            registry_endpoint: None,
            registry_token: None,
            request_timeout_seconds: None,
            config_file: None,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults() {
        let config = base_config();
        assert_eq!(config.output_directory(), DEFAULT_OUTPUT_DIRECTORY);
        assert_eq!(
            config.request_timeout_seconds(),
            DEFAULT_REQUEST_TIMEOUT_SECONDS
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_fills_unset_options_only() {
        let mut config = base_config();
        config.registry_token = Some("from-cli".to_string());

        let yaml = YamlConfig {
            output: OutputConfig {
                directory: "./yaml-output".to_string(),
            },
            registry: Some(RegistryConfig {
                endpoint: "https://registry.example.com/api".to_string(),
                token: Some("from-yaml".to_string()),
                timeout_seconds: Some(15),
            }),
        };

        config.apply_yaml(&yaml);

        assert_eq!(config.output_directory(), "./yaml-output");
        assert_eq!(
            config.registry_endpoint(),
            Some("https://registry.example.com/api")
        );
        assert_eq!(config.registry_token(), Some("from-cli"));
        assert_eq!(config.request_timeout_seconds(), 15);
    }

    #[test]
    fn test_validation_rejects_bad_registry_endpoint() {
        let mut config = base_config();
        config.registry_endpoint = Some("ftp://registry.example.com".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_level() {
        let mut config = base_config();
        config.level = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
