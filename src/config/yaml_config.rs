use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./output";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YamlConfig {
    pub output: OutputConfig,
    pub registry: Option<RegistryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl YamlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(serde_yaml::from_str(&processed_content)?)
    }

    // Replaces ${VAR_NAME} occurrences; unresolved variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for YamlConfig {
    fn output_directory(&self) -> &str {
        &self.output.directory
    }

    fn registry_endpoint(&self) -> Option<&str> {
        self.registry.as_ref().map(|registry| registry.endpoint.as_str())
    }

    fn registry_token(&self) -> Option<&str> {
        self.registry
            .as_ref()
            .and_then(|registry| registry.token.as_deref())
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.registry
            .as_ref()
            .and_then(|registry| registry.timeout_seconds)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS)
    }
}

impl Validate for YamlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output.directory", &self.output.directory)?;

        if let Some(registry) = &self.registry {
            validation::validate_url("registry.endpoint", &registry.endpoint)?;
            if let Some(timeout) = registry.timeout_seconds {
                validation::validate_range("registry.timeout_seconds", timeout, 1, 300)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_yaml_config() {
        let yaml_content = r#"
output:
  directory: ./reports
registry:
  endpoint: https://registry.example.com/api
  timeout_seconds: 10
"#;

        let config = YamlConfig::from_yaml_str(yaml_content).unwrap();

        assert_eq!(config.output_directory(), "./reports");
        assert_eq!(
            config.registry_endpoint(),
            Some("https://registry.example.com/api")
        );
        assert_eq!(config.request_timeout_seconds(), 10);
        assert!(config.registry_token().is_none());
    }

    #[test]
    fn test_registry_section_is_optional() {
        let yaml_content = r#"
output:
  directory: ./reports
"#;

        let config = YamlConfig::from_yaml_str(yaml_content).unwrap();

        assert!(config.registry_endpoint().is_none());
        assert_eq!(
            config.request_timeout_seconds(),
            DEFAULT_REQUEST_TIMEOUT_SECONDS
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_REGISTRY_TOKEN", "s3cret");

        let yaml_content = r#"
output:
  directory: ./reports
registry:
  endpoint: https://registry.example.com/api
  token: ${TEST_REGISTRY_TOKEN}
"#;

        let config = YamlConfig::from_yaml_str(yaml_content).unwrap();
        assert_eq!(config.registry_token(), Some("s3cret"));

        std::env::remove_var("TEST_REGISTRY_TOKEN");
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let yaml_content = r#"
output:
  directory: ./reports
registry:
  endpoint: not-a-url
"#;

        let config = YamlConfig::from_yaml_str(yaml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let yaml_content = r#"
output:
  directory: ./file-test-output
"#;
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = YamlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_directory(), "./file-test-output");
    }
}
