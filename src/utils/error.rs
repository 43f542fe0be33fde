use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML configuration error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    // Single failure signal for any non-success registry response.
    #[error("Registry request failed with status {status}")]
    RegistryError { status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::ApiError(_) | ReportError::RegistryError { .. } => ErrorCategory::Network,
            ReportError::IoError(_) => ErrorCategory::Io,
            ReportError::ConfigError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. }
            | ReportError::YamlError(_) => ErrorCategory::Configuration,
            ReportError::SerializationError(_) | ReportError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::ApiError(_) | ReportError::RegistryError { .. } => ErrorSeverity::Medium,
            ReportError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the registry endpoint is reachable and the token is valid"
            }
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::Data => "Check that the issues file matches the expected JSON layout",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::RegistryError { status } => {
                format!("The registry rejected the upload (HTTP {})", status)
            }
            ReportError::ApiError(_) => "Could not reach the registry service".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
