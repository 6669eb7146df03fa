use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read input '{path}': {message}")]
    InputReadError { path: String, message: String },

    #[error("Failed to parse input '{path}': {message}")]
    InputParseError { path: String, message: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDateError { value: String, reason: String },

    #[error("Failed to write {} output file(s): {}", .failed.len(), .failed.join(", "))]
    OutputWriteError { failed: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Processing,
    System,
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
            ReportError::InputReadError { .. }
            | ReportError::InputParseError { .. }
            | ReportError::InvalidDateError { .. } => ErrorCategory::Input,
            ReportError::OutputWriteError { .. } => ErrorCategory::Output,
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ReportError::SerializationError(_) => ErrorCategory::Processing,
            ReportError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration | ErrorCategory::Processing => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 根據嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReportError::InputReadError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            ReportError::InputParseError { .. } => {
                "Make sure the input is a JSON array of people with 'name' and 'completions'"
                    .to_string()
            }
            ReportError::InvalidDateError { .. } => {
                "Use YYYY-MM-DD, M/D/YYYY or an RFC 3339 timestamp".to_string()
            }
            ReportError::OutputWriteError { .. } => {
                "Check that the output directory exists and is writable".to_string()
            }
            ReportError::ConfigError { .. }
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file".to_string()
            }
            ReportError::SerializationError(_) => {
                "Re-run with --verbose and inspect the log output".to_string()
            }
            ReportError::IoError(_) => "Check file permissions and available disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not load training records: {}", self),
            ErrorCategory::Output => format!("Could not save reports: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Processing => format!("Report generation failed: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
