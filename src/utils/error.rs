use crate::domain::model::AnchorMismatch;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {path}")]
    DecodeError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Anchor validation failed: {} anchor(s) did not match", .mismatches.len())]
    AnchorMismatch { mismatches: Vec<AnchorMismatch> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Validation,
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

impl StripError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StripError::FileNotFound { .. } | StripError::IoError(_) => ErrorCategory::Io,
            StripError::DecodeError { .. } | StripError::SerializationError(_) => {
                ErrorCategory::Data
            }
            StripError::AnchorMismatch { .. } => ErrorCategory::Validation,
            StripError::ConfigError { .. }
            | StripError::InvalidConfigValueError { .. }
            | StripError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StripError::FileNotFound { .. } => {
                "Check the target path, or pass --file with the correct location"
            }
            StripError::IoError(_) => "Check file permissions and available disk space",
            StripError::DecodeError { .. } => "Make sure the target file is saved as UTF-8",
            StripError::AnchorMismatch { .. } => {
                "The file has changed since the ranges were computed; recompute the line ranges and anchors"
            }
            StripError::ConfigError { .. }
            | StripError::InvalidConfigValueError { .. }
            | StripError::MissingConfigError { .. } => {
                "Fix the configuration file and run again"
            }
            StripError::SerializationError(_) => "Run again without --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StripError::FileNotFound { path } => format!("Cannot find file '{}'", path),
            StripError::DecodeError { path, .. } => {
                format!("File '{}' is not valid UTF-8 text", path)
            }
            StripError::AnchorMismatch { mismatches } => format!(
                "{} anchor line(s) did not match; the file was left untouched",
                mismatches.len()
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
