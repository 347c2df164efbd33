use crate::domain::model::RangeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Page source error: {message}")]
    PageSourceError { message: String },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PanelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PanelError::Range(_) => ErrorCategory::Input,
            PanelError::ConfigError { .. }
            | PanelError::ConfigValidationError { .. }
            | PanelError::InvalidConfigValueError { .. }
            | PanelError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PanelError::HttpError(_) | PanelError::PageSourceError { .. } => ErrorCategory::Network,
            PanelError::IoError(_)
            | PanelError::SerializationError(_)
            | PanelError::ClipboardError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            // Range errors already carry the text shown in the status line.
            PanelError::Range(e) => e.to_string(),
            PanelError::HttpError(_) | PanelError::PageSourceError { .. } => {
                "Could not load the page source.".to_string()
            }
            PanelError::ConfigError { message } => format!("Configuration problem: {}", message),
            PanelError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            PanelError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            PanelError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PanelError::Range(RangeError::InvalidDate) => "Enter dates as YYYY-MM-DD.",
            PanelError::Range(RangeError::OrderingViolation) => {
                "Pick a start date on or before the end date."
            }
            PanelError::HttpError(_) | PanelError::PageSourceError { .. } => {
                "Check that the page URL is reachable."
            }
            PanelError::ConfigError { .. }
            | PanelError::ConfigValidationError { .. }
            | PanelError::InvalidConfigValueError { .. }
            | PanelError::MissingConfigError { .. } => "Fix the configuration file and retry.",
            PanelError::IoError(_) => "Check file paths and permissions.",
            PanelError::SerializationError(_) => "Report this as a bug.",
            PanelError::ClipboardError { .. } => "Copy the page manually.",
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
