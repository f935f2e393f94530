use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Unknown {kind} referenced: {key}")]
    UnknownReference { kind: String, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BookingError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        BookingError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::InvalidArgument { .. } => ErrorCategory::Domain,
            BookingError::ConfigError { .. }
            | BookingError::ConfigValidationError { .. }
            | BookingError::UnknownReference { .. } => ErrorCategory::Configuration,
            BookingError::IoError(_)
            | BookingError::SerializationError(_)
            | BookingError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BookingError::InvalidArgument { .. } => ErrorSeverity::Medium,
            BookingError::ConfigError { .. }
            | BookingError::ConfigValidationError { .. }
            | BookingError::UnknownReference { .. } => ErrorSeverity::High,
            BookingError::SerializationError(_) | BookingError::CsvError(_) => ErrorSeverity::High,
            BookingError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BookingError::InvalidArgument { field, .. } => {
                format!("Check the value supplied for '{}'", field)
            }
            BookingError::ConfigError { .. } => {
                "Make sure the catalog file exists and is valid TOML".to_string()
            }
            BookingError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' entry in the catalog file", field)
            }
            BookingError::UnknownReference { kind, .. } => {
                format!("Declare the {} in the catalog before referencing it", kind)
            }
            BookingError::IoError(_) => "Check file paths and permissions".to_string(),
            BookingError::SerializationError(_) | BookingError::CsvError(_) => {
                "Try the plain text report format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::InvalidArgument { field, reason } => {
                format!("Rejected change to {}: {}", field, reason)
            }
            BookingError::ConfigError { message } => format!("Could not load catalog: {}", message),
            BookingError::ConfigValidationError { field, message } => {
                format!("Catalog entry '{}' is invalid: {}", field, message)
            }
            BookingError::UnknownReference { kind, key } => {
                format!("The catalog refers to an unknown {} '{}'", kind, key)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
