use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API request to {url} returned HTTP {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed CSV at line {line}: {message}")]
    MalformedCsvError { line: u64, message: String },

    #[error("Cannot convert value {value:?} in column '{field}' (row {row})")]
    TransformError {
        row: usize,
        field: String,
        value: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
    Network,
    Parse,
    Transform,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code reported for a failed run; never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::HttpStatusError { .. } => ErrorCategory::Network,
            EtlError::CsvError(_) | EtlError::MalformedCsvError { .. } => ErrorCategory::Parse,
            EtlError::TransformError { .. } => ErrorCategory::Transform,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Storage,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Transform | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ApiError(e) if e.is_timeout() => {
                "The book dataset download timed out".to_string()
            }
            EtlError::ApiError(_) => "Could not reach the book dataset server".to_string(),
            EtlError::HttpStatusError { status, .. } => {
                format!("The book dataset server answered with HTTP {}", status)
            }
            EtlError::CsvError(_) | EtlError::MalformedCsvError { .. } => {
                "The downloaded dataset is not valid CSV".to_string()
            }
            EtlError::TransformError { row, field, .. } => {
                format!("Row {} has an unusable value in column '{}'", row, field)
            }
            EtlError::IoError(_) => "Could not write the books file".to_string(),
            EtlError::SerializationError(_) => "Could not encode the books as JSON".to_string(),
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check the network connection and the source URL, then run again"
            }
            ErrorCategory::Parse => {
                "Verify that the source URL serves CSV text with a header row"
            }
            ErrorCategory::Transform => {
                "Fix the source value or run without --strict to fall back to defaults"
            }
            ErrorCategory::Storage => {
                "Check that the output directory is writable and the disk is not full"
            }
            ErrorCategory::Configuration => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
