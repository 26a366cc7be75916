use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecommentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Cannot determine language for '{path}'")]
    UnknownLanguageError { path: String },

    #[error("Input '{path}' is {size} bytes, limit is {limit}")]
    InputTooLargeError { path: String, size: u64, limit: u64 },
}

impl DecommentError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DecommentError::IoError(e) => format!("Could not read or write a file: {}", e),
            DecommentError::SerializationError(_) => "Could not build the JSON report".to_string(),
            DecommentError::ConfigError { message } => format!("Bad configuration: {}", message),
            DecommentError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
            DecommentError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            DecommentError::UnknownLanguageError { path } => {
                format!("Cannot tell which language '{}' is written in", path)
            }
            DecommentError::InputTooLargeError { path, size, limit } => format!(
                "'{}' is too large ({} bytes, limit {} bytes)",
                path, size, limit
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DecommentError::IoError(_) => "Check that the path exists and is writable",
            DecommentError::SerializationError(_) => "Run again without --report",
            DecommentError::ConfigError { .. } | DecommentError::MissingConfigError { .. } => {
                "Check the [strip] table of the config file and its ${VAR} placeholders"
            }
            DecommentError::InvalidConfigValueError { .. } => "Run with --help to see valid flags",
            DecommentError::UnknownLanguageError { .. } => {
                "Pass --language javascript|cpp|lua|python"
            }
            DecommentError::InputTooLargeError { .. } => "Raise max_file_bytes in the config file",
        }
    }

    /// Process exit code: configuration problems 2, everything else 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DecommentError::ConfigError { .. }
            | DecommentError::InvalidConfigValueError { .. }
            | DecommentError::MissingConfigError { .. }
            | DecommentError::UnknownLanguageError { .. }
            | DecommentError::InputTooLargeError { .. } => 2,
            DecommentError::IoError(_) | DecommentError::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecommentError>;
