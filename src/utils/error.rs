use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("Observation store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

impl ClimateError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClimateError::ConfigValidationError { .. }
                | ClimateError::InvalidConfigValueError { .. }
                | ClimateError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClimateError::Store(_) => "The observation database could not be queried".to_string(),
            ClimateError::IoError(e) => format!("File or network access failed: {}", e),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClimateError::Store(_) => {
                "Check that the database URL points to an existing SQLite file with 'measurement' and 'station' tables"
            }
            ClimateError::IoError(_) => "Check file permissions and that the bind address is free",
            ClimateError::MissingConfigError { .. } => "Check the --config path or omit it to run with defaults",
            _ => "Review the configuration file and command line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;
