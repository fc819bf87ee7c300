use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse {source_name}: {message}")]
    TomlError {
        source_name: String,
        message: String,
    },

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

    #[error("Profile error: {message}")]
    ProfileError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Content,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::TomlError { .. }
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::ProfileError { .. } | SiteError::SerializationError(_) => {
                ErrorCategory::Content
            }
            SiteError::ZipError(_) | SiteError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorSeverity::Critical,
            SiteError::SerializationError(_) => ErrorSeverity::High,
            _ => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::TomlError { source_name, .. } => {
                format!("Check the TOML syntax of {}", source_name)
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            SiteError::ProfileError { .. } => {
                "Compare the profile file against assets/profile.toml".to_string()
            }
            SiteError::IoError(_) | SiteError::ZipError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SiteError::ConfigError { .. } => "Review site.toml".to_string(),
            SiteError::SerializationError(_) => {
                "Re-run with --verbose and inspect the logged stage".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Content => format!("Could not build the page: {}", self),
            ErrorCategory::Output => format!("Could not write the site: {}", self),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
