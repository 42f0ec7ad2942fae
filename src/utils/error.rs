use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Load error: {message}")]
    Load { message: String },
}

/// Coarse classification used for failure logging and the exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Unexpected,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::Network { .. } => ErrorCategory::Network,
            _ => ErrorCategory::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
