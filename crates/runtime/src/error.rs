//! Errors surfaced while loading runtime configuration.
use std::path::PathBuf;

use adventure_core::{ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config RON")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid timer config: {0}")]
    InvalidTimer(String),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Read { .. } => ErrorSeverity::Recoverable,
            Self::Parse(_) | Self::InvalidTimer(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CONFIG_READ_FAILED",
            Self::Parse(_) => "CONFIG_PARSE_FAILED",
            Self::InvalidTimer(_) => "CONFIG_INVALID_TIMER",
        }
    }
}
