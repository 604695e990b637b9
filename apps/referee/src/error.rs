use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::domain::DomainError;

/// Application-level error for the binaries and the service handle.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => match e {
                DomainError::InvalidCardId(_) => "INVALID_CARD_ID",
                DomainError::InvalidSeat(_) => "INVALID_SEAT",
                DomainError::ParseCard(_) => "PARSE_CARD",
                DomainError::InvalidState { .. } => "INVALID_STATE",
                DomainError::NotYourTurn { .. } => "NOT_YOUR_TURN",
                DomainError::CardAlreadyPlayed(_) => "CARD_ALREADY_PLAYED",
                DomainError::RevokeDetected { .. } => "REVOKE_DETECTED",
                DomainError::AmbiguousOutcome(_) => "AMBIGUOUS_OUTCOME",
            },
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    /// The wrapped domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }
}
