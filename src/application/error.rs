use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("incorrect credential: {0}")]
    IncorrectCredential(String),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Flattened taxonomy shared by the domain and application layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    IncorrectCredential,
    Unexpected,
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn incorrect_credential(msg: impl Into<String>) -> Self {
        Self::IncorrectCredential(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(DomainError::Validation(_)) | Self::Validation(_) => ErrorKind::Validation,
            Self::Domain(DomainError::NotFound(_)) | Self::NotFound(_) => ErrorKind::NotFound,
            Self::Domain(DomainError::Conflict(_)) | Self::Conflict(_) => ErrorKind::Conflict,
            Self::IncorrectCredential(_) => ErrorKind::IncorrectCredential,
            Self::Domain(DomainError::Persistence(_)) | Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// The bare reason, without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Domain(err) => err.reason(),
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::IncorrectCredential(msg)
            | Self::Unexpected(msg) => msg,
        }
    }
}
