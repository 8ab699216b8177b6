//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each variant is one outcome kind a lifecycle operation can end in. The
/// transport layer maps kinds to status codes; the domain only decides which
/// kind applies and carries a human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Structurally missing or malformed input (no body, blank identifier,
    /// identity mismatch between path and body).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Well-formed input that violates a business rule.
    #[error("unprocessable entity: {0}")]
    Unprocessable(String),

    /// An active record already occupies the identity, or the record is
    /// already archived.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No record matches the given identity.
    #[error("not found: {0}")]
    NotFound(String),

    /// A collaborator (store, location directory) failed. Surfaced as-is;
    /// the domain never retries.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

/// Discriminant of [`DomainError`], handy for assertions and status mapping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRequest,
    Unprocessable,
    Conflict,
    NotFound,
    Unavailable,
}

impl DomainError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Unprocessable(_) => ErrorKind::Unprocessable,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unavailable(_) => ErrorKind::Unavailable,
        }
    }

    /// The message without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest(m)
            | Self::Unprocessable(m)
            | Self::Conflict(m)
            | Self::NotFound(m)
            | Self::Unavailable(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(DomainError::invalid_request("x").kind(), ErrorKind::InvalidRequest);
        assert_eq!(DomainError::unprocessable("x").kind(), ErrorKind::Unprocessable);
        assert_eq!(DomainError::conflict("x").kind(), ErrorKind::Conflict);
        assert_eq!(DomainError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(DomainError::unavailable("x").kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn display_prefixes_kind_but_message_does_not() {
        let err = DomainError::conflict("Warehouse 'MWH.001' is already archived.");
        assert_eq!(err.to_string(), "conflict: Warehouse 'MWH.001' is already archived.");
        assert_eq!(err.message(), "Warehouse 'MWH.001' is already archived.");
    }
}
