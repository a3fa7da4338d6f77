//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Construction of a value object either yields a value that satisfies all of
/// its invariants or one of these errors. The display form is the bare message,
/// e.g. `Hour: 25`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A constructor or setter precondition was violated.
    #[error("{0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = DomainError::invalid_argument("Hour: 25");
        assert_eq!(err.to_string(), "Hour: 25");
        assert_eq!(err.message(), "Hour: 25");
    }

    #[test]
    fn invalid_argument_accepts_owned_and_borrowed_messages() {
        let borrowed = DomainError::invalid_argument("Min: 60");
        let owned = DomainError::invalid_argument(format!("Min: {}", 60));
        assert_eq!(borrowed, owned);
        assert!(matches!(owned, DomainError::InvalidArgument(ref m) if m == "Min: 60"));
    }
}
