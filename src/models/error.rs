use thiserror::Error;

use super::validation::{Field, Violation, ViolationKind, Violations};

pub type AuthorResult<T> = Result<T, AuthorError>;

/// Errors raised by author records and their storage operations.
#[derive(Debug, Error)]
pub enum AuthorError {
    #[error("Invalid {field}: {message}")]
    InvalidFormat { field: Field, message: String },

    #[error("{field} out of range: {message}")]
    OutOfRange { field: Field, message: String },

    /// Construction failed on more than one field.
    #[error("Invalid author: {0}")]
    Invalid(Violations),

    #[error("Persistence error: {0}")]
    Persistence(#[from] sea_orm::DbErr),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl AuthorError {
    /// Field the error is about, when it concerns exactly one.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidFormat { field, .. } | Self::OutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<Violation> for AuthorError {
    fn from(violation: Violation) -> Self {
        let Violation {
            field,
            kind,
            message,
        } = violation;

        match kind {
            ViolationKind::InvalidFormat => Self::InvalidFormat { field, message },
            ViolationKind::OutOfRange => Self::OutOfRange { field, message },
        }
    }
}

impl From<Violations> for AuthorError {
    fn from(violations: Violations) -> Self {
        match <[Violation; 1]>::try_from(violations.into_vec()) {
            Ok([only]) => only.into(),
            Err(all) => Self::Invalid(all.into_iter().collect()),
        }
    }
}
