//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RestoHubError`] via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RestoHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Failure in an IO adapter (database, filesystem).
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant or input format was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("cuisine type must not be empty")]
    EmptyCuisineType,

    #[error("location must not be empty")]
    EmptyLocation,

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// No record exists for the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: RestoHubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            RestoHubError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_not_found_message() {
        let err = NotFoundError {
            entity: "Restaurant",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Restaurant not found: abc");
    }

    #[test]
    fn should_pass_storage_message_through() {
        let source = std::io::Error::other("disk full");
        let err = RestoHubError::Storage(Box::new(source));
        assert_eq!(err.to_string(), "disk full");
    }
}
