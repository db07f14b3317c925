//! Domain errors.

use thiserror::Error;

/// Errors raised by validated constructors and aggregate lookups.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Lookup by name found nothing, e.g. `Level::sector("cave")`.
    #[error("Entity not found: {entity_type} named {name}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::not_found("Sector", "underground");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Entity not found: Sector named underground");
    }
}
