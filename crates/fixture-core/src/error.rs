//! Error types for generator construction.

/// Error type for generator construction.
///
/// Every variant is raised while building a [`crate::Limits`] or a name
/// source. Generating a document never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// A limit was zero or a probability was outside `[0, 1]`
    #[error("Invalid limit '{limit}': {reason}")]
    InvalidLimit {
        limit: &'static str,
        reason: String,
    },

    /// A fixed name pool was constructed from no names
    #[error("Cannot construct a fixed name source from no names")]
    EmptyNamePool,

    /// A name or name prefix is not an exported identifier
    #[error("Invalid field name: {0:?}")]
    InvalidName(String),
}

impl GeneratorError {
    pub(crate) fn invalid_limit(limit: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidLimit {
            limit,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeneratorError::invalid_limit("max_field_count", "must be > 0");
        assert_eq!(
            err.to_string(),
            "Invalid limit 'max_field_count': must be > 0"
        );
        assert_eq!(
            GeneratorError::InvalidName("lower".to_string()).to_string(),
            "Invalid field name: \"lower\""
        );
    }
}
