//! Error types.
use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by filter construction and filter algebra.
///
/// Insertion and lookup are total and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor argument is outside of its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending argument.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Two filters cannot be combined because their shapes differ.
    #[error("incompatible filters: {reason}")]
    IncompatibleFilters {
        /// Which property differs.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn incompatible(reason: impl Into<String>) -> Self {
        Self::IncompatibleFilters {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_invalid_parameter() {
        let err = Error::invalid_parameter("expected_items", "must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter `expected_items`: must be greater than 0"
        );
    }

    #[test]
    fn display_incompatible() {
        let err = Error::incompatible("k must be equal (left=2, right=3)");
        assert_eq!(
            err.to_string(),
            "incompatible filters: k must be equal (left=2, right=3)"
        );
    }
}
