//! Error taxonomy for user-facing validation
//!
//! The valuation engine itself is infallible: missing prices, an empty
//! portfolio, or removing an unknown id are all valid states. The only
//! errors this crate defines are rejections of user input on add.

use thiserror::Error;

/// Rejection of a user-supplied holding. State is never mutated when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("portfolio already has a holding for '{id}' (remove it first to change the position)")]
    DuplicateHolding { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::NotANumber {
            field: "quantity",
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("quantity"));
        assert!(err.to_string().contains("abc"));

        let err = ValidationError::NotPositive { field: "buy price" };
        assert!(err.to_string().contains("buy price"));
    }
}
