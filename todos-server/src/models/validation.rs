//! Validation error types

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Body is not JSON of the todo shape
    #[error("body must be todo's json")]
    InvalidBody { reason: String },

    /// Path id does not parse as a 64-bit integer
    #[error("id must be a 64-bit integer")]
    InvalidId { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidId {
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "id must be a 64-bit integer");
    }

    #[test]
    fn body_error_hides_parser_detail() {
        let err = ValidationError::InvalidBody {
            reason: "expected value at line 1 column 1".into(),
        };
        assert_eq!(err.to_string(), "body must be todo's json");
    }
}
