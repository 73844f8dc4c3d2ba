// ⚠️ Record Errors - Everything the record model can reject
//
// All errors surface synchronously at the point of violation.
// None of them leave a half-built value or a half-applied mutation behind.

/// Errors raised by value types, the company builder and the record store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// Input did not match the field's recognized format or vocabulary
    #[error("invalid {field}: {message}")]
    InvalidFormat {
        field: &'static str,
        message: String,
    },

    /// A required company field was never supplied to the builder
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A store operation was handed a record that does not satisfy its precondition
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Mutation attempted through a read-only view
    #[error("view is read-only and cannot be modified")]
    Unmodifiable,
}

impl RecordError {
    pub(crate) fn invalid_format(field: &'static str, message: impl Into<String>) -> Self {
        RecordError::InvalidFormat {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let err = RecordError::invalid_format("phone", "digits only");
        assert_eq!(err.to_string(), "invalid phone: digits only");

        let err = RecordError::MissingField("role");
        assert_eq!(err.to_string(), "missing required field: role");
    }
}
