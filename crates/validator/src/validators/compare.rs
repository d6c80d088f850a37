//! Cross-field comparison validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string equals an expected counterpart.
    ///
    /// Used for confirmation inputs ("confirm password"). The expected value
    /// is deliberately kept out of the error so it never reaches a message.
    #[derive(PartialEq, Eq, Hash)]
    pub Matches { expected: String } for str;
    rule(self, input) { input == self.expected }
    error(self, input) { ValidationError::new("mismatch", "Values do not match") }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn matches(expected: impl Into<String>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_matches() {
        let validator = matches("hunter22");
        assert!(validator.validate("hunter22").is_ok());
        assert!(validator.validate("hunter2").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_mismatch_error_has_no_params() {
        let err = matches("hunter22").validate("x").unwrap_err();
        assert_eq!(err.code, "mismatch");
        assert!(err.params.is_empty());
    }
}
