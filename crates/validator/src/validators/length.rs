//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), which is what a
//! user counts when a form says "at least 8 characters".

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length() {
        let validator = min_length(8);
        assert!(validator.validate("password").is_ok());
        assert!(validator.validate("secret").is_err());
        assert!(min_length(0).validate("").is_ok());
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert!(min_length(4).validate("ääää").is_ok());
        assert!(min_length(5).validate("ääää").is_err());

        let err = min_length(5).validate("ääää").unwrap_err();
        assert_eq!(err.param("actual"), Some("4"));
    }
}
