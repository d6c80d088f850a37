//! Core trait for the validation system

use crate::foundation::ValidationError;

/// The trait every typed validator implements.
///
/// Generic over the input type so a validator states at compile time what it
/// can check. `Input` may be unsized (`str`).
///
/// # Examples
///
/// ```
/// use billform_validator::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("invoice").is_ok());
/// assert!(NotBlank.validate("  ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success and the failure otherwise.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
