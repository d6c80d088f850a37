//! Numeric validators
//!
//! Form inputs keep numbers as text until submission, so the format check
//! works on `str` while the bound checks work on the parsed `f64`.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

#[allow(clippy::unwrap_used)]
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").unwrap());

/// Parses a plain decimal literal (`12`, `-3.5`, `.25`, `4.`).
///
/// Surrounding whitespace is ignored. Exponents, `inf` and `NaN` are not
/// decimals and return `None`.
#[must_use]
pub fn parse_decimal(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if DECIMAL_REGEX.is_match(trimmed) {
        trimmed.parse::<f64>().ok()
    } else {
        None
    }
}

crate::validator! {
    /// Validates that a string is a plain decimal number.
    pub DecimalFormat for str;
    rule(input) { parse_decimal(input).is_some() }
    error(input) { ValidationError::invalid_format("number") }
    fn decimal_format();
}

crate::validator! {
    /// Validates that a number is greater than or equal to a lower bound.
    #[derive(Copy, PartialEq)]
    pub MinNumber { min: f64 } for f64;
    rule(self, input) { *input >= self.min }
    error(self, input) { ValidationError::below_min(self.min) }
    fn min_number(min: f64);
}

crate::validator! {
    /// Validates that a number is less than or equal to an upper bound.
    #[derive(Copy, PartialEq)]
    pub MaxNumber { max: f64 } for f64;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::above_max(self.max) }
    fn max_number(max: f64);
}
