//! String content validators
//!
//! Format checks for email addresses and web addresses.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

#[allow(clippy::unwrap_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

// Scheme is optional: users type "www.example.com" into website fields.
#[allow(clippy::unwrap_used)]
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:https?://)?(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    pub Email { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates web address format.
    ///
    /// Accepts an optional `http://` or `https://` scheme, a dotted host name
    /// with an alphabetic top-level domain, an optional port and an optional
    /// path, query or fragment.
    pub Url { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("url") }
    new() {
        Self {
            pattern: URL_REGEX.clone(),
        }
    }
    fn url();
}

// ============================================================================
// TESTS
// ============================================================================
