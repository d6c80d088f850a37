//! Built-in typed validators
//!
//! # Categories
//!
//! - **Presence**: [`Required`], [`NonEmptyArray`] (over `serde_json::Value`)
//! - **Content**: [`Email`], [`Url`]
//! - **Numeric**: [`DecimalFormat`], [`MinNumber`], [`MaxNumber`]
//! - **Length**: [`MinLength`]
//! - **Comparison**: [`Matches`]

pub mod compare;
pub mod content;
pub mod length;
pub mod numeric;
pub mod presence;

pub use compare::{Matches, matches};
pub use content::{Email, Url, email, url};
pub use length::{MinLength, min_length};
pub use numeric::{
    DecimalFormat, MaxNumber, MinNumber, decimal_format, max_number, min_number, parse_decimal,
};
pub use presence::{NonEmptyArray, Required, is_blank, non_empty_array, required};
