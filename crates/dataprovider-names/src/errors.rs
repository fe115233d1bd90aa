//! Error types shared by the subscript, placeholder and configuration modules.

use std::fmt;
use thiserror::Error;

/// Context for a subscript whose normalised bounds fall outside the argument
/// list.
///
/// The bounds are kept signed so negative indices that wrapped past the start
/// of the list are reported as computed rather than saturated.
///
/// # Examples
/// ```
/// use dataprovider_names::RangeErrorInfo;
/// let info = RangeErrorInfo::new("5", 5, 6, 2);
/// assert_eq!(info.len, 2);
/// assert_eq!(
///     info.to_string(),
///     "subscript `5` resolves to 5..6, outside of 2 argument(s)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeErrorInfo {
    /// Raw subscript text as written inside the brackets.
    pub subscript: String,
    /// Normalised inclusive start of the selection.
    pub from: i128,
    /// Normalised exclusive end of the selection.
    pub to: i128,
    /// Length of the argument list the subscript was resolved against.
    pub len: usize,
}

impl RangeErrorInfo {
    /// Describe an out-of-range resolution.
    #[must_use]
    pub fn new(subscript: impl Into<String>, from: i128, to: i128, len: usize) -> Self {
        Self {
            subscript: subscript.into(),
            from,
            to,
            len,
        }
    }
}

impl fmt::Display for RangeErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subscript `{}` resolves to {}..{}, outside of {} argument(s)",
            self.subscript, self.from, self.to, self.len
        )
    }
}

/// Errors surfaced while resolving an argument placeholder.
///
/// Formatting itself is total; only parsing and range checks fail.
///
/// # Examples
/// ```
/// use dataprovider_names::{PlaceholderError, RangeErrorInfo};
/// let info = RangeErrorInfo::new("0", 0, 1, 0);
/// let err = PlaceholderError::IndexOutOfRange(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    /// The bracketed expression is neither an integer nor an integer range.
    #[error("malformed subscript `{subscript}`, expected `<int>` or `<int>..<int>`")]
    MalformedSubscript {
        /// Raw subscript text.
        subscript: String,
    },
    /// The normalised bounds are inverted or exceed the argument list.
    #[error("{0}")]
    IndexOutOfRange(RangeErrorInfo),
    /// The text is not an `%a[..]` or `%p[..]` placeholder.
    #[error("`{placeholder}` is not an argument placeholder")]
    UnrecognisedPlaceholder {
        /// Offending placeholder text.
        placeholder: String,
    },
}

pub(crate) fn malformed_subscript(subscript: &str) -> PlaceholderError {
    PlaceholderError::MalformedSubscript {
        subscript: subscript.to_string(),
    }
}

pub(crate) fn out_of_range(subscript: &str, from: i128, to: i128, len: usize) -> PlaceholderError {
    PlaceholderError::IndexOutOfRange(RangeErrorInfo::new(subscript, from, to, len))
}

/// Errors raised while loading [`FormatOptions`](crate::FormatOptions) from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A sentinel token is empty or contains non-printable characters.
    #[error("invalid value {value:?} for {variable}, expected non-empty printable text")]
    InvalidToken {
        /// Name of the environment variable.
        variable: &'static str,
        /// Rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_range_error_with_negative_bounds() {
        let info = RangeErrorInfo::new("-4", -1, 0, 3);
        assert_eq!(
            info.to_string(),
            "subscript `-4` resolves to -1..0, outside of 3 argument(s)"
        );
    }

    #[test]
    fn forwards_range_error_display() {
        let err = out_of_range("1..0", 1, 1, 0);
        assert_eq!(
            err.to_string(),
            RangeErrorInfo::new("1..0", 1, 1, 0).to_string()
        );
    }

    #[test]
    fn names_malformed_subscript() {
        let err = malformed_subscript("1..x");
        assert!(err.to_string().contains("`1..x`"));
    }

    #[test]
    fn names_invalid_token_variable() {
        let err = ConfigError::InvalidToken {
            variable: "DATAPROVIDER_NAMES_NULL_TOKEN",
            value: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"\" for DATAPROVIDER_NAMES_NULL_TOKEN, expected non-empty printable text"
        );
    }
}
