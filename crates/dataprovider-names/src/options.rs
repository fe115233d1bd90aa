//! Formatter configuration.
//!
//! The defaults produce `<null>`, `<empty string>` and `<np>` sentinels joined
//! by `", "`. Each setting can be overridden in code through the `with_*`
//! builders or from environment variables prefixed with `DATAPROVIDER_NAMES_`.

use std::env;

use crate::errors::ConfigError;
use crate::sanitize::{NON_PRINTABLE_TOKEN, is_printable};

/// Token substituted for an absent value.
pub const NULL_TOKEN: &str = "<null>";
/// Token substituted for empty text.
pub const EMPTY_TOKEN: &str = "<empty string>";
/// Separator placed between formatted arguments.
pub const SEPARATOR: &str = ", ";

const NULL_TOKEN_VAR: &str = "DATAPROVIDER_NAMES_NULL_TOKEN";
const EMPTY_TOKEN_VAR: &str = "DATAPROVIDER_NAMES_EMPTY_TOKEN";
const NON_PRINTABLE_TOKEN_VAR: &str = "DATAPROVIDER_NAMES_NON_PRINTABLE_TOKEN";
const SEPARATOR_VAR: &str = "DATAPROVIDER_NAMES_SEPARATOR";

/// Sentinel tokens and separator used while formatting arguments.
///
/// # Environment Variables
///
/// - `DATAPROVIDER_NAMES_NULL_TOKEN`: replacement for absent values
/// - `DATAPROVIDER_NAMES_EMPTY_TOKEN`: replacement for empty text
/// - `DATAPROVIDER_NAMES_NON_PRINTABLE_TOKEN`: replacement for each
///   non-printable code point
/// - `DATAPROVIDER_NAMES_SEPARATOR`: text placed between arguments
///
/// # Examples
/// ```
/// use dataprovider_names::FormatOptions;
/// let options = FormatOptions::default().with_null_token("nil");
/// assert_eq!(options.null_token, "nil");
/// assert_eq!(options.separator, ", ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Replacement for absent values.
    pub null_token: String,
    /// Replacement for empty text.
    pub empty_token: String,
    /// Replacement for each non-printable code point.
    pub non_printable_token: String,
    /// Text placed between formatted arguments.
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            null_token: NULL_TOKEN.to_string(),
            empty_token: EMPTY_TOKEN.to_string(),
            non_printable_token: NON_PRINTABLE_TOKEN.to_string(),
            separator: SEPARATOR.to_string(),
        }
    }
}

impl FormatOptions {
    /// Replace the token used for absent values.
    #[must_use]
    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_token = token.into();
        self
    }

    /// Replace the token used for empty text.
    #[must_use]
    pub fn with_empty_token(mut self, token: impl Into<String>) -> Self {
        self.empty_token = token.into();
        self
    }

    /// Replace the token used for non-printable code points.
    #[must_use]
    pub fn with_non_printable_token(mut self, token: impl Into<String>) -> Self {
        self.non_printable_token = token.into();
        self
    }

    /// Replace the separator placed between arguments.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Load options from environment variables, falling back to defaults for
    /// unset ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] if a sentinel token is empty or
    /// any value contains non-printable characters.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Load options through `lookup`, which maps a variable name to its value.
    ///
    /// [`FormatOptions::from_env`] uses the process environment; callers may
    /// pass any other source keyed by the same variable names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidToken`] under the same conditions as
    /// [`FormatOptions::from_env`].
    ///
    /// # Examples
    /// ```
    /// use dataprovider_names::FormatOptions;
    /// let options = FormatOptions::from_lookup(|variable| {
    ///     (variable == "DATAPROVIDER_NAMES_SEPARATOR").then(|| " / ".to_string())
    /// })
    /// .expect("printable separator");
    /// assert_eq!(options.separator, " / ");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let token = |variable: &'static str, default: String, allow_empty: bool| {
            lookup(variable).map_or(Ok(default), |value| {
                checked_token(variable, value, allow_empty)
            })
        };
        Ok(Self {
            null_token: token(NULL_TOKEN_VAR, defaults.null_token, false)?,
            empty_token: token(EMPTY_TOKEN_VAR, defaults.empty_token, false)?,
            non_printable_token: token(
                NON_PRINTABLE_TOKEN_VAR,
                defaults.non_printable_token,
                false,
            )?,
            separator: token(SEPARATOR_VAR, defaults.separator, true)?,
        })
    }
}

fn checked_token(
    variable: &'static str,
    value: String,
    allow_empty: bool,
) -> Result<String, ConfigError> {
    if (value.is_empty() && !allow_empty) || !value.chars().all(is_printable) {
        return Err(ConfigError::InvalidToken { variable, value });
    }
    log::debug!("{variable} overrides the default with {value:?}");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |variable: &str| vars.get(variable).map(|value| (*value).to_string())
    }

    #[test]
    fn builders_override_single_fields() {
        let options = FormatOptions::default()
            .with_empty_token("''")
            .with_non_printable_token("?")
            .with_separator(" | ");
        assert_eq!(options.null_token, NULL_TOKEN);
        assert_eq!(options.empty_token, "''");
        assert_eq!(options.non_printable_token, "?");
        assert_eq!(options.separator, " | ");
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(
            FormatOptions::from_lookup(lookup_from(&[])),
            Ok(FormatOptions::default())
        );
    }

    #[test]
    fn reads_overrides() {
        let options = FormatOptions::from_lookup(lookup_from(&[
            (NULL_TOKEN_VAR, "None"),
            (SEPARATOR_VAR, ""),
        ]));
        assert_eq!(
            options,
            Ok(FormatOptions::default()
                .with_null_token("None")
                .with_separator(""))
        );
    }

    #[test]
    fn rejects_empty_sentinel_token() {
        let options = FormatOptions::from_lookup(lookup_from(&[(EMPTY_TOKEN_VAR, "")]));
        assert_eq!(
            options,
            Err(ConfigError::InvalidToken {
                variable: EMPTY_TOKEN_VAR,
                value: String::new(),
            })
        );
    }

    #[test]
    fn rejects_non_printable_token() {
        let options =
            FormatOptions::from_lookup(lookup_from(&[(NON_PRINTABLE_TOKEN_VAR, "\u{7}")]));
        assert!(matches!(
            options,
            Err(ConfigError::InvalidToken {
                variable: NON_PRINTABLE_TOKEN_VAR,
                ..
            })
        ));
    }

    #[test]
    fn rejects_separator_with_line_break() {
        let options = FormatOptions::from_lookup(lookup_from(&[(SEPARATOR_VAR, ",\n")]));
        assert!(options.is_err());
    }
}
