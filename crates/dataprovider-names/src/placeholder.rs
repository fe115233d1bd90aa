//! `%a[..]` / `%p[..]` argument placeholders.
//!
//! A placeholder names a subscript of the test-case arguments; its
//! replacement is the formatted selection. `%a` and `%p` are aliases.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::errors::PlaceholderError;
use crate::format::ArgumentFormatter;
use crate::options::FormatOptions;
use crate::subscript::Subscript;
use crate::value::Argument;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([ap])\[(-?[0-9]+(?:\.\.-?[0-9]+)?)\]").unwrap_or_else(|_| unreachable!())
});

/// Return the captures when the whole of `text` is one placeholder.
fn full_match(text: &str) -> Option<Captures<'_>> {
    PLACEHOLDER_RE
        .captures(text)
        .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == text.len()))
}

/// Return `true` when `candidate` is exactly one argument placeholder.
///
/// # Examples
/// ```
/// use dataprovider_names::matches_placeholder_syntax;
/// assert!(matches_placeholder_syntax("%p[0]"));
/// assert!(matches_placeholder_syntax("%a[-2..-1]"));
/// assert!(!matches_placeholder_syntax("%p[0] "));
/// assert!(!matches_placeholder_syntax("%x[0]"));
/// ```
#[must_use]
pub fn matches_placeholder_syntax(candidate: &str) -> bool {
    full_match(candidate).is_some()
}

/// Resolve one placeholder against `args` with the default tokens.
///
/// # Errors
/// Returns [`PlaceholderError::UnrecognisedPlaceholder`] when `placeholder`
/// is not an argument placeholder, [`PlaceholderError::MalformedSubscript`]
/// when an index does not fit an `i64` and
/// [`PlaceholderError::IndexOutOfRange`] when the subscript does not fit
/// `args`.
///
/// # Examples
/// ```
/// use dataprovider_names::{Argument, resolve_placeholder};
/// let args = [Argument::from("a"), Argument::from(5_i32), Argument::Null];
/// let text = resolve_placeholder("%p[0..2]", &args).expect("valid placeholder");
/// assert_eq!(text, "a, 5, <null>");
/// ```
pub fn resolve_placeholder(
    placeholder: &str,
    args: &[Argument],
) -> Result<String, PlaceholderError> {
    ArgumentPlaceholder::new().replacement_for(placeholder, args)
}

/// Which spelling introduced a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderAlias {
    /// `%a[..]`
    Argument,
    /// `%p[..]`
    Parameter,
}

impl PlaceholderAlias {
    /// Return the placeholder prefix, including `%`.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Argument => "%a",
            Self::Parameter => "%p",
        }
    }
}

/// A parsed argument placeholder.
///
/// # Examples
/// ```
/// use dataprovider_names::{PlaceholderAlias, PlaceholderRef, Subscript};
/// let parsed: PlaceholderRef = "%a[1..-1]".parse().expect("valid placeholder");
/// assert_eq!(parsed.alias, PlaceholderAlias::Argument);
/// assert_eq!(parsed.subscript, Subscript::Range { first: 1, last: -1 });
/// assert_eq!(parsed.to_string(), "%a[1..-1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderRef {
    /// Spelling of the placeholder.
    pub alias: PlaceholderAlias,
    /// Selected arguments.
    pub subscript: Subscript,
}

impl PlaceholderRef {
    fn from_captures(caps: &Captures<'_>) -> Result<(Self, String), PlaceholderError> {
        let alias = match caps.get(1).map(|m| m.as_str()) {
            Some("a") => PlaceholderAlias::Argument,
            _ => PlaceholderAlias::Parameter,
        };
        let raw = caps.get(2).map_or("", |m| m.as_str()).to_string();
        let subscript = raw.parse()?;
        Ok((Self { alias, subscript }, raw))
    }
}

impl FromStr for PlaceholderRef {
    type Err = PlaceholderError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let caps = full_match(text).ok_or_else(|| unrecognised(text))?;
        Self::from_captures(&caps).map(|(parsed, _)| parsed)
    }
}

impl fmt::Display for PlaceholderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.alias.prefix(), self.subscript)
    }
}

fn unrecognised(text: &str) -> PlaceholderError {
    PlaceholderError::UnrecognisedPlaceholder {
        placeholder: text.to_string(),
    }
}

/// Replaces argument placeholders with formatted test-case arguments.
///
/// # Examples
/// ```
/// use dataprovider_names::{ArgumentPlaceholder, arguments};
/// let placeholder = ArgumentPlaceholder::new();
/// let args = arguments![3_i32, 4_i32, 7_i32];
/// let name = placeholder
///     .process("add(%p[0..1]) == %p[-1]", &args)
///     .expect("placeholders resolve");
/// assert_eq!(name, "add(3, 4) == 7");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentPlaceholder {
    formatter: ArgumentFormatter,
}

impl ArgumentPlaceholder {
    /// Create a placeholder resolver with the default tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a placeholder resolver with custom tokens.
    #[must_use]
    pub const fn with_options(options: FormatOptions) -> Self {
        Self {
            formatter: ArgumentFormatter::with_options(options),
        }
    }

    /// Return the formatter used for replacements.
    #[must_use]
    pub const fn formatter(&self) -> &ArgumentFormatter {
        &self.formatter
    }

    /// Return `true` when `candidate` is exactly one argument placeholder.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        matches_placeholder_syntax(candidate)
    }

    /// Compute the replacement text for a single placeholder.
    ///
    /// # Errors
    /// See [`resolve_placeholder`].
    pub fn replacement_for(
        &self,
        placeholder: &str,
        args: &[Argument],
    ) -> Result<String, PlaceholderError> {
        let caps = full_match(placeholder).ok_or_else(|| unrecognised(placeholder))?;
        self.replace_captures(&caps, args)
    }

    /// Replace every placeholder in `template`, copying the surrounding text
    /// unchanged.
    ///
    /// # Errors
    /// Returns the error of the first placeholder that fails to resolve; no
    /// partially replaced text is returned.
    pub fn process(&self, template: &str, args: &[Argument]) -> Result<String, PlaceholderError> {
        let mut out = String::with_capacity(template.len());
        let mut copied = 0;
        let mut replaced = 0usize;
        for caps in PLACEHOLDER_RE.captures_iter(template) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(template.get(copied..whole.start()).unwrap_or_default());
            out.push_str(&self.replace_captures(&caps, args)?);
            copied = whole.end();
            replaced += 1;
        }
        out.push_str(template.get(copied..).unwrap_or_default());
        log::debug!("replaced {replaced} argument placeholder(s) in {template:?}");
        Ok(out)
    }

    fn replace_captures(
        &self,
        caps: &Captures<'_>,
        args: &[Argument],
    ) -> Result<String, PlaceholderError> {
        let (parsed, raw) = PlaceholderRef::from_captures(caps)?;
        let selected = parsed.subscript.select_labelled(args, &raw)?;
        log::debug!(
            "{parsed} selects {} of {} argument(s)",
            selected.len(),
            args.len()
        );
        Ok(self.formatter.format_all(selected))
    }
}
