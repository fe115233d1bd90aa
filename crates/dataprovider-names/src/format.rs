//! Rendering of argument lists into display-name fragments.

use std::sync::LazyLock;

use crate::options::FormatOptions;
use crate::sanitize::sanitize_with;
use crate::value::{Argument, Shape};

static DEFAULT_FORMATTER: LazyLock<ArgumentFormatter> = LazyLock::new(ArgumentFormatter::new);

/// Formats arguments into deterministic, printable text.
///
/// - absent values become the null token (`<null>`)
/// - primitive arrays use their bracketed literal form, e.g. `[1, 2, 3]`
/// - argument arrays are formatted element by element inside `[` `]`
/// - empty text becomes the empty token (`<empty string>`)
/// - anything else is rendered through its natural text and sanitised
///
/// # Examples
/// ```
/// use dataprovider_names::{Argument, ArgumentFormatter};
/// let formatter = ArgumentFormatter::new();
/// let args = [Argument::from("a"), Argument::from(5_i32), Argument::Null];
/// assert_eq!(formatter.format_all(&args), "a, 5, <null>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentFormatter {
    options: FormatOptions,
}

impl ArgumentFormatter {
    /// Create a formatter with the default tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom tokens.
    #[must_use]
    pub const fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Return the options in use.
    #[must_use]
    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a single argument.
    #[must_use]
    pub fn format(&self, arg: &Argument) -> String {
        let mut out = String::new();
        self.write_argument(&mut out, arg);
        out
    }

    /// Format `args` in order, joined by the configured separator.
    #[must_use]
    pub fn format_all(&self, args: &[Argument]) -> String {
        let mut out = String::new();
        self.write_all(&mut out, args);
        out
    }

    fn write_all(&self, out: &mut String, args: &[Argument]) {
        for (position, arg) in args.iter().enumerate() {
            if position > 0 {
                out.push_str(&self.options.separator);
            }
            self.write_argument(out, arg);
        }
    }

    fn write_argument(&self, out: &mut String, arg: &Argument) {
        match arg.shape() {
            Shape::Null => out.push_str(&self.options.null_token),
            Shape::PrimitiveArray(values) => out.push_str(&values.to_string()),
            Shape::ObjectArray(values) => {
                out.push('[');
                self.write_all(out, values);
                out.push(']');
            }
            Shape::EmptyText => out.push_str(&self.options.empty_token),
            Shape::Scalar(Some(text)) => {
                out.push_str(&sanitize_with(&text, &self.options.non_printable_token));
            }
            Shape::Scalar(None) => {
                log::warn!(
                    "argument has no textual description, substituting {:?}",
                    self.options.null_token
                );
                out.push_str(&self.options.null_token);
            }
        }
    }
}

/// Format a single argument with the default tokens.
///
/// # Examples
/// ```
/// use dataprovider_names::{Argument, format_argument};
/// assert_eq!(format_argument(&Argument::Null), "<null>");
/// assert_eq!(format_argument(&Argument::from("")), "<empty string>");
/// assert_eq!(format_argument(&Argument::from(vec![1_i32, 2, 3])), "[1, 2, 3]");
/// ```
#[must_use]
pub fn format_argument(arg: &Argument) -> String {
    DEFAULT_FORMATTER.format(arg)
}

/// Format `args` with the default tokens, joined by `", "`.
#[must_use]
pub fn format_arguments(args: &[Argument]) -> String {
    DEFAULT_FORMATTER.format_all(args)
}
