//! Argument placeholders for data-driven test names.
//!
//! A name template such as `"add(%p[0..1]) == %p[-1]"` refers to the
//! arguments of one test case by index or inclusive range. Negative indices
//! count from the end. The selected arguments are rendered into a
//! deterministic, printable string: absent values and empty text get sentinel
//! tokens, arrays are rendered recursively and non-printable code points are
//! replaced.

mod errors;
mod format;
mod macros;
mod options;
mod placeholder;
mod sanitize;
mod subscript;
mod value;

pub use errors::{ConfigError, PlaceholderError, RangeErrorInfo};
pub use format::{ArgumentFormatter, format_argument, format_arguments};
pub use options::{EMPTY_TOKEN, FormatOptions, NULL_TOKEN, SEPARATOR};
pub use placeholder::{
    ArgumentPlaceholder, PlaceholderAlias, PlaceholderRef, matches_placeholder_syntax,
    resolve_placeholder,
};
pub use sanitize::{NON_PRINTABLE_TOKEN, is_printable, sanitize, sanitize_with};
pub use subscript::{Subscript, resolve_subscript};
pub use value::{Argument, Primitive, PrimitiveArray, PrimitiveKind, Shape};
