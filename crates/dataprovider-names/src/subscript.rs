//! Index and range subscripts with negative-index wraparound.
//!
//! A subscript selects arguments by position. `3` selects the fourth argument,
//! `-1` the last one and `1..-1` everything but the first. Both ends of a range
//! are inclusive; resolution turns them into an exclusive [`Range`].

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::errors::{PlaceholderError, malformed_subscript, out_of_range};

/// A parsed subscript expression.
///
/// # Examples
/// ```
/// use dataprovider_names::Subscript;
/// let subscript: Subscript = "0..-1".parse().expect("valid range");
/// assert_eq!(subscript.resolve(3).expect("in range"), 0..3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscript {
    /// A single argument, `[i]`.
    Index(i64),
    /// An inclusive run of arguments, `[first..last]`.
    Range {
        /// First selected index.
        first: i64,
        /// Last selected index.
        last: i64,
    },
}

impl Subscript {
    /// Return the inclusive `(first, last)` indices before normalisation.
    #[must_use]
    pub const fn bounds(&self) -> (i64, i64) {
        match *self {
            Self::Index(index) => (index, index),
            Self::Range { first, last } => (first, last),
        }
    }

    /// Resolve the subscript against a list of `len` arguments.
    ///
    /// Negative indices count from the end of the list. The result is never
    /// clamped: bounds outside `0..=len`, or a start past the end, are errors.
    ///
    /// # Errors
    /// Returns [`PlaceholderError::IndexOutOfRange`] when the normalised
    /// bounds do not describe a slice of the list.
    pub fn resolve(&self, len: usize) -> Result<Range<usize>, PlaceholderError> {
        self.resolve_labelled(len, &self.to_string())
    }

    /// Borrow the arguments selected by this subscript.
    ///
    /// # Errors
    /// Returns [`PlaceholderError::IndexOutOfRange`] under the same conditions
    /// as [`Subscript::resolve`].
    ///
    /// # Examples
    /// ```
    /// use dataprovider_names::Subscript;
    /// let values = ["a", "b", "c"];
    /// let picked = Subscript::Index(-1).select(&values).expect("in range");
    /// assert_eq!(picked, ["c"]);
    /// ```
    pub fn select<'a, T>(&self, args: &'a [T]) -> Result<&'a [T], PlaceholderError> {
        self.select_labelled(args, &self.to_string())
    }

    pub(crate) fn select_labelled<'a, T>(
        &self,
        args: &'a [T],
        label: &str,
    ) -> Result<&'a [T], PlaceholderError> {
        let range = self.resolve_labelled(args.len(), label)?;
        args.get(range.clone())
            .ok_or_else(|| out_of_range(label, wide(range.start), wide(range.end), args.len()))
    }

    pub(crate) fn resolve_labelled(
        &self,
        len: usize,
        label: &str,
    ) -> Result<Range<usize>, PlaceholderError> {
        let (first, last) = self.bounds();
        let size = wide(len);
        let from = if first >= 0 {
            i128::from(first)
        } else {
            size + i128::from(first)
        };
        let to = if last >= 0 {
            i128::from(last) + 1
        } else {
            size + i128::from(last) + 1
        };

        if from < 0 || from > to || to > size {
            return Err(out_of_range(label, from, to, len));
        }
        match (usize::try_from(from), usize::try_from(to)) {
            (Ok(start), Ok(end)) => Ok(start..end),
            _ => Err(out_of_range(label, from, to, len)),
        }
    }
}

fn wide(value: usize) -> i128 {
    i128::try_from(value).unwrap_or(i128::MAX)
}

/// Parse `-?[0-9]+` into an index. Signs other than a leading `-` and
/// surrounding whitespace are rejected.
fn parse_index(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

impl FromStr for Subscript {
    type Err = PlaceholderError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parsed = match text.split_once("..") {
            Some((first, last)) => parse_index(first)
                .zip(parse_index(last))
                .map(|(first, last)| Self::Range { first, last }),
            None => parse_index(text).map(Self::Index),
        };
        parsed.ok_or_else(|| malformed_subscript(text))
    }
}

impl fmt::Display for Subscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Range { first, last } => write!(f, "{first}..{last}"),
        }
    }
}

/// Parse `text` as a subscript and resolve it against `args`.
///
/// Errors name the subscript exactly as written.
///
/// # Errors
/// Returns [`PlaceholderError::MalformedSubscript`] when `text` is not a
/// subscript and [`PlaceholderError::IndexOutOfRange`] when it does not fit
/// `args`.
///
/// # Examples
/// ```
/// use dataprovider_names::resolve_subscript;
/// assert_eq!(resolve_subscript("-2..-1", &[1, 2, 3]).expect("in range"), 1..3);
/// assert!(resolve_subscript("0", &[] as &[u8]).is_err());
/// ```
pub fn resolve_subscript<T>(text: &str, args: &[T]) -> Result<Range<usize>, PlaceholderError> {
    text.parse::<Subscript>()?.resolve_labelled(args.len(), text)
}
