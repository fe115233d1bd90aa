//! Escaping and non-printable scrubbing for rendered values.
//!
//! Line breaks and NUL become visible backslash escapes; every other code
//! point in the control, format, private-use, surrogate or unassigned general
//! categories is replaced by a token so names stay safe in reports and paths.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Token substituted for a non-printable code point.
pub const NON_PRINTABLE_TOKEN: &str = "<np>";

/// Return `true` when `c` may appear verbatim in a sanitised name.
///
/// # Examples
/// ```
/// use dataprovider_names::is_printable;
/// assert!(is_printable('a'));
/// assert!(is_printable('\u{1F600}'));
/// assert!(!is_printable('\u{200B}'));
/// assert!(!is_printable('\u{E000}'));
/// ```
#[must_use]
pub fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

fn escape(c: char) -> Option<&'static str> {
    match c {
        '\0' => Some("\\0"),
        '\r' => Some("\\r"),
        '\n' => Some("\\n"),
        _ => None,
    }
}

/// Sanitise `text` using the default [`NON_PRINTABLE_TOKEN`].
///
/// # Examples
/// ```
/// use dataprovider_names::sanitize;
/// assert_eq!(sanitize("a\r\nb"), r"a\r\nb");
/// assert_eq!(sanitize("tab\there"), "tab<np>here");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> String {
    sanitize_with(text, NON_PRINTABLE_TOKEN)
}

/// Sanitise `text`, replacing non-printable code points with `token`.
///
/// NUL, CR and LF are written as `\0`, `\r` and `\n`. The remaining
/// non-printable code points each become one `token`. Everything else is
/// copied in order.
#[must_use]
pub fn sanitize_with(text: &str, token: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match escape(c) {
            Some(escaped) => out.push_str(escaped),
            None if is_printable(c) => out.push(c),
            None => out.push_str(token),
        }
    }
    out
}
