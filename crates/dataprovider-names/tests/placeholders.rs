//! Integration tests for argument placeholder resolution and formatting.

#![expect(clippy::expect_used, reason = "tests assert successful resolution")]

use dataprovider_names::{
    Argument, ArgumentPlaceholder, FormatOptions, PlaceholderError, arguments,
    matches_placeholder_syntax, resolve_placeholder, sanitize,
};

#[test]
fn formats_a_range_of_mixed_arguments() {
    let args = arguments!["a", 5_i32, Argument::Null];
    let text = resolve_placeholder("%p[0..2]", &args).expect("range should resolve");
    assert_eq!(text, "a, 5, <null>");
}

#[test]
fn single_index_on_empty_arguments_is_out_of_range() {
    let err = resolve_placeholder("%p[0]", &[]).expect_err("no argument to select");
    assert!(matches!(err, PlaceholderError::IndexOutOfRange(_)));
}

#[test]
fn formats_primitive_array_argument() {
    let args = arguments![[1_i32, 2, 3]];
    let text = resolve_placeholder("%p[0]", &args).expect("index should resolve");
    assert_eq!(text, "[1, 2, 3]");
}

#[test]
fn escapes_line_feed_in_text() {
    let args = arguments!["line1\nline2"];
    let text = resolve_placeholder("%p[0]", &args).expect("index should resolve");
    assert_eq!(text, "line1\\nline2");
}

#[test]
fn negative_index_selects_empty_string() {
    let args = arguments![""];
    let text = resolve_placeholder("%p[-1]", &args).expect("index should resolve");
    assert_eq!(text, "<empty string>");
}

#[test]
fn whole_range_on_empty_arguments_is_empty() {
    let text = resolve_placeholder("%a[0..-1]", &[]).expect("empty range should resolve");
    assert_eq!(text, "");
}

#[test]
fn builds_display_name_from_template() {
    let placeholder = ArgumentPlaceholder::new();
    let args = arguments![
        "user\u{0}name",
        Argument::array([Some("x"), None]),
        vec![0.5_f64, 2.0],
        Argument::object(std::net::Ipv4Addr::new(10, 0, 0, 1)),
    ];
    let name = placeholder
        .process("login(%p[0]) with %a[1..2] from %p[-1]", &args)
        .expect("template should resolve");
    assert_eq!(
        name,
        "login(user\\0name) with [x, <null>], [0.5, 2.0] from 10.0.0.1"
    );
}

#[test]
fn configured_tokens_apply_to_templates() {
    let options = FormatOptions::from_lookup(|variable| match variable {
        "DATAPROVIDER_NAMES_EMPTY_TOKEN" => Some("''".to_string()),
        "DATAPROVIDER_NAMES_SEPARATOR" => Some(" | ".to_string()),
        _ => None,
    })
    .expect("printable tokens");
    let placeholder = ArgumentPlaceholder::with_options(options);
    let args = arguments!["", "b\u{200B}"];
    let name = placeholder
        .process("case %p[0..1]", &args)
        .expect("template should resolve");
    assert_eq!(name, "case '' | b<np>");
}

#[test]
fn syntax_check_matches_resolution() {
    let args = arguments![1_u8, 2_u8];
    for candidate in ["%p[0]", "%a[-1]", "%p[0..1]", "%p[x]", "%q[0]", "%p[0"] {
        let resolved = resolve_placeholder(candidate, &args);
        assert_eq!(
            matches_placeholder_syntax(candidate),
            !matches!(resolved, Err(PlaceholderError::UnrecognisedPlaceholder { .. })),
            "candidate {candidate}"
        );
    }
}

#[test]
fn sanitized_output_is_stable() {
    let raw = "tab\there\r\n\u{FEFF}";
    let once = sanitize(raw);
    assert_eq!(once, "tab<np>here\\r\\n<np>");
    assert_eq!(sanitize(&once), once);
}
