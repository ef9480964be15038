use super::*;
use pretty_assertions::assert_eq;

fn number(input: &str) -> ParseResult<&str, u32> {
    let (digits, rest) = input.split_while(|c| c.is_ascii_digit());
    match digits.parse() {
        Ok(n) => parsed(n, rest),
        Err(_) => not_parsed("expected digits"),
    }
}

#[test]
fn parsed_accessors() {
    let done = Parsed::new(7, "rest");
    assert_eq!(*done.value(), 7);
    assert_eq!(*done.rest(), "rest");
    assert_eq!(done.into_parts(), (7, "rest"));
}

#[test]
fn parsed_map_keeps_remainder() {
    let done = Parsed::new(21, "tail").map(|n| n * 2);
    assert_eq!(done, Parsed::new(42, "tail"));
}

#[test]
fn error_displays_its_message() {
    let err = ParseError::new("tag not found");
    assert_eq!(err.message(), "tag not found");
    assert_eq!(err.to_string(), "tag not found");
}

#[test]
fn error_accepts_owned_messages() {
    let err = ParseError::new(format!("expected {}", "digit"));
    assert_eq!(err.message(), "expected digit");
}

#[test]
fn map_value_transforms_success() {
    let outcome = number("12;").map_value(|n| n + 1);
    assert_eq!(outcome, parsed(13, ";"));
}

#[test]
fn map_value_passes_failure_through() {
    let outcome = number("x").map_value(|n| n + 1);
    assert_eq!(outcome.unwrap_err().message(), "expected digits");
}

#[test]
fn and_then_rest_chains_on_remainder() {
    let outcome = number("12,34").and_then_rest(
        |rest| rest.strip_literal(",").map_or_else(|| not_parsed("comma"), |(_, r)| number(r)),
        |a, b| a + b,
    );
    assert_eq!(outcome, parsed(46, ""));
}

#[test]
fn and_then_rest_short_circuits_first_failure() {
    let mut called = false;
    let outcome = number("x").and_then_rest(
        |rest| {
            called = true;
            number(rest)
        },
        |a, b| a + b,
    );
    assert!(outcome.is_err());
    assert!(!called);
}

#[test]
fn and_then_rest_propagates_second_failure() {
    let outcome = number("12").and_then_rest(number, |a, b| a + b);
    assert_eq!(outcome.unwrap_err().message(), "expected digits");
}

#[test]
fn verify_rejects_failing_predicate() {
    assert_eq!(
        number("5").verify(|n| *n > 3, "too small"),
        parsed(5, "")
    );
    assert_eq!(
        number("2").verify(|n| *n > 3, "too small").unwrap_err().message(),
        "too small"
    );
}

#[test]
fn into_value_and_rest_or() {
    assert_eq!(number("8!").into_value().unwrap(), 8);
    assert_eq!(number("8!").rest_or("orig"), "!");
    assert_eq!(number("?").rest_or("orig"), "orig");
}

#[test]
fn std_algebra_composes_with_parse_results() {
    // map_or_else collapses both arms.
    let shown = number("3").map_or_else(|e| e.to_string(), |done| done.value.to_string());
    assert_eq!(shown, "3");

    // map_err touches only the failure payload.
    let renamed = number("q").map_err(|_| ParseError::new("renamed"));
    assert_eq!(renamed.unwrap_err().message(), "renamed");

    // Options substitute defaults lazily.
    let mut evaluated = false;
    let present = Some(1.5).unwrap_or_else(|| {
        evaluated = true;
        1.0
    });
    assert_eq!(present, 1.5);
    assert!(!evaluated);
}
