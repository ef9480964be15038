use std::thread;

use pretty_assertions::assert_eq;

use super::*;
use crate::{
    alternative, literal, not_parsed, numeric_literal, parsed, separated_list, spaces0, symbol,
    Parsed,
};

fn digit(input: &str) -> ParseResult<&str, u32> {
    match input.chars().next().and_then(|c| c.to_digit(10)) {
        Some(d) => parsed(d, &input[1..]),
        None => not_parsed("expected digit"),
    }
}

#[test]
fn functions_are_parsers() {
    assert_eq!(digit.parse("7a").unwrap(), Parsed::new(7, "a"));
    assert_eq!(digit.parse("a").unwrap_err().message(), "expected digit");
}

#[test]
fn method_map_and_to() {
    assert_eq!(digit.map(|d: u32| d * 2).parse("4").unwrap(), Parsed::new(8, ""));
    assert_eq!(literal("null").to(()).parse("null,").unwrap(), Parsed::new((), ","));
}

#[test]
fn method_sequencing() {
    let field = literal("v").keep_right(spaces0()).keep_right(digit);
    assert_eq!(field.parse("v 3").unwrap(), Parsed::new(3, ""));

    let item = digit.keep_left(symbol(';'));
    assert_eq!(item.parse("3;4").unwrap(), Parsed::new(3, "4"));
}

#[test]
fn method_or_backtracks_to_the_original_view() {
    let either = literal("ab").or(literal("ac"));
    assert_eq!(either.parse("ac").unwrap(), Parsed::new("ac", ""));
    assert_eq!(either.parse("ad").unwrap_err().message(), "tag not found");
}

#[test]
fn method_opt() {
    let sign = symbol('-').opt();
    assert_eq!(sign.parse("5").unwrap(), Parsed::new(None, "5"));
}

#[test]
fn by_ref_reuses_a_parser() {
    let number = numeric_literal::<i32>();
    let pair = alternative((
        number.by_ref().keep_left(symbol('+')).boxed(),
        number.by_ref().boxed(),
    ));
    assert_eq!(pair.parse("1+").unwrap(), Parsed::new(1, ""));
    assert_eq!(number.parse("2").unwrap(), Parsed::new(2, ""));
}

#[test]
fn boxed_parser_clones_share_the_parser() {
    let list = separated_list(numeric_literal::<i32>(), symbol(',')).boxed();
    let copy = list.clone();
    assert_eq!(list.parse("1,2").unwrap(), copy.parse("1,2").unwrap());
    assert_eq!(format!("{list:?}"), "BoxedParser { .. }");
}

#[test]
fn boxed_parser_is_shared_across_threads() {
    let list: BoxedParser<'static, &'static str, Vec<i32>> =
        separated_list(numeric_literal::<i32>(), symbol(',')).boxed();
    let inputs = ["1,2,3", "4", "5,6,"];

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let list = list.clone();
            thread::spawn(move || list.parse(input).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(
        results,
        vec![
            Parsed::new(vec![1, 2, 3], ""),
            Parsed::new(vec![4], ""),
            Parsed::new(vec![5, 6], ","),
        ]
    );
}

#[test]
fn parsing_is_pure() {
    let owned = String::from("1,2");
    let list = separated_list(numeric_literal::<i32>(), symbol(','));
    let first = list.parse("1,2");
    let second = list.parse(owned.as_str());
    assert_eq!(first, second);
}
