//! Exact-match primitives.

use crate::{not_parsed, parsed, Input, ParseResult, Parser};

/// Match `tag` at the start of the view, consuming exactly its length.
///
/// An empty `tag` never matches.
pub fn literal<I: Input>(tag: I) -> impl Parser<I, I> {
    move |input: I| -> ParseResult<I, I> {
        if tag.is_empty_input() {
            return not_parsed("tag can not be empty");
        }
        match input.strip_literal(tag) {
            Some((matched, rest)) => parsed(matched, rest),
            None => not_parsed("tag not found"),
        }
    }
}

/// Match a single symbol equal to `expected`.
pub fn symbol<I: Input>(expected: I::Item) -> impl Parser<I, I::Item> {
    move |input: I| -> ParseResult<I, I::Item> {
        match input.split_first_item() {
            Some((item, rest)) if item == expected => parsed(item, rest),
            Some(_) => not_parsed("can not match symbol"),
            None => not_parsed("can not match symbol in empty input"),
        }
    }
}

/// Match a single symbol that occurs in `set`.
pub fn one_of<I: Input>(set: I) -> impl Parser<I, I::Item> {
    move |input: I| -> ParseResult<I, I::Item> {
        match input.split_first_item() {
            Some((item, rest)) if set.contains_item(item) => parsed(item, rest),
            _ => not_parsed("symbol is not in the set"),
        }
    }
}
