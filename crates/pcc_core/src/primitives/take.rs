//! Run and count primitives.

use crate::{not_parsed, parsed, Input, ParseResult, ParseResultExt, Parser};

/// Consume the longest prefix whose symbols satisfy `pred`.
///
/// The prefix may be empty; the parser only fails on an empty view.
pub fn take_while<I, P>(pred: P) -> impl Parser<I, I>
where
    I: Input,
    P: Fn(I::Item) -> bool,
{
    move |input: I| -> ParseResult<I, I> {
        if input.is_empty_input() {
            return not_parsed("can not take from empty input");
        }
        let (taken, rest) = input.split_while(&pred);
        parsed(taken, rest)
    }
}

/// Like [`take_while`], but the run must hold at least `min` symbols.
///
/// The greedy run is measured afterwards; there is no symbol-by-symbol
/// backtracking.
pub fn take_while_min<I, P>(min: usize, pred: P) -> impl Parser<I, I>
where
    I: Input,
    P: Fn(I::Item) -> bool,
{
    let run = take_while(pred);
    move |input: I| -> ParseResult<I, I> {
        run.parse(input)
            .verify(|taken| taken.split_count(min).is_some(), "not enough symbols")
    }
}

/// Consume exactly `count` symbols.
pub fn exact_take<I: Input>(count: usize) -> impl Parser<I, I> {
    move |input: I| -> ParseResult<I, I> {
        if count > 0 && input.is_empty_input() {
            return not_parsed("can not take from empty input");
        }
        match input.split_count(count) {
            Some((taken, rest)) => parsed(taken, rest),
            None => not_parsed("can not take more symbols than available"),
        }
    }
}

/// Zero or more whitespace characters.
pub fn spaces0<'a>() -> impl Parser<&'a str, &'a str> {
    take_while(char::is_whitespace)
}

/// One or more whitespace characters.
pub fn spaces1<'a>() -> impl Parser<&'a str, &'a str> {
    take_while_min(1, char::is_whitespace)
}

/// Zero or more ASCII letters and digits.
pub fn alphanumeric0<'a>() -> impl Parser<&'a str, &'a str> {
    take_while(|c: char| c.is_ascii_alphanumeric())
}

/// One or more ASCII letters and digits.
pub fn alphanumeric1<'a>() -> impl Parser<&'a str, &'a str> {
    take_while_min(1, |c: char| c.is_ascii_alphanumeric())
}

/// Zero or more non-whitespace characters.
pub fn non_space0<'a>() -> impl Parser<&'a str, &'a str> {
    take_while(|c: char| !c.is_whitespace())
}
