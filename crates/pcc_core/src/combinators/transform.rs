//! Value transformers.

use crate::{Input, ParseResult, ParseResultExt, Parser};

/// Apply `f` to the value of a successful parse.
pub fn map<I, O, U, P, F>(parser: P, f: F) -> impl Parser<I, U>
where
    I: Input,
    P: Parser<I, O>,
    F: Fn(O) -> U,
{
    move |input: I| -> ParseResult<I, U> { parser.parse(input).map_value(&f) }
}

/// Replace the value of a successful parse with a clone of `value`.
///
/// ```text
/// constant(true, literal("true"))
/// ```
pub fn constant<I, O, U, P>(value: U, parser: P) -> impl Parser<I, U>
where
    I: Input,
    P: Parser<I, O>,
    U: Clone,
{
    move |input: I| -> ParseResult<I, U> { parser.parse(input).map_value(|_| value.clone()) }
}
