//! Repetition.
//!
//! Both combinators are greedy and stop at the first failed attempt; the
//! failed attempt consumed nothing, so the remainder is the one after the last
//! success. An attempt that succeeds without consuming input also ends the
//! loop. `many` keeps that last value, `separated_list` does not.

use tracing::trace;

use crate::{not_parsed, parsed, Input, Parsed, ParseResult, Parser};

/// Collect successes of `parser` from `input` until it fails or stops
/// making progress. Never fails.
fn collect<I, O, P>(parser: &P, input: I, values: &mut Vec<O>) -> I
where
    I: Input,
    P: Parser<I, O>,
{
    let mut rest = input;
    loop {
        match parser.parse(rest) {
            Ok(Parsed { value, rest: next }) => {
                values.push(value);
                if next.input_len() == rest.input_len() {
                    trace!(count = values.len(), "repetition made no progress");
                    return next;
                }
                rest = next;
            }
            Err(err) => {
                trace!(count = values.len(), %err, "repetition stopped");
                return rest;
            }
        }
    }
}

/// Apply `parser` as many times as it succeeds and fail unless it succeeded
/// at least `min` times.
///
/// Partial progress below `min` is discarded: the whole combinator fails.
/// A success that consumes nothing counts once and ends the loop.
///
/// ```text
/// many(3, literal("a"))            on "aa"   =>  failure
/// many(3, literal("a"))            on "aaa"  =>  (["a", "a", "a"], "")
/// many(1, optional(literal("a")))  on "b"    =>  ([None], "b")
/// ```
pub fn many<I, O, P>(min: usize, parser: P) -> impl Parser<I, Vec<O>>
where
    I: Input,
    P: Parser<I, O>,
{
    move |input: I| -> ParseResult<I, Vec<O>> {
        let mut values = Vec::new();
        let rest = collect(&parser, input, &mut values);
        if values.len() < min {
            return not_parsed("failed to apply many combinator");
        }
        parsed(values, rest)
    }
}

/// Zero or more repetitions. Never fails.
pub fn many0<I, O, P>(parser: P) -> impl Parser<I, Vec<O>>
where
    I: Input,
    P: Parser<I, O>,
{
    many(0, parser)
}

/// One or more repetitions.
pub fn many1<I, O, P>(parser: P) -> impl Parser<I, Vec<O>>
where
    I: Input,
    P: Parser<I, O>,
{
    many(1, parser)
}

/// One or more `element`s separated by `separator`.
///
/// The first element is required and its failure is returned as is. After
/// that, each `separator` must be followed by an element; a separator with
/// no element after it is left unconsumed, so a trailing delimiter stays in
/// the remainder for the enclosing grammar.
///
/// ```text
/// separated_list(int, literal(","))  on "1,2,3"  =>  ([1, 2, 3], "")
/// separated_list(int, literal(","))  on "1,2,"   =>  ([1, 2], ",")
/// ```
pub fn separated_list<I, O, S, P, Q>(element: P, separator: Q) -> impl Parser<I, Vec<O>>
where
    I: Input,
    P: Parser<I, O>,
    Q: Parser<I, S>,
{
    move |input: I| -> ParseResult<I, Vec<O>> {
        let Parsed { value, mut rest } = element.parse(input)?;
        let mut values = vec![value];
        loop {
            let Ok(Parsed { rest: after_sep, .. }) = separator.parse(rest) else {
                break;
            };
            match element.parse(after_sep) {
                Ok(Parsed { value, rest: next }) => {
                    if next.input_len() == rest.input_len() {
                        trace!(count = values.len(), "separated list made no progress");
                        break;
                    }
                    values.push(value);
                    rest = next;
                }
                Err(err) => {
                    trace!(count = values.len(), %err, "dangling separator left unconsumed");
                    break;
                }
            }
        }
        parsed(values, rest)
    }
}
