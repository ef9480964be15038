//! Optionality.

use crate::{parsed, Input, ParseResult, Parser};

/// Run `parser`; on success wrap its value in `Some`, on failure succeed with
/// `None` and the original, unadvanced view. Never fails.
pub fn optional<I, O, P>(parser: P) -> impl Parser<I, Option<O>>
where
    I: Input,
    P: Parser<I, O>,
{
    move |input: I| -> ParseResult<I, Option<O>> {
        match parser.parse(input) {
            Ok(done) => Ok(done.map(Some)),
            Err(_) => parsed(None, input),
        }
    }
}
