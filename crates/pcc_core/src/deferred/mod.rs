//! Recursive-grammar deferral.
//!
//! A rule that refers to itself (a JSON array holds values, a value may be an
//! array) cannot be built eagerly: constructing it would construct itself
//! forever. [`defer`] breaks the cycle by holding a factory and only building
//! the real parser when input arrives.

use pcc_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{BoxedParser, Input, ParseResult, Parser};

/// Build the parser from `factory` on every invocation and run it.
///
/// Nothing is cached between invocations. Each call runs inside
/// [`ensure_sufficient_stack`], so deeply nested input grows the stack rather
/// than overflowing it.
///
/// The result is boxed: a recursive rule returning `impl Parser` would need
/// its own type in its definition.
///
/// ```text
/// fn value<'a>() -> BoxedParser<'a, &'a str, Json> {
///     alternative((null(), defer(array))).boxed()
/// }
/// ```
pub fn defer<'a, I, O, F, P>(factory: F) -> BoxedParser<'a, I, O>
where
    I: Input + 'a,
    O: 'a,
    F: Fn() -> P + Send + Sync + 'a,
    P: Parser<I, O>,
{
    BoxedParser::new(move |input: I| -> ParseResult<I, O> {
        ensure_sufficient_stack(|| {
            trace!(remaining = input.input_len(), "entering deferred rule");
            factory().parse(input)
        })
    })
}
