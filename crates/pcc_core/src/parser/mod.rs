//! The parser contract.
//!
//! A parser is anything that turns an input view into a [`ParseResult`].
//! Plain closures and functions qualify through a blanket impl, so every
//! primitive and combinator in this crate is just a closure returned as
//! `impl Parser<I, O>`.
//!
//! Parsers are stateless: the same parser on content-equal views yields the
//! same outcome, and a failed branch has consumed nothing, so backtracking is
//! simply calling the next parser with the original view.
//!
//! [`BoxedParser`] erases the concrete type. It is what recursive rules and
//! the method-style combinators produce, and it is `Send + Sync`, so a grammar
//! built once can serve many threads.

use std::fmt;
use std::sync::Arc;

use crate::combinators::{constant, keep_left, keep_right, map, optional};
use crate::{Input, ParseResult};

/// A function from an input view to a parse outcome.
pub trait Parser<I, O> {
    fn parse(&self, input: I) -> ParseResult<I, O>;

    /// Borrow this parser as a parser, so it can be reused in several
    /// compositions without being moved.
    fn by_ref(&self) -> ByRef<'_, Self>
    where
        Self: Sized,
    {
        ByRef { parser: self }
    }

    /// Erase the concrete parser type.
    fn boxed<'a>(self) -> BoxedParser<'a, I, O>
    where
        Self: Sized + Send + Sync + 'a,
    {
        BoxedParser::new(self)
    }

    /// Transform the produced value.
    fn map<'a, U, F>(self, f: F) -> BoxedParser<'a, I, U>
    where
        Self: Sized + Send + Sync + 'a,
        F: Fn(O) -> U + Send + Sync + 'a,
        I: Input + 'a,
        O: 'a,
        U: 'a,
    {
        BoxedParser::new(map(self, f))
    }

    /// Replace the produced value with a constant.
    fn to<'a, U>(self, value: U) -> BoxedParser<'a, I, U>
    where
        Self: Sized + Send + Sync + 'a,
        U: Clone + Send + Sync + 'a,
        I: Input + 'a,
        O: 'a,
    {
        BoxedParser::new(constant(value, self))
    }

    /// Run `next` after this parser, keeping this parser's value.
    fn keep_left<'a, U, P>(self, next: P) -> BoxedParser<'a, I, O>
    where
        Self: Sized + Send + Sync + 'a,
        P: Parser<I, U> + Send + Sync + 'a,
        I: Input + 'a,
        O: 'a,
        U: 'a,
    {
        BoxedParser::new(keep_left(self, next))
    }

    /// Run `next` after this parser, keeping `next`'s value.
    fn keep_right<'a, U, P>(self, next: P) -> BoxedParser<'a, I, U>
    where
        Self: Sized + Send + Sync + 'a,
        P: Parser<I, U> + Send + Sync + 'a,
        I: Input + 'a,
        O: 'a,
        U: 'a,
    {
        BoxedParser::new(keep_right(self, next))
    }

    /// Try this parser, then `other` on the same view.
    fn or<'a, P>(self, other: P) -> BoxedParser<'a, I, O>
    where
        Self: Sized + Send + Sync + 'a,
        P: Parser<I, O> + Send + Sync + 'a,
        I: Input + 'a,
        O: 'a,
    {
        BoxedParser::new(move |input: I| -> ParseResult<I, O> {
            match self.parse(input) {
                Ok(done) => Ok(done),
                Err(_) => other.parse(input),
            }
        })
    }

    /// Make this parser optional.
    fn opt<'a>(self) -> BoxedParser<'a, I, Option<O>>
    where
        Self: Sized + Send + Sync + 'a,
        I: Input + 'a,
        O: 'a,
    {
        BoxedParser::new(optional(self))
    }
}

impl<I, O, F> Parser<I, O> for F
where
    F: Fn(I) -> ParseResult<I, O>,
{
    #[inline]
    fn parse(&self, input: I) -> ParseResult<I, O> {
        self(input)
    }
}

/// A borrowed parser, produced by [`Parser::by_ref`].
#[derive(Debug)]
pub struct ByRef<'p, P> {
    parser: &'p P,
}

impl<P> Clone for ByRef<'_, P> {
    fn clone(&self) -> Self {
        ByRef {
            parser: self.parser,
        }
    }
}

impl<I, O, P: Parser<I, O>> Parser<I, O> for ByRef<'_, P> {
    #[inline]
    fn parse(&self, input: I) -> ParseResult<I, O> {
        self.parser.parse(input)
    }
}

/// A type-erased, shareable parser.
pub struct BoxedParser<'a, I, O> {
    inner: Arc<dyn Parser<I, O> + Send + Sync + 'a>,
}

impl<'a, I, O> BoxedParser<'a, I, O> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<I, O> + Send + Sync + 'a,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<I, O> Clone for BoxedParser<'_, I, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, O> fmt::Debug for BoxedParser<'_, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

impl<I, O> Parser<I, O> for BoxedParser<'_, I, O> {
    #[inline]
    fn parse(&self, input: I) -> ParseResult<I, O> {
        self.inner.parse(input)
    }

    fn boxed<'b>(self) -> BoxedParser<'b, I, O>
    where
        Self: Sized + Send + Sync + 'b,
    {
        self
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
