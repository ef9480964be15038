//! Parse outcomes.
//!
//! Every parser in the crate communicates through one type:
//!
//! | Outcome | Carries |
//! |---------|---------|
//! | `Ok(Parsed)` | the produced value and the unconsumed remainder |
//! | `Err(ParseError)` | an opaque, human-readable message |
//!
//! The generic algebra (`map`, `and_then`, `map_err`, `map_or_else`,
//! `unwrap_or_else`) is the one `Result` and `Option` already provide. The
//! type system rejects ill-typed chains: `and_then` keeps the error type
//! fixed, and mapping with an outcome-returning function nests rather than
//! flattens. [`ParseResultExt`] adds the parse-specific steps on top.
//!
//! Failures carry no position and no error code. When an ordered choice
//! fails, only the last branch's message survives.

use std::borrow::Cow;

use crate::Input;

/// A successful parse: the value produced and the input left over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parsed<I, V> {
    /// The produced value.
    pub value: V,
    /// The unconsumed suffix of the view the parser was given.
    pub rest: I,
}

impl<I, V> Parsed<I, V> {
    #[inline]
    pub fn new(value: V, rest: I) -> Self {
        Parsed { value, rest }
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn rest(&self) -> &I {
        &self.rest
    }

    #[inline]
    pub fn into_parts(self) -> (V, I) {
        (self.value, self.rest)
    }

    /// Transform the value, keeping the remainder.
    #[inline]
    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> Parsed<I, U> {
        Parsed {
            value: f(self.value),
            rest: self.rest,
        }
    }
}

/// An opaque parse failure.
///
/// Holds only a message. Messages produced by this crate are lower-case,
/// stable strings (`"tag not found"`, `"failed to apply many combinator"`, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: Cow<'static, str>,
}

impl ParseError {
    #[cold]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The outcome of running a parser.
pub type ParseResult<I, V> = Result<Parsed<I, V>, ParseError>;

/// Build a successful outcome.
#[inline]
pub fn parsed<I, V>(value: V, rest: I) -> ParseResult<I, V> {
    Ok(Parsed::new(value, rest))
}

/// Build a failed outcome.
#[cold]
pub fn not_parsed<I, V>(message: impl Into<Cow<'static, str>>) -> ParseResult<I, V> {
    Err(ParseError::new(message))
}

/// Parse-specific steps over [`ParseResult`].
pub trait ParseResultExt<I, V>: Sized {
    /// Transform the value of a success; failures pass through.
    fn map_value<U, F>(self, f: F) -> ParseResult<I, U>
    where
        F: FnOnce(V) -> U;

    /// Chain a dependent parse on the remainder, combining both values.
    ///
    /// Short-circuits on the first failure.
    fn and_then_rest<U, W, F, G>(self, next: F, combine: G) -> ParseResult<I, W>
    where
        F: FnOnce(I) -> ParseResult<I, U>,
        G: FnOnce(V, U) -> W;

    /// Turn a success whose value fails `pred` into a failure.
    fn verify<P>(self, pred: P, message: &'static str) -> ParseResult<I, V>
    where
        P: FnOnce(&V) -> bool;

    /// Drop the remainder.
    fn into_value(self) -> Result<V, ParseError>;

    /// The remainder of a success, or `original` on failure.
    fn rest_or(self, original: I) -> I;
}

impl<I: Input, V> ParseResultExt<I, V> for ParseResult<I, V> {
    #[inline]
    fn map_value<U, F>(self, f: F) -> ParseResult<I, U>
    where
        F: FnOnce(V) -> U,
    {
        self.map(|done| done.map(f))
    }

    fn and_then_rest<U, W, F, G>(self, next: F, combine: G) -> ParseResult<I, W>
    where
        F: FnOnce(I) -> ParseResult<I, U>,
        G: FnOnce(V, U) -> W,
    {
        let (first, rest) = self?.into_parts();
        next(rest).map_value(|second| combine(first, second))
    }

    fn verify<P>(self, pred: P, message: &'static str) -> ParseResult<I, V>
    where
        P: FnOnce(&V) -> bool,
    {
        self.and_then(|done| {
            if pred(&done.value) {
                Ok(done)
            } else {
                not_parsed(message)
            }
        })
    }

    #[inline]
    fn into_value(self) -> Result<V, ParseError> {
        self.map(|done| done.value)
    }

    #[inline]
    fn rest_or(self, original: I) -> I {
        self.map_or(original, |done| done.rest)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
