//! Two-parser sequencing.

use crate::{Input, Parsed, ParseResult, Parser};

/// Run `left`, then `right` on its remainder; keep `right`'s value.
///
/// The first failure wins.
pub fn keep_right<I, L, R, PL, PR>(left: PL, right: PR) -> impl Parser<I, R>
where
    I: Input,
    PL: Parser<I, L>,
    PR: Parser<I, R>,
{
    move |input: I| -> ParseResult<I, R> {
        let Parsed { rest, .. } = left.parse(input)?;
        right.parse(rest)
    }
}

/// Run `left`, then `right` on its remainder; keep `left`'s value with
/// `right`'s remainder.
pub fn keep_left<I, L, R, PL, PR>(left: PL, right: PR) -> impl Parser<I, L>
where
    I: Input,
    PL: Parser<I, L>,
    PR: Parser<I, R>,
{
    move |input: I| -> ParseResult<I, L> {
        let Parsed { value, rest } = left.parse(input)?;
        let Parsed { rest, .. } = right.parse(rest)?;
        Ok(Parsed::new(value, rest))
    }
}
