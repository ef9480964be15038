//! Ordered choice.

use tracing::trace;

use crate::{Input, ParseResult, Parser};

/// A tuple of parsers sharing one value type, tried in declaration order.
pub trait Alternatives<I, O> {
    /// Try each branch on `input`; return the first success, or the failure
    /// of the last branch tried.
    fn choose(&self, input: I) -> ParseResult<I, O>;
}

macro_rules! alternatives_impl {
    (; $last_idx:tt $last:ident) => {
        impl<I, O, $last> Alternatives<I, O> for ($last,)
        where
            I: Input,
            $last: Parser<I, O>,
        {
            fn choose(&self, input: I) -> ParseResult<I, O> {
                self.$last_idx.parse(input)
            }
        }
    };
    ($($idx:tt $p:ident),+ ; $last_idx:tt $last:ident) => {
        impl<I, O, $($p,)* $last> Alternatives<I, O> for ($($p,)* $last,)
        where
            I: Input,
            $($p: Parser<I, O>,)*
            $last: Parser<I, O>,
        {
            fn choose(&self, input: I) -> ParseResult<I, O> {
                $(
                    match self.$idx.parse(input) {
                        Ok(done) => return Ok(done),
                        Err(err) => trace!(branch = $idx, %err, "alternative failed"),
                    }
                )*
                self.$last_idx.parse(input)
            }
        }
    };
}

alternatives_impl!(; 0 P0);
alternatives_impl!(0 P0; 1 P1);
alternatives_impl!(0 P0, 1 P1; 2 P2);
alternatives_impl!(0 P0, 1 P1, 2 P2; 3 P3);
alternatives_impl!(0 P0, 1 P1, 2 P2, 3 P3; 4 P4);
alternatives_impl!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4; 5 P5);
alternatives_impl!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5; 6 P6);
alternatives_impl!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6; 7 P7);
alternatives_impl!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6, 7 P7; 8 P8);
alternatives_impl!(0 P0, 1 P1, 2 P2, 3 P3, 4 P4, 5 P5, 6 P6, 7 P7, 8 P8; 9 P9);

/// Try each branch in order; the first success is returned unchanged.
///
/// When every branch fails, the outcome is exactly the last branch's failure;
/// earlier messages are dropped. A failed branch consumed nothing, so each
/// branch sees the original view.
///
/// ```text
/// alternative((literal("true"), literal("true2")))  on "true2"  =>  ("true", "2")
/// ```
pub fn alternative<I, O, A>(branches: A) -> impl Parser<I, O>
where
    I: Input,
    A: Alternatives<I, O>,
{
    move |input: I| -> ParseResult<I, O> { branches.choose(input) }
}
