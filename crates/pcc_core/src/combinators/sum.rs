//! Tagged-union construction.

use tracing::trace;

use crate::{Input, ParseResult, ParseResultExt, Parser};

/// A tuple of parsers, each producing one case of the union `T`.
///
/// `Vs` is the tuple of the parsers' own value types; each converts into `T`.
pub trait Cases<I, T, Vs> {
    fn choose_case(&self, input: I) -> ParseResult<I, T>;
}

macro_rules! cases_impl {
    (; $last_idx:tt $last:ident $last_v:ident) => {
        impl<I, T, $last, $last_v> Cases<I, T, ($last_v,)> for ($last,)
        where
            I: Input,
            $last: Parser<I, $last_v>,
            $last_v: Into<T>,
        {
            fn choose_case(&self, input: I) -> ParseResult<I, T> {
                self.$last_idx.parse(input).map_value(Into::into)
            }
        }
    };
    ($($idx:tt $p:ident $v:ident),+ ; $last_idx:tt $last:ident $last_v:ident) => {
        impl<I, T, $($p, $v,)* $last, $last_v> Cases<I, T, ($($v,)* $last_v,)>
            for ($($p,)* $last,)
        where
            I: Input,
            $($p: Parser<I, $v>, $v: Into<T>,)*
            $last: Parser<I, $last_v>,
            $last_v: Into<T>,
        {
            fn choose_case(&self, input: I) -> ParseResult<I, T> {
                $(
                    match self.$idx.parse(input) {
                        Ok(done) => return Ok(done.map(Into::into)),
                        Err(err) => trace!(case = $idx, %err, "sum case failed"),
                    }
                )*
                self.$last_idx.parse(input).map_value(Into::into)
            }
        }
    };
}

cases_impl!(; 0 P0 V0);
cases_impl!(0 P0 V0; 1 P1 V1);
cases_impl!(0 P0 V0, 1 P1 V1; 2 P2 V2);
cases_impl!(0 P0 V0, 1 P1 V1, 2 P2 V2; 3 P3 V3);
cases_impl!(0 P0 V0, 1 P1 V1, 2 P2 V2, 3 P3 V3; 4 P4 V4);
cases_impl!(0 P0 V0, 1 P1 V1, 2 P2 V2, 3 P3 V3, 4 P4 V4; 5 P5 V5);
cases_impl!(0 P0 V0, 1 P1 V1, 2 P2 V2, 3 P3 V3, 4 P4 V4, 5 P5 V5; 6 P6 V6);
cases_impl!(0 P0 V0, 1 P1 V1, 2 P2 V2, 3 P3 V3, 4 P4 V4, 5 P5 V5, 6 P6 V6; 7 P7 V7);
cases_impl!(0 P0 V0, 1 P1 V1, 2 P2 V2, 3 P3 V3, 4 P4 V4, 5 P5 V5, 6 P6 V6, 7 P7 V7; 8 P8 V8);
cases_impl!(
    0 P0 V0, 1 P1 V1, 2 P2 V2, 3 P3 V3, 4 P4 V4, 5 P5 V5, 6 P6 V6, 7 P7 V7, 8 P8 V8;
    9 P9 V9
);

/// Try each case parser in declaration order and wrap the first success as
/// its case of `T`.
///
/// Shares the failure policy of [`alternative`](super::alternative): when no
/// case matches, the last case's failure is returned.
///
/// ```text
/// enum Number { Float(f64), Word(String) }   // with From<f64>, From<&str>
/// sum::<Number, _, _, _>((numeric_literal::<f64>(), literal("lol")))
/// ```
pub fn sum<T, I, Vs, C>(cases: C) -> impl Parser<I, T>
where
    I: Input,
    C: Cases<I, T, Vs>,
{
    move |input: I| -> ParseResult<I, T> { cases.choose_case(input) }
}
