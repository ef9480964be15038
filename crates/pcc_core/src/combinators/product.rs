//! Product construction.
//!
//! Sub-parsers run strictly left to right, each on the previous remainder,
//! and their values are bound positionally: into a tuple ([`product`]), into
//! the arguments of a builder function ([`build`]), or into a type that knows
//! how to construct itself from that tuple ([`product_into`]). The first
//! failure stops the run and is propagated unchanged.

use crate::{parsed, Input, Parsed, ParseResult, Parser};

/// A tuple of parsers run in sequence, producing the tuple of their values.
pub trait Sequence<I, O> {
    fn parse_all(&self, input: I) -> ParseResult<I, O>;
}

/// A builder taking the values of a [`Sequence`] as positional arguments.
pub trait Apply<Args, T> {
    fn apply(&self, args: Args) -> T;
}

macro_rules! product_impl {
    ($($idx:tt $p:ident $v:ident $x:ident),+) => {
        impl<I, $($v, $p),+> Sequence<I, ($($v,)+)> for ($($p,)+)
        where
            I: Input,
            $($p: Parser<I, $v>,)+
        {
            fn parse_all(&self, input: I) -> ParseResult<I, ($($v,)+)> {
                let rest = input;
                $(let Parsed { value: $x, rest } = self.$idx.parse(rest)?;)+
                parsed(($($x,)+), rest)
            }
        }

        impl<F, T, $($v),+> Apply<($($v,)+), T> for F
        where
            F: Fn($($v),+) -> T,
        {
            fn apply(&self, ($($x,)+): ($($v,)+)) -> T {
                self($($x),+)
            }
        }
    };
}

product_impl!(0 P0 V0 v0);
product_impl!(0 P0 V0 v0, 1 P1 V1 v1);
product_impl!(0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2);
product_impl!(0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3);
product_impl!(0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3, 4 P4 V4 v4);
product_impl!(0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3, 4 P4 V4 v4, 5 P5 V5 v5);
product_impl!(0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3, 4 P4 V4 v4, 5 P5 V5 v5, 6 P6 V6 v6);
product_impl!(
    0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3, 4 P4 V4 v4, 5 P5 V5 v5, 6 P6 V6 v6,
    7 P7 V7 v7
);
product_impl!(
    0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3, 4 P4 V4 v4, 5 P5 V5 v5, 6 P6 V6 v6,
    7 P7 V7 v7, 8 P8 V8 v8
);
product_impl!(
    0 P0 V0 v0, 1 P1 V1 v1, 2 P2 V2 v2, 3 P3 V3 v3, 4 P4 V4 v4, 5 P5 V5 v5, 6 P6 V6 v6,
    7 P7 V7 v7, 8 P8 V8 v8, 9 P9 V9 v9
);

/// Run every parser in order and collect their values into a tuple.
pub fn product<I, O, S>(parsers: S) -> impl Parser<I, O>
where
    I: Input,
    S: Sequence<I, O>,
{
    move |input: I| -> ParseResult<I, O> { parsers.parse_all(input) }
}

/// Run every parser in order and pass their values to `builder` as
/// positional arguments.
///
/// ```text
/// build(|x, y, z| Point { x, y, z }, (int, int, int))
/// ```
pub fn build<I, Args, T, F, S>(builder: F, parsers: S) -> impl Parser<I, T>
where
    I: Input,
    S: Sequence<I, Args>,
    F: Apply<Args, T>,
{
    move |input: I| -> ParseResult<I, T> {
        let Parsed { value, rest } = parsers.parse_all(input)?;
        parsed(builder.apply(value), rest)
    }
}

/// Run every parser in order and convert the tuple of values into `T`.
///
/// `T` supplies the ordered-field mapping through `From<(V0, .., Vn)>`.
pub fn product_into<T, I, O, S>(parsers: S) -> impl Parser<I, T>
where
    I: Input,
    S: Sequence<I, O>,
    O: Into<T>,
{
    move |input: I| -> ParseResult<I, T> {
        let Parsed { value, rest } = parsers.parse_all(input)?;
        parsed(value.into(), rest)
    }
}
