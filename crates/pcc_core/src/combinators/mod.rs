//! Combinators: parsers built from parsers.
//!
//! | Combinator | Produces |
//! |------------|----------|
//! | [`keep_left`] / [`keep_right`] | one side of a sequence |
//! | [`alternative`] | the first successful branch |
//! | [`optional`] | `Some(value)` or `None` without consuming |
//! | [`map`] / [`constant`] | a transformed value |
//! | [`product`] / [`build`] / [`product_into`] | a tuple, builder result or struct |
//! | [`sum`] | a case of a tagged union |
//!
//! Tuple-taking combinators accept between one and ten parsers.

mod choice;
mod optional;
mod product;
mod sequence;
mod sum;
mod transform;

pub use choice::{alternative, Alternatives};
pub use optional::optional;
pub use product::{build, product, product_into, Apply, Sequence};
pub use sequence::{keep_left, keep_right};
pub use sum::{sum, Cases};
pub use transform::{constant, map};
