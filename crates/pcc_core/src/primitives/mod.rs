//! Primitive parsers.
//!
//! The leaves every grammar is built from. Each one either consumes a prefix
//! of the view and returns it (or a value read from it), or fails with a
//! fixed message without consuming anything.

mod literal;
mod numeric;
mod take;

pub use literal::{literal, one_of, symbol};
pub use numeric::{integer_literal, numeric_literal, Integer, Numeric};
pub use take::{
    alphanumeric0, alphanumeric1, exact_take, non_space0, spaces0, spaces1, take_while,
    take_while_min,
};
