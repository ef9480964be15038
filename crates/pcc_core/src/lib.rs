//! Composable parser combinators.
//!
//! Small parsing functions over a borrowed input view combine into larger
//! parsers with no grammar-compiler step. The crate is layered:
//!
//! | Layer | Module | Contents |
//! |-------|--------|----------|
//! | Input | [`Input`] | `Copy` views over `&str` and `&[T]` |
//! | Outcome | [`ParseResult`] | value plus remainder, or an opaque message |
//! | Contract | [`Parser`] | closures, [`BoxedParser`], method combinators |
//! | Primitives | [`primitives`] | literals, symbols, runs, numbers |
//! | Combinators | [`combinators`] | sequencing, choice, product, sum, repetition |
//!
//! A failed parser never consumes input, so backtracking is calling the next
//! alternative with the same view. There is no error recovery and failures
//! carry no position.
//!
//! ```text
//! let point = build(
//!     |x, _, y| Point { x, y },
//!     (numeric_literal::<i32>(), symbol(','), numeric_literal::<i32>()),
//! );
//! point.parse("3,4 rest")  =>  (Point { x: 3, y: 4 }, " rest")
//! ```
//!
//! # Tracing
//!
//! Choice branches, repetition stops, escape-scan stops and deferred rule
//! entries are traced at `trace` level. Call [`init_tracing`] with `RUST_LOG`
//! set (for example `RUST_LOG=pcc_core=trace`) to see them.

use std::sync::Once;

pub mod combinators;
mod deferred;
mod escaped;
mod input;
mod outcome;
mod parser;
pub mod primitives;
mod repeat;

pub use combinators::{
    alternative, build, constant, keep_left, keep_right, map, optional, product, product_into,
    sum,
};
pub use deferred::defer;
pub use escaped::escaped;
pub use input::Input;
pub use outcome::{not_parsed, parsed, ParseError, ParseResult, ParseResultExt, Parsed};
pub use parser::{BoxedParser, ByRef, Parser};
pub use primitives::{
    alphanumeric0, alphanumeric1, exact_take, integer_literal, literal, non_space0,
    numeric_literal, one_of, spaces0, spaces1, symbol, take_while, take_while_min,
};
pub use repeat::{many, many0, many1, separated_list};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at program or test start. Does nothing unless `RUST_LOG`
/// is set:
///
/// ```bash
/// RUST_LOG=pcc_core=trace cargo test -p pcc_grammars
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
