//! Stack growth for recursive grammars.
//!
//! A deferred grammar rule re-enters the parser on every level of nesting
//! (`[[[[...]]]]` in JSON is one call chain per bracket), so the depth of the
//! native call stack follows the depth of the input. Wrapping each re-entry in
//! [`ensure_sufficient_stack`] lets adversarially nested documents parse
//! instead of aborting the process.
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack on demand through `stacker`.
//! - **WASM targets**: plain passthrough.
//!
//! # Configuration
//!
//! - **Red zone**: 100KB. Growth happens when less than this remains.
//! - **Growth size**: 1MB per new stack segment.

/// Minimum stack space to keep available before re-entering a rule.
const RED_ZONE: usize = 100 * 1024;

/// Size of each additional stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn value(input: &str) -> ParseResult<&str, Json> {
///     ensure_sufficient_stack(|| alternatives.parse(input))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
