//! Escape-aware content scanning.
//!
//! The scan walks a forward-only cursor over the original view, alternating
//! runs of `normal` content with `control`-prefixed escape sequences. It
//! returns the scanned span of the original view, escapes included and not
//! decoded; turning `\n` into a newline is the caller's job.
//!
//! The scan stops without consuming at the first symbol that is neither
//! matched by `normal` nor introduced by `control`, which is how a closing
//! quote ends a string body.

use tracing::trace;

use crate::{not_parsed, parsed, Input, Parsed, ParseResult, Parser};

/// The span of `input` up to `cursor`, with `cursor` as the remainder.
fn scanned<I: Input>(input: I, cursor: I) -> ParseResult<I, I> {
    let (span, rest) = input.split_at_offset(input.offset_to(cursor));
    parsed(span, rest)
}

/// Scan a maximal prefix of `normal` runs and `control` escapes.
///
/// `escape` validates what follows each `control` symbol; its consumed span
/// is skipped over. Failures:
///
/// - `"end with control symbol"` when the view ends right after `control`
/// - `"not escapable symbol"` when `escape` rejects what follows `control`
/// - `"non normal or control symbol"` when nothing could be scanned at all
///
/// An empty view succeeds with an empty span.
///
/// ```text
/// escaped(alphanumeric1(), '\\', one_of("\"n\\"))  on r#"123\"34;"#  =>  (r#"123\"34"#, ";")
/// ```
pub fn escaped<I, NV, EV, N, E>(normal: N, control: I::Item, escape: E) -> impl Parser<I, I>
where
    I: Input,
    N: Parser<I, NV>,
    E: Parser<I, EV>,
{
    move |input: I| -> ParseResult<I, I> {
        let mut cursor = input;
        loop {
            if cursor.is_empty_input() {
                return parsed(input, cursor);
            }

            match normal.parse(cursor) {
                Ok(Parsed { rest, .. }) => {
                    if rest.is_empty_input() {
                        return parsed(input, rest);
                    }
                    if rest.input_len() == cursor.input_len() {
                        trace!("escape scan stopped on zero-width content");
                        return scanned(input, cursor);
                    }
                    cursor = rest;
                }
                Err(_) => match cursor.split_first_item() {
                    Some((item, after)) if item == control => {
                        if after.is_empty_input() {
                            return not_parsed("end with control symbol");
                        }
                        match escape.parse(after) {
                            Ok(Parsed { rest, .. }) => cursor = rest,
                            Err(err) => {
                                trace!(%err, "escape sequence rejected");
                                return not_parsed("not escapable symbol");
                            }
                        }
                    }
                    _ => {
                        if cursor.input_len() == input.input_len() {
                            return not_parsed("non normal or control symbol");
                        }
                        trace!(consumed = input.offset_to(cursor), "escape scan reached delimiter");
                        return scanned(input, cursor);
                    }
                },
            }
        }
    }
}
