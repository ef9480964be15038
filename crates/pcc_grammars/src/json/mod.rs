//! JSON values.
//!
//! ```text
//! value   = ws (object | array | null | boolean | number | string) ws
//! object  = "{" ws [member ("," member)*] "}"
//! member  = ws string ws ":" value
//! array   = "[" ws [value ("," value)*] "]"
//! ```
//!
//! Objects and arrays refer back to `value`, so those two rules are deferred.
//! Numbers follow JSON's own syntax (no `+`, leading zeros, bare `.` or
//! `nan`) and are read as `f64`. Object keys are kept sorted; when a key repeats,
//! the last member wins.

use std::collections::BTreeMap;

use pcc_core::{
    alternative, constant, defer, escaped, exact_take, keep_left, keep_right, literal,
    numeric_literal, one_of, optional, parsed, product, separated_list, spaces1, sum, symbol,
    take_while_min, BoxedParser, Input, ParseResultExt, Parser, ParseResult,
};
use tracing::debug;

use crate::{finish, DocumentError};

/// A parsed JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(BTreeMap<String, JsonValue>),
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<BTreeMap<String, JsonValue>> for JsonValue {
    fn from(value: BTreeMap<String, JsonValue>) -> Self {
        JsonValue::Object(value)
    }
}

/// Optional whitespace.
fn ws<'a>() -> impl Parser<&'a str, Option<&'a str>> {
    optional(spaces1())
}

fn null<'a>() -> impl Parser<&'a str, JsonValue> {
    constant(JsonValue::Null, literal("null"))
}

fn boolean<'a>() -> impl Parser<&'a str, bool> {
    alternative((constant(true, literal("true")), constant(false, literal("false"))))
}

fn digits<'a>() -> impl Parser<&'a str, &'a str> {
    take_while_min(1, |c: char| c.is_ascii_digit())
}

/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`, read as `f64`.
fn number<'a>() -> impl Parser<&'a str, f64> {
    let shape = product((
        optional(symbol('-')),
        alternative((literal("0"), digits())),
        optional(keep_right(symbol('.'), digits())),
        optional(product((one_of("eE"), optional(one_of("+-")), digits()))),
    ));
    let read = numeric_literal::<f64>();
    move |input: &'a str| -> ParseResult<&'a str, f64> {
        let rest = shape.parse(input)?.rest;
        let (span, _) = input.split_at_offset(input.offset_to(rest));
        let value = read.parse(span).into_value()?;
        parsed(value, rest)
    }
}

/// `\uXXXX`, exactly four hex digits.
fn unicode_escape<'a>() -> impl Parser<&'a str, &'a str> {
    let digits = keep_right(symbol('u'), exact_take(4));
    move |input: &'a str| -> ParseResult<&'a str, &'a str> {
        digits.parse(input).verify(
            |hex| hex.chars().all(|c| c.is_ascii_hexdigit()),
            "invalid unicode escape",
        )
    }
}

/// The raw body of a string, escapes still encoded.
fn string_body<'a>() -> impl Parser<&'a str, &'a str> {
    let normal = take_while_min(1, |c: char| c != '"' && c != '\\' && !c.is_control());
    let escape = alternative((
        constant((), one_of("\"\\/bfnrt")),
        constant((), unicode_escape()),
    ));
    escaped(normal, '\\', escape)
}

/// Decode the escapes of a body accepted by [`string_body`].
///
/// Consecutive `\u` escapes are decoded together so surrogate pairs combine;
/// a lone surrogate becomes U+FFFD.
fn unescape(raw: &str) -> String {
    fn flush(units: &mut Vec<u16>, out: &mut String) {
        out.extend(
            char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
        );
    }

    let mut out = String::with_capacity(raw.len());
    let mut units = Vec::new();
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            flush(&mut units, &mut out);
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            break;
        };
        if escape == 'u' {
            let hex: String = (&mut chars).take(4).collect();
            if let Ok(unit) = u16::from_str_radix(&hex, 16) {
                units.push(unit);
            }
            continue;
        }
        flush(&mut units, &mut out);
        out.push(match escape {
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            other => other,
        });
    }
    flush(&mut units, &mut out);
    out
}

/// A quoted string, possibly empty, with its escapes decoded.
pub fn string<'a>() -> impl Parser<&'a str, String> {
    let body = keep_left(keep_right(symbol('"'), optional(string_body())), symbol('"'));
    move |input: &'a str| -> ParseResult<&'a str, String> {
        body.parse(input)
            .map_value(|raw| raw.map(unescape).unwrap_or_default())
    }
}

fn array<'a>() -> BoxedParser<'a, &'a str, Vec<JsonValue>> {
    let elements = optional(separated_list(json_value(), literal(",")));
    let body = keep_right(ws(), elements).map(Option::unwrap_or_default);
    keep_left(keep_right(literal("["), body), literal("]")).boxed()
}

fn member<'a>() -> impl Parser<&'a str, (String, JsonValue)> {
    let key = keep_left(keep_right(ws(), string()), keep_right(ws(), literal(":")));
    product((key, json_value()))
}

/// Later members overwrite earlier ones with the same key.
fn collect_members(members: Option<Vec<(String, JsonValue)>>) -> BTreeMap<String, JsonValue> {
    members.into_iter().flatten().collect()
}

fn object<'a>() -> BoxedParser<'a, &'a str, BTreeMap<String, JsonValue>> {
    let members = optional(separated_list(member(), literal(",")));
    let body = keep_right(ws(), members).map(collect_members);
    keep_left(keep_right(literal("{"), body), literal("}")).boxed()
}

/// Any JSON value, with surrounding whitespace.
pub fn json_value<'a>() -> BoxedParser<'a, &'a str, JsonValue> {
    let value = sum::<JsonValue, _, _, _>((
        defer(object),
        defer(array),
        null(),
        boolean(),
        number(),
        string(),
    ));
    keep_left(keep_right(ws(), value), ws()).boxed()
}

/// A JSON document root: an object, an array or `null`, with surrounding
/// whitespace.
pub fn json<'a>() -> BoxedParser<'a, &'a str, JsonValue> {
    let root = sum::<JsonValue, _, _, _>((defer(object), defer(array), null()));
    keep_left(keep_right(ws(), root), ws()).boxed()
}

/// Parse a whole JSON document.
pub fn parse_json(text: &str) -> Result<JsonValue, DocumentError> {
    let value = finish(text, json().parse(text))?;
    debug!(bytes = text.len(), "parsed json document");
    Ok(value)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
