//! Numeric literals.
//!
//! Locale-independent and prefix-oriented: the parser reads the longest
//! prefix that forms a valid number and leaves the rest. Leading whitespace
//! is rejected rather than skipped.
//!
//! Integers accept an optional `-` (signed types only) followed by digits of
//! the radix. Floats accept an optional sign, digits with an optional
//! fraction, an optional exponent, and the words `inf`, `infinity` and `nan`
//! in any case. Integer overflow is a failure.

use std::num::ParseIntError;

use crate::{not_parsed, parsed, Input, ParseError, ParseResult, Parser};

/// A number that can be read from the start of a text view.
pub trait Numeric: Sized {
    /// Read the longest numeric prefix of `text`, returning the value and
    /// the prefix length in bytes.
    fn scan_prefix(text: &str) -> Option<(Self, usize)>;
}

/// An integer that can be read in any radix from 2 to 36.
///
/// Scanning in any other radix yields `None`.
pub trait Integer: Numeric {
    fn scan_prefix_radix(text: &str, radix: u32) -> Option<(Self, usize)>;
}

fn scan_integer<T, F>(text: &str, radix: u32, signed: bool, from_str_radix: F) -> Option<(T, usize)>
where
    F: Fn(&str, u32) -> Result<T, ParseIntError>,
{
    if !(2..=36).contains(&radix) {
        return None;
    }
    let sign_len = usize::from(signed && text.starts_with('-'));
    let digits = text
        .bytes()
        .skip(sign_len)
        .take_while(|&b| char::from(b).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign_len + digits;
    let value = from_str_radix(text.get(..end)?, radix).ok()?;
    Some((value, end))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Byte length of the longest float literal at the start of `text`.
fn float_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let tail = text.get(pos..)?;
    for word in ["infinity", "inf", "nan"] {
        if tail
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
        {
            return Some(pos + word.len());
        }
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }
    Some(pos)
}

macro_rules! integer_impl {
    ($signed:literal; $($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn scan_prefix(text: &str) -> Option<(Self, usize)> {
                    scan_integer(text, 10, $signed, <$t>::from_str_radix)
                }
            }

            impl Integer for $t {
                fn scan_prefix_radix(text: &str, radix: u32) -> Option<(Self, usize)> {
                    scan_integer(text, radix, $signed, <$t>::from_str_radix)
                }
            }
        )*
    };
}

integer_impl!(true; i8, i16, i32, i64, i128, isize);
integer_impl!(false; u8, u16, u32, u64, u128, usize);

macro_rules! float_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn scan_prefix(text: &str) -> Option<(Self, usize)> {
                    let len = float_prefix_len(text)?;
                    let value = text.get(..len)?.parse::<$t>().ok()?;
                    Some((value, len))
                }
            }
        )*
    };
}

float_impl!(f32, f64);

fn check_start(input: &str) -> Result<(), ParseError> {
    match input.chars().next() {
        None => Err(ParseError::new(
            "can not parse numeric value from empty input",
        )),
        Some(c) if c.is_whitespace() => {
            Err(ParseError::new("input should not start with whitespace"))
        }
        Some(_) => Ok(()),
    }
}

/// Read a number of type `T` in its natural notation.
///
/// ```text
/// numeric_literal::<f64>()  on "2.5]"   =>  (2.5, "]")
/// numeric_literal::<u8>()   on "300"    =>  failure (overflow)
/// ```
pub fn numeric_literal<'a, T: Numeric>() -> impl Parser<&'a str, T> {
    move |input: &'a str| -> ParseResult<&'a str, T> {
        check_start(input)?;
        match T::scan_prefix(input) {
            Some((value, len)) => parsed(value, input.split_at_offset(len).1),
            None => not_parsed("can not parse numeric value"),
        }
    }
}

/// Read an integer of type `T` written in `radix` (2 to 36).
///
/// No radix prefix (`0x`, `0b`) is recognised.
pub fn integer_literal<'a, T: Integer>(radix: u32) -> impl Parser<&'a str, T> {
    move |input: &'a str| -> ParseResult<&'a str, T> {
        if !(2..=36).contains(&radix) {
            return not_parsed("unsupported radix");
        }
        check_start(input)?;
        match T::scan_prefix_radix(input, radix) {
            Some((value, len)) => parsed(value, input.split_at_offset(len).1),
            None => not_parsed("can not parse integral value"),
        }
    }
}
