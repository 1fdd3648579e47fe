//! Fixed-decimal rendering of numbers.
//!
//! Matches `Number.prototype.toFixed`: the exact binary value is rounded to
//! the requested number of fraction digits with ties going away from zero,
//! and magnitudes from `1e21` upward fall back to exponent notation.

use alloc::{format, string::String, vec::Vec};

use crate::{Error, Result};

/// The largest accepted fraction digit count.
pub const MAX_DIGITS: u32 = 100;

const EXPONENT_THRESHOLD: f64 = 1e21;

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Renders `x` with exactly `digits` fraction digits.
///
/// # Examples
///
/// ```rust
/// use narrowing::fixed::to_fixed;
///
/// assert_eq!(to_fixed(51.0, 0).unwrap(), "51");
/// assert_eq!(to_fixed(0.125, 2).unwrap(), "0.13");
/// assert_eq!(to_fixed(1.005, 2).unwrap(), "1.00");
/// assert!(to_fixed(1.0, 101).is_err());
/// ```
pub fn to_fixed(x: f64, digits: u32) -> Result<String> {
    if digits > MAX_DIGITS {
        return Err(Error::DigitsOutOfRange(digits));
    }
    Ok(format_fixed(x, digits as usize))
}

/// `digits` must already be within [`MAX_DIGITS`].
pub(crate) fn format_fixed(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return String::from("NaN");
    }
    if x.is_infinite() {
        return String::from(if x < 0.0 { "-Infinity" } else { "Infinity" });
    }

    let negative = x < 0.0;
    // `-0.0` is not negative here and must not print a sign.
    let magnitude = x.abs();
    if magnitude >= EXPONENT_THRESHOLD {
        return exponent_form(x);
    }

    let mut out = String::with_capacity(digits + 24);
    if negative {
        out.push('-');
    }
    out.push_str(&round_magnitude(magnitude, digits));
    out
}

fn exponent_form(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

fn round_magnitude(magnitude: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(core::iter::repeat(b'0')).take(digits))
        .collect();

    // The first dropped digit decides; a lone `5` is a tie and rounds up.
    if frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        increment(&mut buf);
    }

    let point = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 1);
    for (i, &b) in buf.iter().enumerate() {
        if i == point {
            out.push('.');
        }
        out.push(char::from(b));
    }
    out
}

fn increment(buf: &mut Vec<u8>) {
    for b in buf.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return;
        }
    }
    buf.insert(0, b'1');
}
