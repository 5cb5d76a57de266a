//! Formatting of numbers substituted into a rendering.
//!
//! Values are shown to a fixed number of significant figures, rounding half away from zero, in
//! fixed notation when the exponent is small and in exponential notation otherwise.

use alloc::{format, string::String};
use core::str::FromStr;

use num_traits::Zero;
use rust_decimal::Decimal;

use crate::decimal_ext::DecimalExtensions;

/// Exponents below this are shown in exponential notation.
const MIN_FIXED_EXPONENT: i32 = -6;

/// Literals at or above this magnitude are shown in exponential notation.
const MAX_FIXED_LITERAL: f64 = 1e21;

/// A number laid out for display, before it has been written out as plain text or TeX.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum FormattedNumber {
    Finite {
        negative: bool,
        mantissa: String,
        exponent: Option<i32>,
    },
    Infinite {
        negative: bool,
    },
    NaN,
}

impl FormattedNumber {
    /// Lays out `value` with `precision` significant figures. If `trim_zeros` is set, trailing
    /// zeros after the decimal point of the mantissa are dropped, along with the point itself if
    /// nothing is left after it.
    pub fn with_precision(value: f64, precision: usize, trim_zeros: bool) -> FormattedNumber {
        if let Some(special) = Self::non_finite(value) {
            return special;
        }

        let precision = precision.max(1);
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };

        let (digits, exponent) = match significant_digits(magnitude, precision) {
            Some(parts) => parts,
            None => return Self::from_literal(&literal(value)),
        };

        let mut mantissa = if exponent < MIN_FIXED_EXPONENT || exponent >= precision as i32 {
            let (first, rest) = digits.split_at(1);
            if rest.is_empty() { first.into() } else { format!("{}.{}", first, rest) }
        } else if exponent >= 0 {
            let (whole, fraction) = digits.split_at(exponent as usize + 1);
            if fraction.is_empty() { whole.into() } else { format!("{}.{}", whole, fraction) }
        } else {
            format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
        };
        let exponent = if exponent < MIN_FIXED_EXPONENT || exponent >= precision as i32 {
            Some(exponent)
        } else {
            None
        };

        if trim_zeros && mantissa.contains('.') {
            let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.').len();
            mantissa.truncate(trimmed);
        }

        FormattedNumber::Finite { negative, mantissa, exponent }
    }

    /// Lays out a number exactly as it was written in source text, such as `2`, `-1.50` or
    /// `2.13e+6`.
    pub fn from_literal(text: &str) -> FormattedNumber {
        let (negative, body) = match text.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, text),
        };

        match body {
            "Infinity" => return FormattedNumber::Infinite { negative },
            "NaN" => return FormattedNumber::NaN,
            _ => (),
        }

        if let Some(index) = body.find(|c| c == 'e' || c == 'E') {
            if let Ok(exponent) = body[index + 1..].parse::<i32>() {
                return FormattedNumber::Finite {
                    negative,
                    mantissa: body[..index].into(),
                    exponent: Some(exponent),
                };
            }
        }

        FormattedNumber::Finite { negative, mantissa: body.into(), exponent: None }
    }

    fn non_finite(value: f64) -> Option<FormattedNumber> {
        if value.is_nan() {
            Some(FormattedNumber::NaN)
        } else if value.is_infinite() {
            Some(FormattedNumber::Infinite { negative: value < 0.0 })
        } else {
            None
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            FormattedNumber::Finite { negative, .. } | FormattedNumber::Infinite { negative } => *negative,
            FormattedNumber::NaN => false,
        }
    }

    /// Writes this number as plain text, e.g. `-212`, `12.0` or `2.13e+6`.
    pub fn to_plain(&self) -> String {
        match self {
            FormattedNumber::Finite { negative, mantissa, exponent } => {
                let mut out = String::new();
                if *negative { out.push('-') }
                out.push_str(mantissa);
                if let Some(exponent) = exponent {
                    out.push_str(&format!("e{}", signed(*exponent)));
                }
                out
            }
            FormattedNumber::Infinite { negative } =>
                if *negative { "-Infinity".into() } else { "Infinity".into() },
            FormattedNumber::NaN => "NaN".into(),
        }
    }

    /// Writes this number as TeX, e.g. `-212` or `2.13 \cdot 10^{+6}`.
    pub fn to_tex(&self) -> String {
        match self {
            FormattedNumber::Finite { negative, mantissa, exponent } => {
                let mut out = String::new();
                if *negative { out.push('-') }
                out.push_str(mantissa);
                if let Some(exponent) = exponent {
                    out.push_str(&format!(" \\cdot 10^{{{}}}", signed(*exponent)));
                }
                out
            }
            FormattedNumber::Infinite { negative } =>
                if *negative { "-\\infty".into() } else { "\\infty".into() },
            FormattedNumber::NaN => "\\mathrm{NaN}".into(),
        }
    }
}

fn signed(exponent: i32) -> String {
    if exponent < 0 {
        format!("-{}", -exponent)
    } else {
        format!("+{}", exponent)
    }
}

/// Returns exactly `precision` significant digits of a finite, non-negative `magnitude`, along
/// with the decimal exponent of the first digit. Zero has exponent 0.
fn significant_digits(magnitude: f64, precision: usize) -> Option<(String, i32)> {
    if magnitude.is_zero() {
        return Some(("0".repeat(precision), 0));
    }

    // `{:e}` gives the shortest mantissa which round-trips, so rounding happens on the decimal
    // digits a reader would see rather than on the binary value.
    let scientific = format!("{:e}", magnitude);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let mut exponent = exponent.parse::<i32>().ok()?;
    let mantissa = Decimal::from_str(mantissa).ok()?;

    let places = (precision - 1) as u32;
    let mut rounded = mantissa.round_half_away(places);
    if rounded >= Decimal::from(10u8) {
        rounded = (rounded / Decimal::from(10u8)).round_half_away(places);
        exponent += 1;
    }

    let (whole, fraction) = rounded.split_point();
    let mut digits = whole;
    digits.push_str(&fraction);
    while digits.len() < precision {
        digits.push('0');
    }
    digits.truncate(precision);

    Some((digits, exponent))
}

/// Formats `value` to `precision` significant figures as plain text.
pub fn format(value: f64, precision: usize, trim_zeros: bool) -> String {
    FormattedNumber::with_precision(value, precision, trim_zeros).to_plain()
}

/// Returns the shortest source text for a number, as used for constants which were built rather
/// than parsed: `2`, `0.5`, `1e-19`, `2.5e+21`.
pub fn literal(value: f64) -> String {
    if let Some(special) = FormattedNumber::non_finite(value) {
        return special.to_plain();
    }

    let magnitude = if value < 0.0 { -value } else { value };
    if !magnitude.is_zero() && (magnitude < 1e-6 || magnitude >= MAX_FIXED_LITERAL) {
        let scientific = format!("{:e}", value);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') =>
                format!("{}e+{}", mantissa, exponent),
            _ => scientific,
        }
    } else if value.is_zero() {
        "0".into()
    } else {
        format!("{}", value)
    }
}

/// Returns the length of the number at the very start of `text`, if it starts with one. An
/// exponent is included only when digits follow it, so the `e` in `2e^x` is left alone.
pub fn leading_numeral_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut index = 0;
    let mut seen_digit = false;

    while index < bytes.len() && (bytes[index].is_ascii_digit() || bytes[index] == b'.') {
        seen_digit |= bytes[index].is_ascii_digit();
        index += 1;
    }
    if !seen_digit {
        return None;
    }

    if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
        let mut exponent_end = index + 1;
        if exponent_end < bytes.len() && (bytes[exponent_end] == b'+' || bytes[exponent_end] == b'-') {
            exponent_end += 1;
        }
        let digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > digits_start {
            index = exponent_end;
        }
    }

    Some(index)
}
