//! Conversion of constructor inputs into exact decimals
//!
//! `Money` accepts text, integers, floats and decimals as its amount. Each
//! input kind implements [`IntoAmount`], which yields an exact `Decimal`
//! before any rounding happens.
//!
//! Floats never go through their binary expansion: a float is rendered with
//! its shortest round-trip digits (`10.005_f64` becomes `"1.0005e1"`) and
//! that text is parsed as a decimal. What the caller wrote is what gets
//! rounded.
//!
//! Numbers too large for a `Decimal` are rejected as out of range rather than
//! malformed. Numbers finer than a `Decimal` can hold are kept to 28 places.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::rounding::MAX_DECIMAL_PLACES;

/// An amount that could not be read as an exact decimal
///
/// Holds the input rendered as text, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectedAmount {
    /// Not a decimal number
    Malformed(String),
    /// A decimal number too large for a `Decimal`
    OutOfRange(String),
}

/// Values that can be used as the amount of a [`Money`](crate::Money)
pub trait IntoAmount {
    /// Converts the value into an exact decimal
    fn into_amount(self) -> Result<Decimal, RejectedAmount>;
}

/// Parses decimal text, accepting plain (`"-12.50"`) and scientific
/// (`"1.25e2"`) notation with surrounding whitespace
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, RejectedAmount> {
    let trimmed = text.trim();
    let parsed = match trimmed.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => parse_scientific(mantissa, exponent),
        None => Decimal::from_str(trimmed).ok(),
    };

    match parsed {
        Some(value) => Ok(value),
        None if is_decimal_literal(trimmed) => Err(RejectedAmount::OutOfRange(text.to_string())),
        None => Err(RejectedAmount::Malformed(text.to_string())),
    }
}

fn parse_scientific(mantissa: &str, exponent: &str) -> Option<Decimal> {
    let mantissa = Decimal::from_str(mantissa).ok()?;
    let exponent = i64::from_str(exponent).ok()?;
    let shift = i64::from(mantissa.scale()).checked_sub(exponent)?;
    scaled(mantissa.mantissa(), shift)
}

/// `mantissa * 10^-shift` as a `Decimal`
///
/// Values finer than the 28 places a `Decimal` holds keep those places, with
/// the last digit forced off 0 and 5 when anything nonzero was dropped. That
/// digit only separates "exactly on a boundary or tie" from "just past it",
/// so rounding to fewer places gives the same result as on the exact value.
fn scaled(mantissa: i128, shift: i64) -> Option<Decimal> {
    if shift < 0 {
        let factor = 10_i128.checked_pow(u32::try_from(-shift).ok()?)?;
        return Decimal::try_from_i128_with_scale(mantissa.checked_mul(factor)?, 0).ok();
    }

    let excess = shift - i64::from(MAX_DECIMAL_PLACES);
    if excess <= 0 {
        return Decimal::try_from_i128_with_scale(mantissa, u32::try_from(shift).ok()?).ok();
    }

    let divisor = u32::try_from(excess)
        .ok()
        .and_then(|excess| 10_i128.checked_pow(excess));
    let (mut kept, dropped) = match divisor {
        Some(divisor) => (mantissa / divisor, mantissa % divisor),
        None => (0, mantissa),
    };
    if dropped != 0 && kept % 5 == 0 {
        kept += mantissa.signum();
    }
    Decimal::try_from_i128_with_scale(kept, MAX_DECIMAL_PLACES).ok()
}

/// Whether `text` is written as a decimal number, whatever its magnitude
fn is_decimal_literal(text: &str) -> bool {
    fn digits(part: &str) -> bool {
        part.bytes().all(|b| b.is_ascii_digit())
    }
    fn unsigned(part: &str) -> &str {
        part.strip_prefix(['+', '-']).unwrap_or(part)
    }

    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(unsigned(exponent))),
        None => (text, None),
    };
    let (whole, fraction) = unsigned(mantissa).split_once('.').unwrap_or((unsigned(mantissa), ""));

    let mantissa_ok = !(whole.is_empty() && fraction.is_empty()) && digits(whole) && digits(fraction);
    let exponent_ok = exponent.map_or(true, |exponent| !exponent.is_empty() && digits(exponent));
    mantissa_ok && exponent_ok
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        parse_decimal(self)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        parse_decimal(&self)
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        parse_decimal(self)
    }
}

impl IntoAmount for Decimal {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        Ok(self)
    }
}

impl IntoAmount for &Decimal {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        Ok(*self)
    }
}

macro_rules! exact_integer_amount {
    ($($int:ty),*) => {
        $(
            impl IntoAmount for $int {
                fn into_amount(self) -> Result<Decimal, RejectedAmount> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

exact_integer_amount!(i32, i64, u32, u64);

impl IntoAmount for i128 {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        Decimal::from_i128(self).ok_or_else(|| RejectedAmount::OutOfRange(self.to_string()))
    }
}

impl IntoAmount for f64 {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        if !self.is_finite() {
            return Err(RejectedAmount::Malformed(self.to_string()));
        }
        parse_decimal(&format!("{self:e}"))
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> Result<Decimal, RejectedAmount> {
        if !self.is_finite() {
            return Err(RejectedAmount::Malformed(self.to_string()));
        }
        parse_decimal(&format!("{self:e}"))
    }
}
