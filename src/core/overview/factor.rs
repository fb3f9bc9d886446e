//! Exact rational scaling factors
//!
//! Factors are written either as decimals (`"0.5"`, `".25"`, `"2."`) or as
//! fractions and integers (`"1/3"`, `" 2 / 3 "`, `"4"`). Parsing never goes
//! through floating point so that the integrality check on scaled values is exact.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::str::FromStr;
use thiserror::Error;

/// Malformed factor text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorError {
    /// More than one `.` in a decimal factor
    #[error("Number '{text}' contains more than one dot")]
    MultipleDots {
        /// Offending factor text
        text: String,
    },

    /// More than one `/` in a fractional factor
    #[error("Number '{text}' contains more than one slash")]
    MultipleSlashes {
        /// Offending factor text
        text: String,
    },

    /// A component is not an integer
    #[error("Number '{text}' is not a valid rational number")]
    InvalidNumber {
        /// Offending factor text
        text: String,
    },

    /// Fraction with denominator zero
    #[error("Number '{text}' has a zero denominator")]
    ZeroDenominator {
        /// Offending factor text
        text: String,
    },
}

/// Parse an optional factor; an absent factor is exactly 1
///
/// # Errors
/// Returns a [`FactorError`] if the text is present and malformed
pub fn parse_factor(text: Option<&str>) -> Result<BigRational, FactorError> {
    text.map_or_else(|| Ok(BigRational::one()), parse_rational)
}

/// Parse a decimal, fraction or integer into an exact rational
///
/// # Errors
/// Returns a [`FactorError`] for repeated separators, non-numeric components
/// or a zero denominator
pub fn parse_rational(text: &str) -> Result<BigRational, FactorError> {
    let trimmed = text.trim();
    if trimmed.contains('.') {
        return parse_decimal(text, trimmed);
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    match parts.as_slice() {
        [whole] => Ok(BigRational::from_integer(parse_integer(text, whole)?)),
        [numerator, denominator] => {
            let numerator = parse_integer(text, numerator)?;
            let denominator = parse_integer(text, denominator)?;
            if denominator.is_zero() {
                return Err(FactorError::ZeroDenominator {
                    text: text.to_string(),
                });
            }
            Ok(BigRational::new(numerator, denominator))
        }
        _ => Err(FactorError::MultipleSlashes {
            text: text.to_string(),
        }),
    }
}

/// Multiply a nominal value by a factor
#[must_use]
pub fn scale(factor: &BigRational, nominal: u32) -> BigRational {
    factor * BigRational::from_integer(BigInt::from(nominal))
}

/// The integer value of `value`, or `None` if it has a fractional part
#[must_use]
pub fn whole_value(value: &BigRational) -> Option<BigInt> {
    value.is_integer().then(|| value.to_integer())
}

/// `D.F` is `(D * 10^len(F) + F) / 10^len(F)`; empty parts count as zero.
fn parse_decimal(text: &str, trimmed: &str) -> Result<BigRational, FactorError> {
    let Some((whole, fraction)) = trimmed.split_once('.') else {
        return Err(invalid(text));
    };
    if fraction.contains('.') {
        return Err(FactorError::MultipleDots {
            text: text.to_string(),
        });
    }

    let (negative, whole_digits) = match whole.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole.strip_prefix('+').unwrap_or(whole)),
    };
    let whole_part = parse_digits(text, whole_digits)?;
    let fraction_part = parse_digits(text, fraction)?;

    let denominator = num_traits::pow(BigInt::from(10u8), fraction.len());
    let magnitude = whole_part * &denominator + fraction_part;
    let numerator = if negative { -magnitude } else { magnitude };
    Ok(BigRational::new(numerator, denominator))
}

/// Unsigned digit run; empty means zero.
fn parse_digits(text: &str, digits: &str) -> Result<BigInt, FactorError> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(text));
    }
    BigInt::from_str(digits).map_err(|_| invalid(text))
}

fn parse_integer(text: &str, component: &str) -> Result<BigInt, FactorError> {
    BigInt::from_str(component.trim()).map_err(|_| invalid(text))
}

fn invalid(text: &str) -> FactorError {
    FactorError::InvalidNumber {
        text: text.to_string(),
    }
}
