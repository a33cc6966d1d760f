//! The typed projector: turns a `(NumberValue, DeclaredType)` pair into a
//! digit-faithful [`WireForm`] the emitter writes without ever touching a
//! binary-floating formatter (except for the `Double` case, which is the one
//! admissible float egress).

#[cfg(test)]
mod proptests;

use crate::declared_type::DeclaredType;
use crate::error::{NumericError, NumericResult};
use crate::number::{big_pow, NumberValue};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Minimum fractional-digit floor for non-terminating decimal renderings.
/// A compile-time constant per the design notes — never mutable module
/// state.
pub const DECIMAL_DIGITS: u32 = 20;

/// Intermediate, digit-faithful form between the projector and the emitter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WireForm {
    /// Arbitrary-length decimal integer: `negative` plus digits with no
    /// leading zeros (other than the single digit `"0"`).
    Int { negative: bool, digits: String },
    /// Arbitrary-length decimal: `negative`, the digits before the point, and
    /// the digits after it (`frac` is empty for a terminating-at-zero
    /// decimal, never truncated mid-rendering).
    Dec {
        negative: bool,
        int_part: String,
        frac_part: String,
    },
    /// A finite `f64`, rendered via Rust's shortest-round-trip `Display`.
    Double(f64),
}

/// Project `value` under `declared`, using the default [`DECIMAL_DIGITS`]
/// precision floor.
pub fn project(value: &NumberValue, declared: DeclaredType) -> NumericResult<WireForm> {
    project_with_precision(value, declared, DECIMAL_DIGITS)
}

/// Project `value` under `declared`, with an explicit precision floor for the
/// non-terminating decimal case. Exposed for callers (tests, or a future
/// configuration layer) that need a non-default floor without going through a
/// mutable global.
pub fn project_with_precision(
    value: &NumberValue,
    declared: DeclaredType,
    min_fractional_digits: u32,
) -> NumericResult<WireForm> {
    match (value, declared) {
        (NumberValue::Integer(n), _) => Ok(wire_int(n)),

        (NumberValue::Rational(r), DeclaredType::Decimal) => {
            Ok(project_rational_decimal(r.numer(), r.denom(), min_fractional_digits))
        }

        (NumberValue::Rational(r), DeclaredType::Integer) => {
            if r.is_integer() {
                Ok(wire_int(r.numer()))
            } else {
                Err(NumericError::type_error("project", "integer-valued rational"))
            }
        }

        (NumberValue::Double(d), DeclaredType::Double | DeclaredType::Float) => {
            if d.is_finite() {
                Ok(WireForm::Double(*d))
            } else {
                Err(NumericError::numeric_fault("non-finite double has no JSON number form"))
            }
        }

        (NumberValue::Rational(_), DeclaredType::Double | DeclaredType::Float) => {
            Err(NumericError::type_mismatch("exact rational", declared.as_xsd_str()))
        }
        (NumberValue::Double(_), DeclaredType::Integer | DeclaredType::Decimal) => {
            Err(NumericError::type_mismatch(declared.as_xsd_str(), "double"))
        }
    }
}

fn wire_int(n: &BigInt) -> WireForm {
    let negative = n.is_negative();
    let digits = n.magnitude().to_string();
    WireForm::Int { negative, digits }
}

/// Minimal `k` such that `den` divides `10^k`, or `None` if `den` has a prime
/// factor other than 2 or 5 (a non-terminating decimal expansion).
fn terminating_scale(den: &BigInt) -> Option<u32> {
    let mut remaining = den.clone();
    let two = BigInt::from(2);
    let five = BigInt::from(5);

    let mut twos = 0u32;
    while (&remaining % &two).is_zero() {
        remaining /= &two;
        twos += 1;
    }
    let mut fives = 0u32;
    while (&remaining % &five).is_zero() {
        remaining /= &five;
        fives += 1;
    }

    if remaining == BigInt::from(1) {
        Some(twos.max(fives))
    } else {
        None
    }
}

fn project_rational_decimal(num: &BigInt, den: &BigInt, min_fractional_digits: u32) -> WireForm {
    let negative = num.is_negative();
    let abs_num: BigInt = num.magnitude().clone().into();
    let den = den.clone();

    if let Some(k) = terminating_scale(&den) {
        let scaled = (&abs_num * big_pow(&BigInt::from(10), u64::from(k))) / &den;
        let (int_part, frac_part) = split_scaled(&scaled, k);
        return WireForm::Dec {
            negative,
            int_part,
            frac_part,
        };
    }

    let int_part = (&abs_num / &den).to_string();
    let mut remainder = &abs_num % &den;
    let ten = BigInt::from(10);
    let mut frac_part = String::with_capacity(min_fractional_digits as usize);
    for _ in 0..min_fractional_digits {
        remainder *= &ten;
        let digit = &remainder / &den;
        frac_part.push_str(&digit.to_string());
        remainder %= &den;
    }

    WireForm::Dec {
        negative,
        int_part,
        frac_part,
    }
}

/// Split an exact `scaled = int_part * 10^k + frac_part` integer back into
/// its two digit strings, zero-padding the fractional side to exactly `k`
/// digits.
fn split_scaled(scaled: &BigInt, k: u32) -> (String, String) {
    if k == 0 {
        return (scaled.to_string(), String::new());
    }
    let digits = scaled.to_string();
    let k = k as usize;
    if digits.len() > k {
        let split_at = digits.len() - k;
        (digits[..split_at].to_string(), digits[split_at..].to_string())
    } else {
        let pad = "0".repeat(k - digits.len());
        ("0".to_string(), format!("{pad}{digits}"))
    }
}
