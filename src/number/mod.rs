//! The exact numeric domain: [`NumberValue`] and the stable tag used to order
//! and diagnose its variants.
mod tag;


#[cfg(test)]
mod proptests;

pub use tag::NumberTag;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

/// A number held in one of the three exact/inexact forms the evaluator and
/// projector agree on.
///
/// `Rational` is always normalized: [`num_rational::Ratio`] reduces to lowest
/// terms and canonicalizes the sign into the numerator on construction, so a
/// `NumberValue::Rational` can never be observed with a non-positive
/// denominator or a non-trivial common factor.
#[derive(Clone, Debug)]
pub enum NumberValue {
    Integer(BigInt),
    Rational(BigRational),
    Double(f64),
}

impl NumberValue {
    /// Build an integer value from any type [`BigInt`] accepts `From` for.
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Self::Integer(n.into())
    }

    /// Build a normalized rational from a numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero, mirroring [`num_rational::Ratio::new`]. Callers
    /// on the division path must check for zero themselves and surface
    /// [`crate::error::NumericError::DivisionByZero`] instead of reaching here.
    #[must_use]
    pub fn rational(num: BigInt, den: BigInt) -> Self {
        Self::Rational(BigRational::new(num, den))
    }

    #[must_use]
    pub const fn double(n: f64) -> Self {
        Self::Double(n)
    }

    #[must_use]
    pub const fn tag(&self) -> NumberTag {
        match self {
            Self::Integer(_) => NumberTag::Integer,
            Self::Rational(_) => NumberTag::Rational,
            Self::Double(_) => NumberTag::Double,
        }
    }

    #[must_use]
    pub const fn is_exact(&self) -> bool {
        !matches!(self, Self::Double(_))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Rational(r) => r.is_zero(),
            Self::Double(d) => *d == 0.0,
        }
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_negative(),
            Self::Rational(r) => r.is_negative(),
            Self::Double(d) => d.is_sign_negative() && *d != 0.0,
        }
    }

    /// Widen this value to `f64`. Used only at the `Double`-promotion seam in
    /// the evaluator; never called on a path that must stay exact.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        match self {
            Self::Integer(n) => n.to_f64().unwrap_or(f64::NAN),
            Self::Rational(r) => r
                .numer()
                .to_f64()
                .zip(r.denom().to_f64())
                .map_or(f64::NAN, |(n, d)| n / d),
            Self::Double(d) => *d,
        }
    }

    /// True if this value is exact and has an integral value (a bare
    /// `Integer`, or a `Rational` whose denominator is 1).
    #[must_use]
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Rational(r) => r.is_integer(),
            Self::Double(_) => false,
        }
    }

    /// Convert an integral exact value into its `BigInt`, if it is one.
    #[must_use]
    pub fn as_integral_bigint(&self) -> Option<BigInt> {
        match self {
            Self::Integer(n) => Some(n.clone()),
            Self::Rational(r) if r.is_integer() => Some(r.numer().clone()),
            _ => None,
        }
    }
}

/// Exact exponentiation of a `BigInt` base to a non-negative `u64` power by
/// repeated squaring. Shared by the decimal parser (powers of ten) and the
/// evaluator's `Exp` operator.
#[must_use]
pub(crate) fn big_pow(base: &BigInt, mut exp: u64) -> BigInt {
    let mut result = BigInt::from(1);
    let mut base = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result *= &base;
        }
        base = &base * &base;
        exp >>= 1;
    }
    result
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Double(d) => write!(f, "{d}"),
        }
    }
}

impl PartialEq for NumberValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumberValue {}

/// Canonical ordering across the whole domain: the stable tag ranks first
/// (`Integer < Rational < Double`), payload breaks ties within a single
/// variant. Mixed-variant comparisons are rank-only, so e.g. every `Integer`
/// orders before every `Rational` regardless of magnitude.
impl PartialOrd for NumberValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumberValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = self.tag().cmp(&other.tag());
        if rank != Ordering::Equal {
            return rank;
        }
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Double(a), Self::Double(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            _ => unreachable!("equal tags imply the same variant"),
        }
    }
}
