//! The arithmetic evaluator: reduces an [`Expr`] AST over the exact numeric
//! domain, promoting to `Double` only when an input already is one.

#[cfg(test)]
mod proptests;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::declared_type::DeclaredType;
use crate::error::{NumericError, NumericResult};
use crate::number::{big_pow, NumberValue};
use num_bigint::BigInt;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Resolves a named binding to its already-materialized value. Supplied by
/// the caller; the evaluator has no notion of variable scoping itself.
pub trait BindingResolver {
    fn resolve(&self, name: &str) -> Option<NumberValue>;
}

impl<F: Fn(&str) -> Option<NumberValue>> BindingResolver for F {
    fn resolve(&self, name: &str) -> Option<NumberValue> {
        self(name)
    }
}

/// Evaluate `expr`, resolving bindings through `resolver`.
///
/// Subexpressions are reduced left-operand-first, right-operand-second,
/// recursively, so the first-encountered error (in that order) is the one
/// surfaced to the caller.
pub fn eval(expr: &Expr, resolver: &impl BindingResolver) -> NumericResult<(NumberValue, DeclaredType)> {
    match expr {
        Expr::Literal(v) => Ok((v.clone(), declared_type_of(v))),
        Expr::Binding(name) => {
            let v = resolver
                .resolve(name)
                .ok_or_else(|| NumericError::malformed(format!("unbound variable: {name}")))?;
            let declared = declared_type_of(&v);
            Ok((v, declared))
        }
        Expr::Binary { op, left, right } => {
            let (lv, _) = eval(left, resolver)?;
            let (rv, _) = eval(right, resolver)?;
            eval_binary(*op, lv, rv)
        }
        Expr::Unary { op, argument } => {
            let (v, _) = eval(argument, resolver)?;
            eval_unary(*op, v)
        }
    }
}

/// The declared type a bare literal/binding carries when it has not passed
/// through an operator: `Integer` => `xsd:integer`, `Rational` =>
/// `xsd:decimal`, `Double` => `xsd:double`.
fn declared_type_of(v: &NumberValue) -> DeclaredType {
    match v {
        NumberValue::Integer(_) => DeclaredType::Integer,
        NumberValue::Rational(_) => DeclaredType::Decimal,
        NumberValue::Double(_) => DeclaredType::Double,
    }
}

fn as_rational(v: &NumberValue) -> BigRational {
    match v {
        NumberValue::Integer(n) => BigRational::from_integer(n.clone()),
        NumberValue::Rational(r) => r.clone(),
        NumberValue::Double(_) => unreachable!("caller must not promote Double to Rational"),
    }
}

fn eval_binary(op: BinaryOp, lv: NumberValue, rv: NumberValue) -> NumericResult<(NumberValue, DeclaredType)> {
    match op {
        BinaryOp::Plus => eval_ring(lv, rv, |a, b| a + b, |a, b| a + b, |a, b| a + b),
        BinaryOp::Minus => eval_ring(lv, rv, |a, b| a - b, |a, b| a - b, |a, b| a - b),
        BinaryOp::Times => eval_ring(lv, rv, |a, b| a * b, |a, b| a * b, |a, b| a * b),
        BinaryOp::Divide => eval_divide(lv, rv),
        BinaryOp::Div => eval_div(lv, rv),
        BinaryOp::Exp => eval_exp(lv, rv),
    }
}

/// Shared implementation for `Plus`/`Minus`/`Times`: promote both operands to
/// the join of `Integer < Rational < Double`, apply the matching closure, and
/// tag the result by the domain the computation happened in.
fn eval_ring(
    lv: NumberValue,
    rv: NumberValue,
    int_op: impl Fn(BigInt, BigInt) -> BigInt,
    rat_op: impl Fn(BigRational, BigRational) -> BigRational,
    dbl_op: impl Fn(f64, f64) -> f64,
) -> NumericResult<(NumberValue, DeclaredType)> {
    Ok(match (lv, rv) {
        (NumberValue::Integer(a), NumberValue::Integer(b)) => {
            let r = int_op(a, b);
            (NumberValue::Integer(r), DeclaredType::Integer)
        }
        (NumberValue::Double(a), b) => (
            NumberValue::Double(dbl_op(a, b.to_f64_lossy())),
            DeclaredType::Double,
        ),
        (a, NumberValue::Double(b)) => (
            NumberValue::Double(dbl_op(a.to_f64_lossy(), b)),
            DeclaredType::Double,
        ),
        (a, b) => {
            let r = rat_op(as_rational(&a), as_rational(&b));
            (NumberValue::Rational(r), DeclaredType::Decimal)
        }
    })
}

/// `Divide` always yields a `Rational` tagged `xsd:decimal` when both
/// operands are exact, even when the quotient is integral; it never collapses
/// to `Integer`. If either operand is `Double`, the result is `Double`.
fn eval_divide(lv: NumberValue, rv: NumberValue) -> NumericResult<(NumberValue, DeclaredType)> {
    match (lv, rv) {
        (NumberValue::Double(a), b) => Ok((NumberValue::Double(a / b.to_f64_lossy()), DeclaredType::Double)),
        (a, NumberValue::Double(b)) => Ok((NumberValue::Double(a.to_f64_lossy() / b), DeclaredType::Double)),
        (a, b) => {
            let b_rat = as_rational(&b);
            if b_rat.is_zero() {
                return Err(NumericError::DivisionByZero);
            }
            let r = as_rational(&a) / b_rat;
            Ok((NumberValue::Rational(r), DeclaredType::Decimal))
        }
    }
}

/// `Div` requires both operands to be integral; truncates toward zero.
fn eval_div(lv: NumberValue, rv: NumberValue) -> NumericResult<(NumberValue, DeclaredType)> {
    let a = lv
        .as_integral_bigint()
        .filter(|_| matches!(lv, NumberValue::Integer(_)))
        .ok_or_else(|| NumericError::type_error("Div", "integer"))?;
    let b = rv
        .as_integral_bigint()
        .filter(|_| matches!(rv, NumberValue::Integer(_)))
        .ok_or_else(|| NumericError::type_error("Div", "integer"))?;

    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    Ok((NumberValue::Integer(a / b), DeclaredType::Integer))
}

/// `Exp`: `y` must denote a non-negative integer for the exact path (a bare
/// `Integer`, or an integral `Rational`); a negative integer exponent over an
/// exact base yields a `Rational`. Fractional exponents over an exact base
/// are rejected (see `DESIGN.md` for the open-question resolution). A
/// `Double` base always yields a `Double` via `f64::powf`.
fn eval_exp(base: NumberValue, exp: NumberValue) -> NumericResult<(NumberValue, DeclaredType)> {
    if matches!(base, NumberValue::Double(_)) || matches!(exp, NumberValue::Double(_)) {
        return Ok((
            NumberValue::Double(base.to_f64_lossy().powf(exp.to_f64_lossy())),
            DeclaredType::Double,
        ));
    }

    let exp_int = exp
        .as_integral_bigint()
        .ok_or_else(|| NumericError::type_error("Exp", "integer exponent"))?;

    if exp_int.is_negative() {
        let positive = exp_int.magnitude_u64()?;
        match base {
            NumberValue::Integer(n) => {
                if n.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                let pow = big_pow(&n, positive);
                let r = BigRational::new(BigInt::from(1), pow);
                Ok((NumberValue::Rational(r), DeclaredType::Decimal))
            }
            NumberValue::Rational(r) => {
                if r.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                let inverted = r.recip();
                let pow = pow_rational(&inverted, positive);
                Ok((NumberValue::Rational(pow), DeclaredType::Decimal))
            }
            NumberValue::Double(_) => unreachable!("handled above"),
        }
    } else {
        let positive = exp_int.magnitude_u64()?;
        match base {
            NumberValue::Integer(n) => {
                let pow = big_pow(&n, positive);
                Ok((NumberValue::Integer(pow), DeclaredType::Integer))
            }
            NumberValue::Rational(r) => {
                let pow = pow_rational(&r, positive);
                Ok((NumberValue::Rational(pow), DeclaredType::Decimal))
            }
            NumberValue::Double(_) => unreachable!("handled above"),
        }
    }
}

fn pow_rational(base: &BigRational, exp: u64) -> BigRational {
    let num = big_pow(base.numer(), exp);
    let den = big_pow(base.denom(), exp);
    BigRational::new(num, den)
}

trait MagnitudeU64 {
    fn magnitude_u64(&self) -> NumericResult<u64>;
}

impl MagnitudeU64 for BigInt {
    fn magnitude_u64(&self) -> NumericResult<u64> {
        self.abs()
            .to_u64()
            .ok_or_else(|| NumericError::numeric_fault("exponent magnitude too large"))
    }
}

fn eval_unary(op: UnaryOp, v: NumberValue) -> NumericResult<(NumberValue, DeclaredType)> {
    match op {
        UnaryOp::Floor => eval_floor(v),
    }
}

/// `Floor` toward negative infinity. `Integer` passes through unchanged;
/// `Rational` uses `div_floor`; `Double` truncates via `f64::floor`, faulting
/// on `NaN`/infinite input since those have no integer representation.
fn eval_floor(v: NumberValue) -> NumericResult<(NumberValue, DeclaredType)> {
    match v {
        NumberValue::Integer(n) => Ok((NumberValue::Integer(n), DeclaredType::Integer)),
        NumberValue::Rational(r) => {
            let floored = r.numer().div_floor(r.denom());
            Ok((NumberValue::Integer(floored), DeclaredType::Integer))
        }
        NumberValue::Double(d) => {
            if !d.is_finite() {
                return Err(NumericError::numeric_fault("floor of non-finite double"));
            }
            let floored = d.floor();
            let big = BigInt::from(floored as i128);
            Ok((NumberValue::Integer(big), DeclaredType::Integer))
        }
    }
}
