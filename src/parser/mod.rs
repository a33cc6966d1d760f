//! Parser: lexical tokens and typed literals into [`NumberValue`].
//!
//! The hard rule this module exists to uphold: a decimal or scientific token
//! is decomposed digit-by-digit and combined with exact power-of-ten
//! arithmetic over `BigInt`. It is never routed through `f64::from_str`,
//! except for the two declared types (`xsd:double`, `xsd:float`) where that is
//! the explicitly admissible float ingress.

#[cfg(test)]
mod proptests;

use crate::declared_type::DeclaredType;
use crate::error::{NumericError, NumericResult};
use crate::number::NumberValue;
use num_bigint::BigInt;
use num_traits::One;
use std::str::FromStr;

/// Decompose a numeric lexical token into (sign, integer digits, fractional
/// digits, exponent). Validates the grammar but does no arithmetic.
struct LexicalParts<'a> {
    negative: bool,
    int_digits: &'a str,
    frac_digits: &'a str,
    exponent: i64,
}

fn split_token(token: &str) -> NumericResult<LexicalParts<'_>> {
    let bad = || NumericError::malformed(token);

    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if rest.is_empty() {
        return Err(bad());
    }

    let (mantissa, exp_str) = match rest.find(['e', 'E']) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };

    let (int_digits, frac_digits, has_dot) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..], true),
        None => (mantissa, "", false),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(bad());
    }
    if has_dot && frac_digits.is_empty() {
        return Err(bad());
    }
    if !int_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    if !frac_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }

    let exponent = match exp_str {
        None => 0,
        Some(e) => e.parse::<i64>().map_err(|_| bad())?,
    };

    Ok(LexicalParts {
        negative,
        int_digits,
        frac_digits,
        exponent,
    })
}

/// Parse a JSON-number-shaped lexical token (the exact source bytes, never a
/// value already routed through `f64`) into an exact [`NumberValue`].
///
/// A token with neither `.` nor an exponent is an [`NumberValue::Integer`].
/// Any other well-formed token is an exact [`NumberValue::Rational`]: per the
/// data model's invariant, a rational that happens to reduce to an integral
/// value (e.g. `"1.5e1"` => 15) is *not* coerced back to `Integer` — it stays
/// tagged `Rational` because that is the form the parser produced it in.
pub fn parse_number_token(token: &str) -> NumericResult<NumberValue> {
    let parts = split_token(token)?;

    if parts.frac_digits.is_empty() && parts.exponent == 0 {
        let digits = if parts.int_digits.is_empty() {
            "0"
        } else {
            parts.int_digits
        };
        let mut n = BigInt::from_str(digits).map_err(|_| NumericError::malformed(token))?;
        if parts.negative {
            n = -n;
        }
        return Ok(NumberValue::Integer(n));
    }

    let mut digits = String::with_capacity(parts.int_digits.len() + parts.frac_digits.len());
    digits.push_str(parts.int_digits);
    digits.push_str(parts.frac_digits);
    if digits.is_empty() {
        digits.push('0');
    }

    let mut mantissa = BigInt::from_str(&digits).map_err(|_| NumericError::malformed(token))?;
    if parts.negative {
        mantissa = -mantissa;
    }

    let scale = parts.frac_digits.len() as i64;
    let effective_exp = parts.exponent - scale;

    let ten = BigInt::from(10);
    let (num, den) = if effective_exp >= 0 {
        let factor = crate::number::big_pow(&ten, effective_exp as u64);
        (mantissa * factor, BigInt::one())
    } else {
        let factor = crate::number::big_pow(&ten, (-effective_exp) as u64);
        (mantissa, factor)
    };

    Ok(NumberValue::rational(num, den))
}

/// Parse a JSON leaf value as it appears at the arithmetic-AST input
/// boundary: either a bare JSON number (exact token form, via
/// `serde_json`'s `arbitrary_precision` feature so the lexical bytes survive
/// intact) or a typed literal object `{"@type": T, "@value": V}`.
pub fn parse_json_leaf(value: &serde_json::Value) -> NumericResult<(NumberValue, DeclaredType)> {
    match value {
        serde_json::Value::Number(n) => {
            let token = n.to_string();
            let nv = parse_number_token(&token)?;
            let declared = if token.contains('.') || token.contains(['e', 'E']) {
                DeclaredType::Decimal
            } else {
                DeclaredType::Integer
            };
            Ok((nv, declared))
        }
        serde_json::Value::Object(_) => parse_typed_literal(value),
        other => Err(NumericError::malformed(other.to_string())),
    }
}

/// Parse `{"@type": T, "@value": V}` where `T` is a recognized XSD type and
/// `V` is either a string or a JSON number.
pub fn parse_typed_literal(value: &serde_json::Value) -> NumericResult<(NumberValue, DeclaredType)> {
    let obj = value
        .as_object()
        .ok_or_else(|| NumericError::malformed(value.to_string()))?;

    let type_str = obj
        .get("@type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| NumericError::malformed(value.to_string()))?;
    let declared: DeclaredType = type_str.parse()?;

    let raw = obj
        .get("@value")
        .ok_or_else(|| NumericError::malformed(value.to_string()))?;

    let lexical = match raw {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        other => return Err(NumericError::malformed(other.to_string())),
    };

    let nv = parse_typed_lexical(&lexical, declared)?;
    Ok((nv, declared))
}

/// Parse a lexical string under a declared XSD type, enforcing the type's
/// own admissibility rules (e.g. `xsd:integer` rejects a fractional part).
pub fn parse_typed_lexical(lexical: &str, declared: DeclaredType) -> NumericResult<NumberValue> {
    match declared {
        DeclaredType::Double | DeclaredType::Float => {
            let f: f64 = lexical
                .parse()
                .map_err(|_| NumericError::malformed(lexical))?;
            Ok(NumberValue::Double(f))
        }
        DeclaredType::Integer => {
            let nv = parse_number_token(lexical)?;
            match nv {
                NumberValue::Integer(_) => Ok(nv),
                NumberValue::Rational(r) if r.is_integer() => {
                    Ok(NumberValue::Integer(r.numer().clone()))
                }
                _ => Err(NumericError::type_mismatch("xsd:integer", lexical)),
            }
        }
        DeclaredType::Decimal => parse_number_token(lexical),
    }
}
