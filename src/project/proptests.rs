use super::*;
use crate::number::NumberValue;
use proptest::prelude::*;

fn arb_fraction() -> impl Strategy<Value = (i64, i64)> {
    (any::<i64>(), 1i64..1_000_000).prop_map(|(n, d)| (n, d))
}

proptest! {
    #[test]
    fn fractional_digit_count_never_drops_below_the_precision_floor(
        (num, den) in arb_fraction(),
        floor in 1u32..64,
    ) {
        let v = NumberValue::rational(BigInt::from(num), BigInt::from(den));
        if let NumberValue::Rational(r) = &v {
            let wire = project_with_precision(&v, DeclaredType::Decimal, floor).unwrap();
            if let WireForm::Dec { frac_part, .. } = wire {
                if terminating_scale(r.denom()).is_none() {
                    prop_assert_eq!(frac_part.len(), floor as usize);
                }
            } else {
                prop_assert!(false, "rational must project to Dec");
            }
        }
    }

    #[test]
    fn integer_projection_is_lossless_for_any_magnitude(n in any::<i128>()) {
        let v = NumberValue::Integer(BigInt::from(n));
        let wire = project(&v, DeclaredType::Integer).unwrap();
        if let WireForm::Int { negative, digits } = wire {
            prop_assert_eq!(negative, n < 0);
            let expected = BigInt::from(n).magnitude().to_string();
            prop_assert_eq!(digits, expected);
        } else {
            prop_assert!(false, "integer must project to Int");
        }
    }

    #[test]
    fn terminating_decimals_never_hit_the_truncating_path(
        int_part in 0i64..1_000_000,
        frac_digit in 1u32..100,
    ) {
        let token = format!("{int_part}.{frac_digit:02}");
        let v = crate::parser::parse_number_token(&token).unwrap();
        if let NumberValue::Rational(r) = &v {
            prop_assert!(terminating_scale(r.denom()).is_some());
        }
    }
}
