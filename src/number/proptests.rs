use super::*;
use proptest::prelude::*;

fn arb_bigint() -> impl Strategy<Value = BigInt> {
    any::<i64>().prop_map(BigInt::from)
}

fn arb_nonzero_bigint() -> impl Strategy<Value = BigInt> {
    any::<i64>()
        .prop_filter("nonzero", |n| *n != 0)
        .prop_map(BigInt::from)
}

proptest! {
    #[test]
    fn rational_construction_always_normalizes_to_a_positive_denominator(
        num in arb_bigint(),
        den in arb_nonzero_bigint(),
    ) {
        let v = NumberValue::rational(num, den);
        if let NumberValue::Rational(r) = v {
            prop_assert!(r.denom() > &BigInt::from(0));
        }
    }

    #[test]
    fn ordering_is_consistent_with_partial_eq(a in arb_bigint(), b in arb_bigint()) {
        let x = NumberValue::Integer(a);
        let y = NumberValue::Integer(b);
        prop_assert_eq!(x == y, x.cmp(&y) == Ordering::Equal);
    }

    #[test]
    fn big_pow_agrees_with_iterated_multiplication(base in -20i64..20, exp in 0u64..12) {
        let base = BigInt::from(base);
        let mut expected = BigInt::from(1);
        for _ in 0..exp {
            expected *= &base;
        }
        prop_assert_eq!(big_pow(&base, exp), expected);
    }

    #[test]
    fn double_construction_is_never_exact(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let v = NumberValue::double(f);
        prop_assert!(!v.is_exact());
    }
}
