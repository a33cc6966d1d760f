use super::*;
use crate::ast::Expr;
use proptest::prelude::*;

fn no_bindings(_: &str) -> Option<NumberValue> {
    None
}

fn arb_exact_literal() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<i32>().prop_map(|n| Expr::literal(NumberValue::integer(n))),
        (any::<i32>(), 1i32..1000)
            .prop_map(|(n, d)| Expr::literal(NumberValue::rational(BigInt::from(n), BigInt::from(d)))),
    ]
}

proptest! {
    #[test]
    fn ring_operators_over_exact_operands_never_produce_a_double(
        left in arb_exact_literal(),
        right in arb_exact_literal(),
        op in prop_oneof![
            Just(BinaryOp::Plus),
            Just(BinaryOp::Minus),
            Just(BinaryOp::Times),
        ],
    ) {
        let expr = Expr::binary(op, left, right);
        let (value, _) = eval(&expr, &no_bindings).unwrap();
        prop_assert!(value.is_exact());
    }

    #[test]
    fn divide_over_nonzero_exact_operands_never_produces_a_double(
        left in arb_exact_literal(),
        numer in any::<i32>(),
        denom in 1i32..1000,
    ) {
        prop_assume!(numer != 0);
        let right = Expr::literal(NumberValue::rational(BigInt::from(numer), BigInt::from(denom)));
        let expr = Expr::binary(BinaryOp::Divide, left, right);
        let (value, declared) = eval(&expr, &no_bindings).unwrap();
        prop_assert!(value.is_exact());
        prop_assert_eq!(declared, DeclaredType::Decimal);
    }

    #[test]
    fn floor_of_an_exact_value_is_always_an_integer_variant(
        n in any::<i32>(),
        d in 1i32..1000,
    ) {
        let expr = Expr::unary(UnaryOp::Floor, Expr::literal(NumberValue::rational(BigInt::from(n), BigInt::from(d))));
        let (value, declared) = eval(&expr, &no_bindings).unwrap();
        prop_assert_eq!(declared, DeclaredType::Integer);
        prop_assert!(matches!(value, NumberValue::Integer(_)));
    }
}
