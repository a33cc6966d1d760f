use super::*;
use proptest::prelude::*;

fn arb_plain_integer_token() -> impl Strategy<Value = String> {
    (any::<bool>(), 1u64..10_000_000_000_000_000_000).prop_map(|(negative, digits)| {
        if negative && digits != 0 {
            format!("-{digits}")
        } else {
            digits.to_string()
        }
    })
}

proptest! {
    #[test]
    fn plain_integer_tokens_parse_exactly(token in arb_plain_integer_token()) {
        let v = parse_number_token(&token).unwrap();
        prop_assert_eq!(v.tag(), crate::number::NumberTag::Integer);
        prop_assert_eq!(v.to_string(), token.trim_start_matches('+').to_string());
    }

    #[test]
    fn decimal_tokens_never_land_on_double(
        int_part in 0u64..1_000_000,
        frac_digit in 0u32..10,
    ) {
        let token = format!("{int_part}.{frac_digit}");
        let v = parse_number_token(&token).unwrap();
        prop_assert!(v.is_exact());
        prop_assert_ne!(v.tag(), crate::number::NumberTag::Double);
    }

    #[test]
    fn reparsing_a_projected_terminating_decimal_round_trips(
        int_part in 0u64..10_000,
        frac_digit in 1u32..100,
    ) {
        let token = format!("{int_part}.{frac_digit:02}");
        let v = parse_number_token(&token).unwrap();
        let wire = crate::project::project(&v, crate::declared_type::DeclaredType::Decimal).unwrap();
        let mut rendered = String::new();
        crate::emit::emit(&wire, &mut rendered).unwrap();
        let reparsed = parse_number_token(&rendered).unwrap();
        prop_assert_eq!(reparsed, v);
    }
}
