use super::*;
use crate::project::WireForm;

#[test]
fn positive_integer_emits_bare_digits() {
    let wire = WireForm::Int {
        negative: false,
        digits: "42".to_string(),
    };
    assert_eq!(emit_to_string(&wire).unwrap(), "42");
}

#[test]
fn negative_integer_emits_with_leading_minus() {
    let wire = WireForm::Int {
        negative: true,
        digits: "17".to_string(),
    };
    assert_eq!(emit_to_string(&wire).unwrap(), "-17");
}

#[test]
fn arbitrary_precision_integer_addition_emits_all_digits() {
    let wire = WireForm::Int {
        negative: false,
        digits: "100000000000000000000".to_string(),
    };
    assert_eq!(emit_to_string(&wire).unwrap(), "100000000000000000000");
}

#[test]
fn large_integer_multiplication_emits_exactly() {
    let wire = WireForm::Int {
        negative: false,
        digits: "999999999998000000000001".to_string(),
    };
    assert_eq!(
        emit_to_string(&wire).unwrap(),
        "999999999998000000000001"
    );
}

#[test]
fn negative_large_integer_multiplication_emits_exactly() {
    let wire = WireForm::Int {
        negative: true,
        digits: "999999999999998000000000000001".to_string(),
    };
    assert_eq!(
        emit_to_string(&wire).unwrap(),
        "-999999999999998000000000000001"
    );
}

#[test]
fn decimal_emits_point_only_when_fractional_part_present() {
    let wire = WireForm::Dec {
        negative: false,
        int_part: "3".to_string(),
        frac_part: String::new(),
    };
    assert_eq!(emit_to_string(&wire).unwrap(), "3");
}

#[test]
fn decimal_with_fractional_digits_joins_on_a_single_dot() {
    let wire = WireForm::Dec {
        negative: false,
        int_part: "0".to_string(),
        frac_part: "33333333333333333333".to_string(),
    };
    assert_eq!(
        emit_to_string(&wire).unwrap(),
        "0.33333333333333333333"
    );
}

#[test]
fn negative_decimal_places_minus_before_everything() {
    let wire = WireForm::Dec {
        negative: true,
        int_part: "0".to_string(),
        frac_part: "5".to_string(),
    };
    assert_eq!(emit_to_string(&wire).unwrap(), "-0.5");
}

#[test]
fn double_emits_via_shortest_round_trip_display() {
    let wire = WireForm::Double(2.5);
    assert_eq!(emit_to_string(&wire).unwrap(), "2.5");
}

#[test]
fn double_emits_without_losing_exact_binary_fractions() {
    let wire = WireForm::Double(0.5);
    assert_eq!(emit_to_string(&wire).unwrap(), "0.5");
}

#[test]
fn emit_writes_into_an_existing_buffer_without_clearing_it() {
    let mut out = String::from("prefix:");
    let wire = WireForm::Int {
        negative: false,
        digits: "1".to_string(),
    };
    emit(&wire, &mut out).unwrap();
    assert_eq!(out, "prefix:1");
}
