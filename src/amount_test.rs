use super::*;

// =============================================================================
// parsing
// =============================================================================

#[test]
fn parse_whole_number() {
    assert_eq!("50".parse::<Amount>().unwrap(), Amount::from_whole(50));
}

#[test]
fn parse_two_decimals() {
    assert_eq!("1240.50".parse::<Amount>().unwrap(), Amount::from_cents(124_050));
}

#[test]
fn parse_single_decimal_is_tenths() {
    assert_eq!("5.5".parse::<Amount>().unwrap(), Amount::from_cents(550));
}

#[test]
fn parse_leading_dot_and_trailing_dot() {
    assert_eq!(".25".parse::<Amount>().unwrap(), Amount::from_cents(25));
    assert_eq!("7.".parse::<Amount>().unwrap(), Amount::from_whole(7));
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!("  10.00 ".parse::<Amount>().unwrap(), Amount::from_whole(10));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!("".parse::<Amount>(), Err(AmountError::Empty));
    assert_eq!("-3".parse::<Amount>(), Err(AmountError::Negative));
    assert!(matches!("abc".parse::<Amount>(), Err(AmountError::Invalid(_))));
    assert!(matches!(".".parse::<Amount>(), Err(AmountError::Invalid(_))));
    assert!(matches!("1.2.3".parse::<Amount>(), Err(AmountError::Invalid(_))));
    assert!(matches!("0.001".parse::<Amount>(), Err(AmountError::TooPrecise(_))));
}

#[test]
fn parse_overflow_is_reported() {
    assert_eq!("99999999999999999999".parse::<Amount>(), Err(AmountError::Overflow));
}

// =============================================================================
// display + serde
// =============================================================================

#[test]
fn display_pads_cents() {
    assert_eq!(Amount::from_cents(2005).to_string(), "20.05");
    assert_eq!(Amount::ZERO.to_string(), "0.00");
}

#[test]
fn serializes_as_decimal_string() {
    let json = serde_json::to_string(&Amount::from_cents(5000)).unwrap();
    assert_eq!(json, "\"50.00\"");
}

#[test]
fn deserializes_from_numbers_and_strings() {
    let a: Amount = serde_json::from_str("10").unwrap();
    let b: Amount = serde_json::from_str("2.5").unwrap();
    let c: Amount = serde_json::from_str("\"22.00\"").unwrap();
    assert_eq!(a, Amount::from_whole(10));
    assert_eq!(b, Amount::from_cents(250));
    assert_eq!(c, Amount::from_whole(22));
}

#[test]
fn deserialize_rejects_negative_numbers() {
    assert!(serde_json::from_str::<Amount>("-1").is_err());
    assert!(serde_json::from_str::<Amount>("-0.5").is_err());
}

// =============================================================================
// progress_percent
// =============================================================================

#[test]
fn progress_floors_the_ratio() {
    let pct = progress_percent(Amount::from_whole(12_450), Amount::from_whole(15_000));
    assert_eq!(pct, 83);
}

#[test]
fn progress_caps_at_one_hundred() {
    assert_eq!(progress_percent(Amount::from_whole(9000), Amount::from_whole(8000)), 100);
}

#[test]
fn progress_zero_target_is_complete() {
    assert_eq!(progress_percent(Amount::ZERO, Amount::ZERO), 100);
}

#[test]
fn is_whole_checks_fraction() {
    assert!(Amount::from_whole(2).is_whole());
    assert!(!Amount::from_cents(250).is_whole());
}
