use super::*;

#[test]
fn parse_price_limit_accepts_formatted_numbers() {
    assert_eq!(parse_price_limit("1500"), Some(1500));
    assert_eq!(parse_price_limit("$1,500"), Some(1500));
}

#[test]
fn parse_price_limit_blank_or_garbage_is_unlimited() {
    assert_eq!(parse_price_limit(""), None);
    assert_eq!(parse_price_limit("cheap"), None);
    assert_eq!(parse_price_limit("-5"), None);
}

#[test]
fn parse_min_bedrooms_any_is_none() {
    assert_eq!(parse_min_bedrooms("any"), None);
    assert_eq!(parse_min_bedrooms("0"), None);
    assert_eq!(parse_min_bedrooms("3"), Some(3));
}

#[test]
fn results_label_pluralizes() {
    assert_eq!(results_label(1), "1 home found");
    assert_eq!(results_label(0), "0 homes found");
    assert_eq!(results_label(8), "8 homes found");
}
