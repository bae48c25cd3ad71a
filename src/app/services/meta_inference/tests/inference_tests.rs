use crate::app::models::meta::MetaType;
use crate::app::services::meta_inference::{infer_value, parse_date};
use chrono::NaiveDate;

fn infer(raw: &str) -> (MetaType, String) {
    infer_value(raw)
}

#[test]
fn test_integers_are_canonicalized() {
    assert_eq!(infer("007"), (MetaType::Integer, "7".to_string()));
    assert_eq!(infer("+12"), (MetaType::Integer, "12".to_string()));
    assert_eq!(infer(" -3 "), (MetaType::Integer, "-3".to_string()));
    assert_eq!(infer("2147483647"), (MetaType::Integer, "2147483647".to_string()));
}

#[test]
fn test_out_of_range_integer_becomes_double() {
    assert_eq!(
        infer("2147483648"),
        (MetaType::Double, "2.147483648E9".to_string())
    );
}

#[test]
fn test_decimals() {
    assert_eq!(infer("3,14"), (MetaType::Double, "3.14".to_string()));
    assert_eq!(infer("3.14"), (MetaType::Double, "3.14".to_string()));
    assert_eq!(infer("2.50"), (MetaType::Double, "2.5".to_string()));
    assert_eq!(infer("1e-5"), (MetaType::Double, "1.0E-5".to_string()));
    assert_eq!(infer(".5"), (MetaType::Double, "0.5".to_string()));
}

#[test]
fn test_day_month_year_dates() {
    assert_eq!(infer("31.12.2020"), (MetaType::Date, "31.12.2020".to_string()));
    assert_eq!(infer("1/2/2021"), (MetaType::Date, "01.02.2021".to_string()));
    assert_eq!(infer("05-11-1999"), (MetaType::Date, "05.11.1999".to_string()));
}

#[test]
fn test_long_us_dates_use_day_month_year_output() {
    assert_eq!(
        infer("January 5, 2021"),
        (MetaType::Date, "05.01.2021".to_string())
    );
    assert_eq!(
        infer("December 24, 2019"),
        (MetaType::Date, "24.12.2019".to_string())
    );
}

#[test]
fn test_invalid_dates_are_strings() {
    assert_eq!(infer("31.02.2020").0, MetaType::String);
    assert_eq!(infer("2020-12-31").0, MetaType::String);
}

#[test]
fn test_strings_are_kept_verbatim() {
    assert_eq!(infer("hello"), (MetaType::String, "hello".to_string()));
    assert_eq!(
        infer("  padded text "),
        (MetaType::String, "  padded text ".to_string())
    );
    assert_eq!(infer(""), (MetaType::String, String::new()));
    assert_eq!(infer("inf").0, MetaType::String);
}

#[test]
fn test_parse_date() {
    assert_eq!(
        parse_date("03.04.2022"),
        NaiveDate::from_ymd_opt(2022, 4, 3)
    );
    assert_eq!(parse_date("text"), None);
}
