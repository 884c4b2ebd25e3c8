use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::*;
use crate::error::FormatError;
use crate::pattern::compile;

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDateTime::new(
        NaiveDate::from_ymd_opt(y, mo, d).unwrap(),
        NaiveTime::from_hms_opt(h, mi, s).unwrap(),
    )
}

fn render(pattern: &str, at: NaiveDateTime) -> String {
    format_datetime(at, &compile(pattern), &DateTimeLiterals::default()).unwrap()
}

#[test]
fn date_fields() {
    // Tuesday 2013-02-12.
    let at = instant(2013, 2, 12, 4, 30, 0);

    // (pattern, expected)
    let cases: Vec<(&str, &str)> = vec![
        ("yyyy-MM-dd", "2013-02-12"),
        ("yy", "13"),
        ("y", "2013"),
        ("d", "12"),
        ("dd", "12"),
        ("D", "43"),
        ("M/d/yy", "2/12/13"),
        ("MMM d, y", "Feb 12, 2013"),
        ("MMMM d, y", "February 12, 2013"),
        ("MMMMM", "F"),
        ("EEEE, MMMM d", "Tuesday, February 12"),
        ("E", "Tue"),
        ("e", "3"),
        ("cccc", "Tuesday"),
        ("QQQ", "Q1"),
        ("QQQQ", "1st quarter"),
        ("q", "1"),
        ("G y", "AD 2013"),
        ("W", "2"),
        ("F", "2"),
    ];
    for (pattern, expected) in cases {
        assert_eq!(render(pattern, at), expected, "pattern `{pattern}`");
    }
}

#[test]
fn hour_fields_at_the_boundaries() {
    let midnight = instant(2013, 2, 12, 0, 0, 0);
    let noon = instant(2013, 2, 12, 12, 0, 0);
    let evening = instant(2013, 2, 12, 21, 5, 7);

    // (pattern, at, expected)
    let cases: Vec<(&str, NaiveDateTime, &str)> = vec![
        ("HH", midnight, "00"),
        ("h", midnight, "12"),
        ("K", midnight, "0"),
        ("k", midnight, "24"),
        ("a", midnight, "AM"),
        ("HH", noon, "12"),
        ("h", noon, "12"),
        ("K", noon, "0"),
        ("k", noon, "12"),
        ("a", noon, "PM"),
        ("H:mm:ss", evening, "21:05:07"),
        ("hh:mm a", evening, "09:05 PM"),
        ("KK", evening, "09"),
    ];
    for (pattern, at, expected) in cases {
        assert_eq!(render(pattern, at), expected, "pattern `{pattern}`");
    }
}

#[test]
fn two_digit_year_truncates() {
    assert_eq!(render("yy", instant(2013, 2, 12, 0, 0, 0)), "13");
    assert_eq!(render("yy", instant(1999, 2, 12, 0, 0, 0)), "99");
    assert_eq!(render("yy", instant(2005, 2, 12, 0, 0, 0)), "05");
    assert_eq!(render("yyyyy", instant(2013, 2, 12, 0, 0, 0)), "02013");
}

#[test]
fn fractional_seconds_truncate_and_pad() {
    let at = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2013, 2, 12).unwrap(),
        NaiveTime::from_hms_milli_opt(0, 0, 1, 250).unwrap(),
    );
    assert_eq!(render("ss.S", at), "01.2");
    assert_eq!(render("ss.SSS", at), "01.250");
    assert_eq!(render("SSSSSS", at), "250000");
}

#[test]
fn literal_text_passes_through() {
    let at = instant(2013, 2, 12, 15, 0, 0);
    assert_eq!(render("HH 'o''clock'", at), "15 o'clock");
    assert_eq!(render("yyyy-MM-dd'T'HH:mm:ss", at), "2013-02-12T15:00:00");
}

#[test]
fn era_before_epoch() {
    let at = instant(-43, 3, 15, 0, 0, 0);
    assert_eq!(render("G", at), "BC");
    assert_eq!(render("GGGG", at), "Before Christ");
}

#[test]
fn unsupported_known_symbols_degrade_to_empty() {
    let at = instant(2013, 2, 12, 4, 30, 0);
    // Time zones are outside the single-calendar scope.
    assert_eq!(render("HH:mm z", at), "04:30 ");
    assert_eq!(render("v", at), "");
    assert_eq!(render("B", at), "");
}

#[test]
fn unknown_symbol_is_a_hard_error() {
    let at = instant(2013, 2, 12, 4, 30, 0);
    let result = format_datetime(at, &compile("yyyy-PP"), &DateTimeLiterals::default());
    assert_eq!(result, Err(FormatError::UnknownSymbol('P')));
}

#[test]
fn standalone_month_uses_its_own_table() {
    let mut literals = DateTimeLiterals::default();
    literals.months_standalone.wide[1] = "Hornung".to_string();

    let at = instant(2013, 2, 12, 0, 0, 0);
    let formatted = format_datetime(at, &compile("LLLL / MMMM"), &literals).unwrap();
    assert_eq!(formatted, "Hornung / February");
}

#[test]
fn missing_name_emits_nothing() {
    let mut literals = DateTimeLiterals::default();
    literals.eras = NameTable::default();

    let at = instant(2013, 2, 12, 0, 0, 0);
    assert_eq!(format_datetime(at, &compile("G y"), &literals).unwrap(), " 2013");
}
