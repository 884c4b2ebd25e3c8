//! Pattern-driven date/time formatting.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::FormatError;
use crate::pattern::{CompiledPattern, PatternToken};

use super::literals::{DateTimeLiterals, NameTable, NameWidth};

/// Every symbol of the pattern alphabet, implemented or not. A field symbol
/// outside this set means the pattern is corrupt.
const KNOWN_SYMBOLS: &str = "GyYuUQqMLlwWdDFgEecabBhHKkjJmsSAzZOvVXx";

/// Format an instant through a compiled pattern.
///
/// Literal tokens are emitted verbatim. Field tokens dispatch on their
/// symbol: numeric fields zero-pad to the field width, textual fields look
/// up the name table for their width class. Known symbols without an
/// implementation here (time zones, flexible day periods) emit nothing —
/// the engine has a single default calendar and no zone database — while an
/// unknown symbol is a hard error.
pub fn format_datetime(
    instant: NaiveDateTime,
    pattern: &CompiledPattern,
    literals: &DateTimeLiterals,
) -> Result<String, FormatError> {
    let mut out = String::new();
    for token in pattern.tokens() {
        match token {
            PatternToken::Literal(text) => out.push_str(text),
            PatternToken::Field { symbol, width } => {
                format_field(&mut out, instant, *symbol, *width, literals)?;
            }
        }
    }
    Ok(out)
}

fn format_field(
    out: &mut String,
    instant: NaiveDateTime,
    symbol: char,
    width: usize,
    literals: &DateTimeLiterals,
) -> Result<(), FormatError> {
    match symbol {
        'y' | 'u' => push_year(out, instant.year(), width),
        'Y' => push_year(out, instant.iso_week().year(), width),
        'G' => {
            let era = if instant.year() > 0 { 1 } else { 0 };
            push_name(out, &literals.eras, width, era);
        }
        'M' => push_month(out, instant, width, &literals.months_format),
        'L' => push_month(out, instant, width, &literals.months_standalone),
        'd' => push_padded(out, instant.day(), width),
        'D' => push_padded(out, instant.ordinal(), width),
        // Week of month and day-of-week-in-month share the arithmetic: the
        // ordinal of the current 7-day slice of the month.
        'W' | 'F' => push_padded(out, (instant.day() - 1) / 7 + 1, width),
        'w' => push_padded(out, instant.iso_week().week(), width),
        'E' => push_name(out, &literals.weekdays, width, weekday_index(instant)),
        'e' | 'c' => {
            if width <= 2 {
                push_padded(out, weekday_index(instant) as u32 + 1, width);
            } else {
                push_name(out, &literals.weekdays, width, weekday_index(instant));
            }
        }
        'a' => {
            let period = if instant.hour() < 12 { 0 } else { 1 };
            push_name(out, &literals.day_periods, width, period);
        }
        'h' => {
            let hour = instant.hour() % 12;
            push_padded(out, if hour == 0 { 12 } else { hour }, width);
        }
        'H' => push_padded(out, instant.hour(), width),
        'K' => push_padded(out, instant.hour() % 12, width),
        'k' => {
            let hour = instant.hour();
            push_padded(out, if hour == 0 { 24 } else { hour }, width);
        }
        'm' => push_padded(out, instant.minute(), width),
        's' => push_padded(out, instant.second(), width),
        'S' => push_fraction(out, instant.nanosecond(), width),
        'A' => {
            let millis = u64::from(instant.num_seconds_from_midnight()) * 1000
                + u64::from(instant.nanosecond()) / 1_000_000;
            out.push_str(&format!("{millis:0width$}"));
        }
        'Q' => push_quarter(out, instant, width, &literals.quarters_format),
        'q' => push_quarter(out, instant, width, &literals.quarters_standalone),
        // Recognized but unsupported: degrade to empty output.
        _ if KNOWN_SYMBOLS.contains(symbol) => {}
        _ => return Err(FormatError::UnknownSymbol(symbol)),
    }
    Ok(())
}

fn weekday_index(instant: NaiveDateTime) -> usize {
    instant.weekday().num_days_from_sunday() as usize
}

fn push_padded(out: &mut String, value: u32, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}

/// Width 2 truncates to the two low digits; other widths zero-pad.
fn push_year(out: &mut String, year: i32, width: usize) {
    if width == 2 {
        out.push_str(&format!("{:02}", year.rem_euclid(100)));
    } else {
        out.push_str(&format!("{year:0width$}"));
    }
}

fn push_month(out: &mut String, instant: NaiveDateTime, width: usize, table: &NameTable) {
    if width <= 2 {
        push_padded(out, instant.month(), width);
    } else {
        push_name(out, table, width, instant.month0() as usize);
    }
}

fn push_quarter(out: &mut String, instant: NaiveDateTime, width: usize, table: &NameTable) {
    let quarter = (instant.month() - 1) / 3 + 1;
    if width <= 2 {
        push_padded(out, quarter, width);
    } else {
        push_name(out, table, width, quarter as usize - 1);
    }
}

/// A missing name is a lookup miss, not an error: emit nothing.
fn push_name(out: &mut String, table: &NameTable, width: usize, index: usize) {
    if let Some(name) = table.get(NameWidth::from_field_width(width), index) {
        out.push_str(name);
    }
}

/// Fractional seconds: the leading `width` digits of the nanosecond field,
/// zero-padded on the right past nanosecond precision.
fn push_fraction(out: &mut String, nanosecond: u32, width: usize) {
    let nanos = format!("{:09}", nanosecond % 1_000_000_000);
    if width <= 9 {
        out.push_str(&nanos[..width]);
    } else {
        out.push_str(&nanos);
        out.extend(std::iter::repeat('0').take(width - 9));
    }
}
