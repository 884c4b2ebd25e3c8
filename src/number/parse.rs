//! Strict and lenient number parsing.
//!
//! Both modes consume the same compiled pattern and symbol table. Strict
//! mode validates the input against every pattern constraint and fails on
//! the first violation; lenient mode extracts a best-effort number from
//! noisy text and only fails when there is no digit at all.

use crate::error::NumberParseError;
use crate::pattern::CompiledPattern;

use super::pattern::NumberPattern;
use super::symbols::NumberSymbols;

/// How tolerant parsing should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Strict,
    Lenient,
}

/// Parse localized numeric text.
///
/// # Example
/// ```
/// use glotta::{compile, parse_number, NumberSymbols, ParseMode};
///
/// let pattern = compile("#,##0.###");
/// let symbols = NumberSymbols::default();
/// let parsed = parse_number("1,234.5", &pattern, &symbols, ParseMode::Strict).unwrap();
/// assert!((parsed - 1234.5).abs() < 1e-9);
/// ```
pub fn parse_number(
    input: &str,
    pattern: &CompiledPattern,
    symbols: &NumberSymbols,
    mode: ParseMode,
) -> Result<f64, NumberParseError> {
    let derived = NumberPattern::from_compiled(pattern);
    match mode {
        ParseMode::Strict => parse_strict(input, &derived, symbols),
        ParseMode::Lenient => parse_lenient(input, &derived, symbols),
    }
}

/// Match and strip one affix pair, in both / prefix-only / suffix-only /
/// neither priority order. Only non-empty affixes participate; an all-empty
/// pair matches anything unchanged.
fn strip_affixes<'a>(text: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if !prefix.is_empty()
        && !suffix.is_empty()
        && text.len() >= prefix.len() + suffix.len()
        && text.starts_with(prefix)
        && text.ends_with(suffix)
    {
        return Some(&text[prefix.len()..text.len() - suffix.len()]);
    }
    if !prefix.is_empty() && text.starts_with(prefix) {
        return Some(&text[prefix.len()..]);
    }
    if !suffix.is_empty() && text.ends_with(suffix) {
        return Some(&text[..text.len() - suffix.len()]);
    }
    if prefix.is_empty() && suffix.is_empty() {
        return Some(text);
    }
    None
}

/// Digit strings to a value. The parts are pre-validated ASCII digits, so
/// the composed literal always parses; `None` only when both are empty.
fn compose(integer_part: &str, fraction_part: &str) -> Option<f64> {
    if integer_part.is_empty() && fraction_part.is_empty() {
        return None;
    }
    let literal = format!(
        "{}.{}",
        if integer_part.is_empty() { "0" } else { integer_part },
        if fraction_part.is_empty() { "0" } else { fraction_part },
    );
    literal.parse::<f64>().ok()
}

fn parse_strict(
    input: &str,
    pattern: &NumberPattern,
    symbols: &NumberSymbols,
) -> Result<f64, NumberParseError> {
    // Negative affixes take priority over positive ones.
    let (body, sign) = if let Some(body) =
        strip_affixes(input, &symbols.negative_prefix, &symbols.negative_suffix)
    {
        (body, -1.0)
    } else if let Some(body) = strip_affixes(input, &symbols.positive_prefix, &symbols.positive_suffix) {
        (body, 1.0)
    } else {
        return Err(NumberParseError::AffixMismatch);
    };

    let body = if symbols.group.is_empty() { body.to_string() } else { body.replace(&symbols.group, "") };

    let (integer_part, fraction_part) = if symbols.decimal.is_empty() {
        (body.as_str(), "")
    } else {
        match body.match_indices(&symbols.decimal).count() {
            0 => (body.as_str(), ""),
            1 => {
                let at = body.find(&symbols.decimal).unwrap_or(0);
                (&body[..at], &body[at + symbols.decimal.len()..])
            }
            _ => return Err(NumberParseError::MultipleDecimalSeparators(body.clone())),
        }
    };

    if let Some(bad) = integer_part.chars().chain(fraction_part.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(NumberParseError::InvalidDigit(bad));
    }
    if integer_part.len() < pattern.min_integer_digits {
        return Err(NumberParseError::IntegerDigits {
            found: integer_part.len(),
            required: pattern.min_integer_digits,
        });
    }
    let fraction_len = fraction_part.len();
    if fraction_len < pattern.min_fraction_digits || fraction_len > pattern.max_fraction_digits {
        return Err(NumberParseError::FractionDigits {
            found: fraction_len,
            min: pattern.min_fraction_digits,
            max: pattern.max_fraction_digits,
        });
    }

    let mut value = compose(integer_part, fraction_part).ok_or(NumberParseError::NoDigits)?;

    // The increment constrains the value as written, before the multiplier.
    if let Some(increment) = pattern.rounding_increment {
        let ratio = value / increment;
        if (ratio - ratio.round()).abs() > 1e-9 {
            return Err(NumberParseError::RoundingIncrement { value, increment });
        }
    }

    value /= pattern.multiplier;
    Ok(sign * value)
}

fn parse_lenient(
    input: &str,
    pattern: &NumberPattern,
    symbols: &NumberSymbols,
) -> Result<f64, NumberParseError> {
    let first = input.find(|c: char| c.is_ascii_digit()).ok_or(NumberParseError::NoDigits)?;
    let last = input.rfind(|c: char| c.is_ascii_digit()).unwrap_or(first);

    // ASCII digits are single bytes, so these slices stay on char
    // boundaries.
    let before = &input[..first];
    let after = &input[last + 1..];
    let body = &input[first..=last];

    // Split at the *last* separator occurrence between the digits.
    let split = if symbols.decimal.is_empty() { None } else { body.rfind(&symbols.decimal) };
    let (integer_raw, fraction_raw) = match split {
        Some(at) => (&body[..at], &body[at + symbols.decimal.len()..]),
        None => (body, ""),
    };
    let integer_part: String = integer_raw.chars().filter(char::is_ascii_digit).collect();
    let fraction_part: String = fraction_raw.chars().filter(char::is_ascii_digit).collect();

    let mut value = compose(&integer_part, &fraction_part).ok_or(NumberParseError::NoDigits)?;
    value /= pattern.multiplier;

    // Sign detection: the prefix wins; the suffix is only consulted when
    // the text before the first digit does not end with the negative
    // prefix.
    let negative = if !symbols.negative_prefix.is_empty() && before.ends_with(&symbols.negative_prefix) {
        true
    } else {
        !symbols.negative_suffix.is_empty() && after.starts_with(&symbols.negative_suffix)
    };

    Ok(if negative { -value } else { value })
}
