//! Numeric constraints derived from a compiled pattern.

use crate::pattern::{CompiledPattern, PatternToken};

bitflags::bitflags! {
    /// Structural features observed while scanning a number pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PatternFeatures: u8 {
        /// A `,` before the decimal point: grouped integer digits.
        const GROUPING            = 1 << 0;
        const PERCENT             = 1 << 1;
        const PER_MILLE           = 1 << 2;
        /// A `;` subpattern was present (and skipped; affixes come from
        /// `NumberSymbols`, not from the pattern).
        const NEGATIVE_SUBPATTERN = 1 << 3;
    }
}

/// Digit-count and scaling constraints read off a compiled number pattern.
///
/// In pattern text `0`–`9` are required digit positions, `#` optional ones,
/// `.` the decimal point and `,` the group marker; `%`/`‰` scale the written
/// value by 100/1000. Non-zero pattern digits spell a rounding increment:
/// `#,##0.05` only admits multiples of 0.05.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPattern {
    pub min_integer_digits: usize,
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub multiplier: f64,
    pub rounding_increment: Option<f64>,
    pub features: PatternFeatures,
}

impl NumberPattern {
    pub fn from_compiled(pattern: &CompiledPattern) -> Self {
        let mut derived = Self {
            min_integer_digits: 0,
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            multiplier: 1.0,
            rounding_increment: None,
            features: PatternFeatures::empty(),
        };

        let mut in_fraction = false;
        let mut integer_digits = String::new();
        let mut fraction_digits = String::new();

        'scan: for token in pattern.tokens() {
            match token {
                PatternToken::Literal(text) => {
                    for c in text.chars() {
                        match c {
                            ';' => {
                                derived.features |= PatternFeatures::NEGATIVE_SUBPATTERN;
                                break 'scan;
                            }
                            '.' => in_fraction = true,
                            ',' if !in_fraction => derived.features |= PatternFeatures::GROUPING,
                            '%' => {
                                derived.multiplier = 100.0;
                                derived.features |= PatternFeatures::PERCENT;
                            }
                            '‰' => {
                                derived.multiplier = 1000.0;
                                derived.features |= PatternFeatures::PER_MILLE;
                            }
                            _ => {}
                        }
                    }
                }
                PatternToken::Field { symbol: '#', width } => {
                    if in_fraction {
                        derived.max_fraction_digits += width;
                    }
                }
                PatternToken::Field { symbol, width } if symbol.is_ascii_digit() => {
                    let run: String = std::iter::repeat(*symbol).take(*width).collect();
                    if in_fraction {
                        derived.min_fraction_digits += width;
                        derived.max_fraction_digits += width;
                        fraction_digits.push_str(&run);
                    } else {
                        derived.min_integer_digits += width;
                        integer_digits.push_str(&run);
                    }
                }
                // Letters in a number pattern carry no digit information.
                PatternToken::Field { .. } => {}
            }
        }

        let increment = format!(
            "{}.{}",
            if integer_digits.is_empty() { "0" } else { &integer_digits },
            if fraction_digits.is_empty() { "0" } else { &fraction_digits },
        );
        if let Some(increment) = increment.parse::<f64>().ok().filter(|value| *value > 0.0) {
            derived.rounding_increment = Some(increment);
        }

        derived
    }
}
