//! Error types.
//!
//! The split follows the failure taxonomy of the engine: malformed shipped
//! data is fatal at construction time (`DataError`, `PluralError`), while
//! per-call failures are typed values the caller can inspect
//! (`NumberParseError`, `FormatError`). Lookup misses and unknown languages
//! are *not* errors anywhere in this crate; they surface as `Option`/fallback
//! results instead.

use thiserror::Error;

/// Errors raised while loading or resolving locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A locale tag could not be decomposed into subtags.
    #[error("invalid locale tag `{0}`")]
    InvalidLocale(String),

    /// The `root` locale source is absent. Every fallback chain terminates at
    /// `root`, so a missing root is a configuration error, not a lookup miss.
    #[error("root locale data is missing from the fallback chain")]
    MissingRootLocale,

    /// The injected source parser failed on one source.
    #[error("failed to parse locale source `{source_name}`: {message}")]
    Source { source_name: String, message: String },
}

/// Errors raised while compiling plural rulesets from locale data.
///
/// These indicate corrupted CLDR fixtures and are fatal at build time; a
/// quantity that matches no rule is *not* an error (it classifies as `other`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralError {
    /// The rule text did not scan as a full sequence of clauses.
    #[error("malformed plural rule `{text}`: unparsed input at byte {offset}")]
    MalformedRule { text: String, offset: usize },

    /// `is`/`is not` take exactly one operand, never a range.
    #[error("malformed plural rule `{text}`: `{operator}` takes a single operand")]
    RangeOnExactOperator { text: String, operator: &'static str },

    /// A rule was keyed by a count keyword outside the CLDR category set.
    #[error("unknown plural category `{0}`")]
    UnknownCategory(String),
}

/// Typed failures from strict and lenient number parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberParseError {
    /// Strict mode: the input matched none of the configured affix
    /// combinations.
    #[error("input matches neither the positive nor the negative affixes")]
    AffixMismatch,

    /// Strict mode: a non-digit character survived separator stripping.
    #[error("unexpected character `{0}` in numeric text")]
    InvalidDigit(char),

    /// Strict mode: more than one decimal separator.
    #[error("more than one decimal separator in `{0}`")]
    MultipleDecimalSeparators(String),

    /// Strict mode: integer part shorter than the pattern requires.
    #[error("integer part has {found} digits, pattern requires at least {required}")]
    IntegerDigits { found: usize, required: usize },

    /// Strict mode: fraction length outside the pattern's allowed span.
    #[error("fraction part has {found} digits, pattern allows {min}..={max}")]
    FractionDigits { found: usize, min: usize, max: usize },

    /// Strict mode: the written value is not a multiple of the pattern's
    /// rounding increment.
    #[error("{value} is not a multiple of the rounding increment {increment}")]
    RoundingIncrement { value: f64, increment: f64 },

    /// No ASCII digit anywhere in the input. The only way lenient mode fails.
    #[error("no digits in input")]
    NoDigits,
}

/// Failures from date/time formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A field symbol outside the known pattern alphabet: the pattern itself
    /// is corrupt. Known-but-unsupported symbols degrade to empty output
    /// instead and never reach this error.
    #[error("unrecognized pattern symbol `{0}`")]
    UnknownSymbol(char),
}

/// Umbrella error returned by the [`LocaleCatalog`](crate::LocaleCatalog)
/// entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Plural(#[from] PluralError),
    #[error(transparent)]
    NumberParse(#[from] NumberParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
