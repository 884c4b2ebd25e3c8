//! Localized number parsing.
//!
//! ```text
//! "#,##0.###" ── compile ──▶ CompiledPattern ── NumberPattern::from_compiled
//!                                                      │ digit minima, multiplier,
//!                                                      │ rounding increment
//! "1.234,5" ── parse_number(symbols, mode) ◀──────────┘
//! ```
//!
//! Strict mode rejects any constraint violation with a typed error; lenient
//! mode scrapes the digits out of noisy text and fails only when there are
//! none.

mod parse;
mod pattern;
mod symbols;

pub use parse::{parse_number, ParseMode};
pub use pattern::{NumberPattern, PatternFeatures};
pub use symbols::NumberSymbols;
