//! A CLDR-inspired locale-data and formatting engine.
//!
//! The crate loads hierarchical locale definition data, resolves
//! inheritance and aliasing between locale variants, and uses the resolved
//! data to pick grammatical plural forms, parse localized numbers and
//! format date/time values.
//!
//! ## How the parts work together
//!
//! ```text
//! sources ── SourceParser ──▶ LocaleRepository::load     (data)
//!                               merge + alias resolution
//!                                     │
//!                ┌────────────────────┼──────────────────────┐
//!                ▼                    ▼                      ▼
//!        RulesetTable::build   NumberSymbols         DateTimeLiterals
//!             (plural)          (number)                (datetime)
//!                │                    │                      │
//!   quantity ── classify    text ── parse_number   instant ── format_datetime
//!                                     ▲                      ▲
//!                                     └── compile (pattern) ─┘
//! ```
//!
//! Everything is built once and immutable afterwards; evaluation is pure,
//! synchronous and safe to run from parallel workers. [`LocaleCatalog`]
//! bundles the whole pipeline behind four entry points:
//!
//! ```
//! use glotta::{DataError, Locale, LocaleCatalog, LocaleNode, SourceParser};
//!
//! struct EmptyParser;
//!
//! impl SourceParser for EmptyParser {
//!     fn parse(&self, _source: &str) -> Result<LocaleNode, DataError> {
//!         Ok(LocaleNode::branch())
//!     }
//! }
//!
//! let catalog = LocaleCatalog::new(
//!     Box::new(EmptyParser),
//!     [("root".to_string(), "root.xml".to_string())],
//! );
//! // Built-in defaults carry a bare root locale.
//! let category = catalog.plural_category(5.0, &Locale::new("ja")).unwrap();
//! assert_eq!(category.as_str(), "other");
//! ```

#[macro_use]
mod macros;
mod api;
mod cache;
mod data;
mod datetime;
mod error;
mod locale;
mod number;
mod pattern;
mod plural;

pub use api::{DateTimeKind, LocaleCatalog, NumberPatternKind, PatternLength};
pub use cache::{CacheKey, CacheValue, DataCache, MemoryCache};
pub use data::{Branch, LocaleNode, LocaleRepository, MergedLocaleData, NodeKey, SourceParser};
pub use datetime::{format_datetime, DateTimeLiterals, NameTable, NameWidth};
pub use error::{DataError, Error, FormatError, NumberParseError, PluralError};
pub use locale::{FallbackChain, Locale};
pub use number::{parse_number, NumberPattern, NumberSymbols, ParseMode, PatternFeatures};
pub use pattern::{compile, CompiledPattern, PatternToken};
pub use plural::{
    classify, parse_rule, ConditionKind, Connective, PluralCategory, PluralRule, PluralRuleSet,
    RulesetTable, Subrule,
};
