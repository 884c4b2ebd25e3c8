//! Plural-rule compilation and classification.
//!
//! Two phases, compile-once / evaluate-many:
//!
//! ```text
//! plurals subtree ── RulesetTable::build ──▶ shared rulesets + language index
//!                                                  │
//! quantity ───────────── classify ◀───────────────┘
//! ```
//!
//! Rulesets are global (CLDR ships them as supplemental data), built once
//! and immutable; `classify` is pure and safe to call concurrently.

mod classify;
mod grammar;

pub use classify::classify;
pub use grammar::{
    parse_rule, ConditionKind, Connective, PluralCategory, PluralRule, PluralRuleSet, RulesetTable,
    Subrule,
};
