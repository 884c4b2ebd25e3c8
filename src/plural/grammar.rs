//! Plural-rule grammar.
//!
//! CLDR rule text is a chain of clauses:
//!
//! ```text
//! n mod 10 in 2..4 and n mod 100 not in 12..14
//! └┬┘ └──┬──┘ └─┬─┘ └┬┘
//!  operand modulo   connective to the next clause
//!        condition (is | is not | in | not in | within | not within)
//! ```
//!
//! Compilation lower-cases and strips whitespace, then scans anchored clause
//! matches until the whole string is covered. Anything less than full
//! coverage is corrupted locale data and a fatal construction error; this
//! grammar never guesses.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::LocaleNode;
use crate::error::PluralError;

/// A grammatical plural class. `Other` is the universal fallback and is
/// never stored in a ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Is,
    IsNot,
    In,
    NotIn,
    Within,
    NotWithin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

/// One compiled clause. `lo == hi` for single-operand conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subrule {
    pub modulus: Option<u32>,
    pub kind: ConditionKind,
    pub lo: i64,
    pub hi: i64,
    /// Join to the *next* clause; `None` only on the last clause.
    pub connective: Option<Connective>,
}

/// A compiled rule: the clause chain for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    pub(crate) clauses: Vec<Subrule>,
}

/// Ordered category → rule mapping for one language group. Declared order is
/// evaluation order; an empty ruleset means the language only uses `other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralRuleSet {
    pub(crate) rules: Vec<(PluralCategory, PluralRule)>,
}

impl PluralRuleSet {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compile one rule text.
pub fn parse_rule(text: &str) -> Result<PluralRule, PluralError> {
    let normalized: String = text.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    let clause =
        regex!(r"^n(?:mod(\d+))?(isnot|is|notin|in|notwithin|within)(\d+)(?:\.\.(\d+))?(and|or)?");

    let malformed = |offset: usize| PluralError::MalformedRule { text: text.to_string(), offset };

    let mut clauses = Vec::new();
    let mut position = 0usize;
    while position < normalized.len() {
        let caps = clause.captures(&normalized[position..]).ok_or_else(|| malformed(position))?;
        let matched_len = caps.get(0).map_or(0, |whole| whole.end());

        let modulus = match caps.get(1) {
            Some(digits) => {
                let value: u32 = digits.as_str().parse().map_err(|_| malformed(position))?;
                if value == 0 {
                    return Err(malformed(position));
                }
                Some(value)
            }
            None => None,
        };

        let (kind, operator) = match &caps[2] {
            "is" => (ConditionKind::Is, "is"),
            "isnot" => (ConditionKind::IsNot, "is not"),
            "in" => (ConditionKind::In, "in"),
            "notin" => (ConditionKind::NotIn, "not in"),
            "within" => (ConditionKind::Within, "within"),
            "notwithin" => (ConditionKind::NotWithin, "not within"),
            _ => return Err(malformed(position)),
        };

        let lo: i64 = caps[3].parse().map_err(|_| malformed(position))?;
        let hi = match caps.get(4) {
            Some(digits) => {
                if matches!(kind, ConditionKind::Is | ConditionKind::IsNot) {
                    return Err(PluralError::RangeOnExactOperator { text: text.to_string(), operator });
                }
                digits.as_str().parse().map_err(|_| malformed(position))?
            }
            None => lo,
        };

        let connective = caps.get(5).map(|j| if j.as_str() == "and" { Connective::And } else { Connective::Or });

        position += matched_len;
        // A clause chain only continues through an explicit connective.
        if connective.is_none() && position < normalized.len() {
            return Err(malformed(position));
        }
        clauses.push(Subrule { modulus, kind, lo, hi, connective });
    }

    match clauses.last() {
        None => Err(malformed(0)),
        Some(last) if last.connective.is_some() => Err(malformed(normalized.len())),
        Some(_) => Ok(PluralRule { clauses }),
    }
}

/// All compiled rulesets plus the language index. Languages listed together
/// in one `pluralRules` group share a single `Arc`'d ruleset.
#[derive(Debug, Clone, Default)]
pub struct RulesetTable {
    rulesets: Vec<Arc<PluralRuleSet>>,
    index: HashMap<String, usize>,
}

impl RulesetTable {
    /// Build from the `plurals` subtree of merged locale data. Nodes that
    /// are not `pluralRules` groups (or lack a `locales` attribute) are
    /// skipped; malformed rule text is fatal.
    pub fn build(plurals: &LocaleNode) -> Result<Self, PluralError> {
        let mut table = Self::default();
        let Some(groups) = plurals.as_branch() else {
            return Ok(table);
        };

        for (group_key, group) in groups.iter() {
            if group_key.name() != "pluralRules" {
                continue;
            }
            let Some(locales) = group_key.attr("locales") else {
                continue;
            };

            let mut rules = Vec::new();
            if let Some(children) = group.as_branch() {
                for (rule_key, rule_node) in children.iter() {
                    if rule_key.name() != "pluralRule" {
                        continue;
                    }
                    let Some(count) = rule_key.attr("count") else {
                        continue;
                    };
                    let category = PluralCategory::from_keyword(count)
                        .ok_or_else(|| PluralError::UnknownCategory(count.to_string()))?;
                    if category == PluralCategory::Other {
                        continue;
                    }
                    rules.push((category, parse_rule(rule_node.text().unwrap_or(""))?));
                }
            }

            let id = table.rulesets.len();
            table.rulesets.push(Arc::new(PluralRuleSet { rules }));
            for language in locales.split_whitespace() {
                table.index.entry(language.to_string()).or_insert(id);
            }
        }
        Ok(table)
    }

    /// Rehydrate from externally cached parts.
    pub fn from_parts(rulesets: Vec<Arc<PluralRuleSet>>, index: HashMap<String, usize>) -> Self {
        Self { rulesets, index }
    }

    pub fn rulesets(&self) -> &[Arc<PluralRuleSet>] {
        &self.rulesets
    }

    pub fn index(&self) -> &HashMap<String, usize> {
        &self.index
    }

    /// The shared ruleset for a language, `None` when the language only uses
    /// `other` implicitly.
    pub fn ruleset_for(&self, language: &str) -> Option<&Arc<PluralRuleSet>> {
        self.index.get(language).map(|&id| &self.rulesets[id])
    }

    /// Classify a quantity for a language; unknown languages are `other`.
    pub fn category_for(&self, quantity: f64, language: &str) -> PluralCategory {
        match self.ruleset_for(language) {
            Some(ruleset) => super::classify(quantity, ruleset),
            None => PluralCategory::Other,
        }
    }
}
