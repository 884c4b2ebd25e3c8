//! Quantity classification.
//!
//! Categories are tried in declared order; the first whose clause chain
//! holds wins. The chain is evaluated flat, left to right: an `or`-joined
//! clause that already holds stops the scan with a match, an `and`-joined
//! clause that fails stops it with a miss. There is no precedence between
//! the connectives.

use super::grammar::{ConditionKind, Connective, PluralCategory, PluralRule, PluralRuleSet, Subrule};

/// Pick the category for `quantity`. Falls back to `other` when nothing
/// matches; that fallback is a result, not an error.
pub fn classify(quantity: f64, ruleset: &PluralRuleSet) -> PluralCategory {
    for (category, rule) in &ruleset.rules {
        if rule_holds(rule, quantity) {
            return *category;
        }
    }
    PluralCategory::Other
}

fn rule_holds(rule: &PluralRule, quantity: f64) -> bool {
    let Some(first) = rule.clauses.first() else {
        return false;
    };

    let mut holds = clause_holds(first, quantity);
    for at in 0..rule.clauses.len() {
        match rule.clauses[at].connective {
            None => return holds,
            Some(Connective::Or) if holds => return true,
            Some(Connective::And) if !holds => return false,
            Some(_) => holds = clause_holds(&rule.clauses[at + 1], quantity),
        }
    }
    holds
}

fn clause_holds(clause: &Subrule, quantity: f64) -> bool {
    let value = match clause.modulus {
        Some(modulus) => quantity % f64::from(modulus),
        None => quantity,
    };
    let lo = clause.lo as f64;
    let hi = clause.hi as f64;
    let integral = value.fract() == 0.0;

    match clause.kind {
        ConditionKind::Is => value == lo,
        ConditionKind::IsNot => value != lo,
        ConditionKind::In => integral && value >= lo && value <= hi,
        ConditionKind::NotIn => !(integral && value >= lo && value <= hi),
        ConditionKind::Within => value >= lo && value <= hi,
        ConditionKind::NotWithin => !(value >= lo && value <= hi),
    }
}
