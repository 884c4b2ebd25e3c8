//! Build-once caches.
//!
//! The engine's expensive artifacts (merged locale data, plural rulesets)
//! are pure functions of their inputs, built once and reused for the process
//! lifetime. The [`DataCache`] trait is the seam to an external store; keys
//! are a typed enum rather than magic strings, so a region can never collide
//! with a merged-data hash. Values are shared `Arc`s: a cache hit and a fresh
//! build hand out the same immutable data.
//!
//! Concurrent first-time builds of the same key are allowed and wasteful but
//! safe; single-flight is the caller's concern.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::data::MergedLocaleData;
use crate::plural::PluralRuleSet;

/// Typed cache key. `Merged` carries a stable content key derived from the
/// source-identifier list; the ruleset regions are singletons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Merged(String),
    Rulesets,
    RulesetIndices,
}

impl CacheKey {
    /// Stable key for an ordered source list: the identifiers joined with a
    /// unit separator, so distinct lists can never collide.
    pub fn merged(sources: &[String]) -> Self {
        CacheKey::Merged(sources.join("\u{1f}"))
    }
}

/// Value stored under a [`CacheKey`]; the variant always matches the key's
/// region.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Merged(Arc<MergedLocaleData>),
    Rulesets(Arc<Vec<Arc<PluralRuleSet>>>),
    RulesetIndices(Arc<HashMap<String, usize>>),
}

/// External cache collaborator: plain get/put/contains, no transactional
/// guarantees.
pub trait DataCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<CacheValue>;
    fn put(&self, key: CacheKey, value: CacheValue);
    fn contains(&self, key: &CacheKey) -> bool;
}

/// In-process default store.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<CacheKey, CacheValue>>,
}

impl DataCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: CacheKey, value: CacheValue) {
        self.entries.write().insert(key, value);
    }

    fn contains(&self, key: &CacheKey) -> bool {
        self.entries.read().contains_key(key)
    }
}
