//! Loading and merging locale source trees.

use std::sync::Arc;

use crate::cache::{CacheKey, CacheValue, DataCache, MemoryCache};
use crate::data::{alias, merge, LocaleNode};
use crate::error::DataError;

/// Injected collaborator that turns one opaque source identifier (a file
/// path, a fixture name) into a parsed node tree. Raw XML/CLDR parsing is
/// out of scope for this engine.
pub trait SourceParser: Send + Sync {
    fn parse(&self, source: &str) -> Result<LocaleNode, DataError>;
}

/// The merged, alias-resolved result of loading an ordered source list.
/// Immutable after construction; concurrent lookups need no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedLocaleData {
    root: LocaleNode,
}

impl MergedLocaleData {
    pub(crate) fn new(root: LocaleNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LocaleNode {
        &self.root
    }

    /// Walk a `/`-separated path. A miss at any segment is `None`, never an
    /// error: probing for optional subtrees is the normal mode of use.
    pub fn lookup(&self, path: &str) -> Option<&LocaleNode> {
        let mut current = &self.root;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Leaf text at a path; `None` for misses and branches.
    pub fn lookup_text(&self, path: &str) -> Option<&str> {
        self.lookup(path)?.text()
    }
}

/// Loads source trees through the injected parser, merges them left to
/// right, resolves aliases once, and caches the result by the source list.
pub struct LocaleRepository {
    parser: Box<dyn SourceParser>,
    cache: Arc<dyn DataCache>,
}

impl LocaleRepository {
    pub fn new(parser: Box<dyn SourceParser>) -> Self {
        Self::with_cache(parser, Arc::new(MemoryCache::default()))
    }

    pub fn with_cache(parser: Box<dyn SourceParser>, cache: Arc<dyn DataCache>) -> Self {
        Self { parser, cache }
    }

    pub fn cache(&self) -> &Arc<dyn DataCache> {
        &self.cache
    }

    /// Load and merge an ordered source list, most generic first.
    ///
    /// Each source is parsed independently, merged per the override rules,
    /// then one alias-resolution pass runs over the combined tree. The
    /// finished value is cached under a stable key of the source list, so
    /// repeat loads are a map hit.
    pub fn load(&self, sources: &[String]) -> Result<Arc<MergedLocaleData>, DataError> {
        let key = CacheKey::merged(sources);
        if let Some(CacheValue::Merged(data)) = self.cache.get(&key) {
            return Ok(data);
        }

        let debug = std::env::var_os("GLOTTA_DEBUG_DATA").is_some();
        let mut merged = LocaleNode::branch();
        for source in sources {
            let tree = self.parser.parse(source)?;
            merge::merge_into(&mut merged, &tree);
            if debug {
                eprintln!("[load] merged source `{source}`");
            }
        }
        alias::resolve_aliases(&mut merged);

        let data = Arc::new(MergedLocaleData::new(merged));
        self.cache.put(key, CacheValue::Merged(data.clone()));
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::data::testutil::{branch, leaf};

    /// Parser over canned trees that counts how often it actually runs.
    struct StubParser {
        trees: HashMap<String, LocaleNode>,
        calls: Arc<AtomicUsize>,
    }

    impl SourceParser for StubParser {
        fn parse(&self, source: &str) -> Result<LocaleNode, DataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.trees.get(source).cloned().ok_or_else(|| DataError::Source {
                source_name: source.to_string(),
                message: "unknown fixture".to_string(),
            })
        }
    }

    fn repository() -> (LocaleRepository, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut trees = HashMap::new();
        trees.insert(
            "root".to_string(),
            branch(&[(
                "numbers",
                branch(&[("decimal", leaf(".")), ("group", leaf(","))]),
            )]),
        );
        trees.insert(
            "de".to_string(),
            branch(&[("numbers", branch(&[("decimal", leaf(",")), ("group", leaf("."))]))]),
        );
        let parser = StubParser { trees, calls: calls.clone() };
        (LocaleRepository::new(Box::new(parser)), calls)
    }

    #[test]
    fn load_merges_most_specific_last() {
        let (repository, _) = repository();
        let data = repository.load(&["root".to_string(), "de".to_string()]).unwrap();
        assert_eq!(data.lookup_text("numbers/decimal"), Some(","));
        assert_eq!(data.lookup_text("numbers/group"), Some("."));
    }

    #[test]
    fn lookup_miss_is_not_an_error() {
        let (repository, _) = repository();
        let data = repository.load(&["root".to_string()]).unwrap();
        assert!(data.lookup("numbers/missing").is_none());
        assert!(data.lookup("nowhere/at/all").is_none());
        // A branch has no text.
        assert!(data.lookup_text("numbers").is_none());
    }

    #[test]
    fn repeat_loads_hit_the_cache() {
        let (repository, calls) = repository();
        let sources = vec!["root".to_string(), "de".to_string()];

        let first = repository.load(&sources).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let second = repository.load(&sources).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2, "cache hit must not re-parse");
        assert!(Arc::ptr_eq(&first, &second));

        // A different source list is a different cache entry.
        repository.load(&["root".to_string()]).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn parser_failure_propagates() {
        let (repository, _) = repository();
        let err = repository.load(&["missing".to_string()]).unwrap_err();
        assert!(matches!(err, DataError::Source { .. }));
    }
}
