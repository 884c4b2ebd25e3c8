//! Public catalog API.
//!
//! [`LocaleCatalog`] is the one context object a host application builds at
//! startup: it owns the repository, the registry of available locale
//! sources, the global plural rulesets and the build-once caches for
//! compiled patterns and per-locale symbol/literal tables. There is no
//! ambient global state; consumers hold a shared reference and call in from
//! any thread.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

use crate::cache::{CacheKey, CacheValue, DataCache};
use crate::data::{LocaleRepository, MergedLocaleData, SourceParser};
use crate::datetime::{format_datetime, DateTimeLiterals};
use crate::error::{DataError, Error};
use crate::locale::Locale;
use crate::number::{parse_number, NumberSymbols, ParseMode};
use crate::pattern::{compile, CompiledPattern};
use crate::plural::{PluralCategory, RulesetTable};

/// The four CLDR pattern lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternLength {
    Full,
    Long,
    Medium,
    Short,
}

impl PatternLength {
    fn key(self) -> &'static str {
        match self {
            PatternLength::Full => "full",
            PatternLength::Long => "long",
            PatternLength::Medium => "medium",
            PatternLength::Short => "short",
        }
    }
}

/// Which default date/time pattern to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeKind {
    Date,
    Time,
    /// Date and time combined through the locale's glue pattern.
    DateTime,
}

/// Which default number pattern to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPatternKind {
    Decimal,
    Percent,
}

impl NumberPatternKind {
    fn data_path(self) -> &'static str {
        match self {
            NumberPatternKind::Decimal => "numbers/decimalFormat",
            NumberPatternKind::Percent => "numbers/percentFormat",
        }
    }

    fn default_pattern(self) -> &'static str {
        match self {
            NumberPatternKind::Decimal => "#,##0.###",
            NumberPatternKind::Percent => "#,##0%",
        }
    }
}

/// Built once at startup, then shared read-only.
///
/// `sources` maps a locale name (the filename stem: `root`, `en`, `en_GB`)
/// to the opaque source identifier the injected parser understands. The
/// `root` entry is mandatory — it anchors every fallback chain.
pub struct LocaleCatalog {
    repository: LocaleRepository,
    sources: HashMap<String, String>,
    rulesets: OnceCell<Arc<RulesetTable>>,
    patterns: RwLock<HashMap<String, Arc<CompiledPattern>>>,
    symbols: RwLock<HashMap<String, Arc<NumberSymbols>>>,
    literals: RwLock<HashMap<String, Arc<DateTimeLiterals>>>,
}

impl LocaleCatalog {
    pub fn new(
        parser: Box<dyn SourceParser>,
        sources: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self::with_repository(LocaleRepository::new(parser), sources)
    }

    /// Build with an external [`DataCache`] (persistent store, shared
    /// process cache).
    pub fn with_cache(
        parser: Box<dyn SourceParser>,
        cache: Arc<dyn DataCache>,
        sources: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self::with_repository(LocaleRepository::with_cache(parser, cache), sources)
    }

    fn with_repository(
        repository: LocaleRepository,
        sources: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            repository,
            sources: sources.into_iter().collect(),
            rulesets: OnceCell::new(),
            patterns: RwLock::new(HashMap::new()),
            symbols: RwLock::new(HashMap::new()),
            literals: RwLock::new(HashMap::new()),
        }
    }

    /// Merged, alias-resolved data for a locale's whole fallback chain.
    pub fn data(&self, locale: &Locale) -> Result<Arc<MergedLocaleData>, Error> {
        let sources = self.fallback_sources(locale)?;
        Ok(self.repository.load(&sources)?)
    }

    /// Registered sources along the fallback chain, most generic first.
    /// Absent intermediate locales are skipped; an absent `root` is the one
    /// hard configuration error in this component.
    fn fallback_sources(&self, locale: &Locale) -> Result<Vec<String>, DataError> {
        if !self.sources.contains_key("root") {
            return Err(DataError::MissingRootLocale);
        }
        let mut sources: Vec<String> =
            locale.fallback_chain().filter_map(|stem| self.sources.get(&stem).cloned()).collect();
        sources.reverse();
        Ok(sources)
    }

    /// Pick the plural category for a quantity in a locale.
    ///
    /// Unknown languages and unmatched quantities classify as `other`; the
    /// only error here is failing to build the rulesets in the first place.
    pub fn plural_category(&self, quantity: f64, locale: &Locale) -> Result<PluralCategory, Error> {
        Ok(self.rulesets()?.category_for(quantity, locale.language()))
    }

    /// Parse localized numeric text with the locale's default pattern of the
    /// given kind.
    pub fn parse_number(
        &self,
        text: &str,
        locale: &Locale,
        kind: NumberPatternKind,
        mode: ParseMode,
    ) -> Result<f64, Error> {
        let data = self.data(locale)?;
        let pattern_text =
            data.lookup_text(kind.data_path()).unwrap_or_else(|| kind.default_pattern()).to_string();
        let pattern = self.compiled(&pattern_text);
        let symbols = self.symbols_for(locale, &data);
        Ok(parse_number(text, &pattern, &symbols, mode)?)
    }

    /// Format an instant with the locale's default pattern of the given kind
    /// and length.
    pub fn format_datetime(
        &self,
        instant: NaiveDateTime,
        locale: &Locale,
        kind: DateTimeKind,
        length: PatternLength,
    ) -> Result<String, Error> {
        let data = self.data(locale)?;
        let pattern_text = self.pattern_text(&data, kind, length);
        let pattern = self.compiled(&pattern_text);
        let literals = self.literals_for(locale, &data);
        Ok(format_datetime(instant, &pattern, &literals)?)
    }

    /// The global ruleset table, built on first use from the root data's
    /// `plurals` subtree and shared through the external cache regions.
    fn rulesets(&self) -> Result<&Arc<RulesetTable>, Error> {
        self.rulesets.get_or_try_init(|| {
            let cache = self.repository.cache();
            if let (Some(CacheValue::Rulesets(rulesets)), Some(CacheValue::RulesetIndices(index))) =
                (cache.get(&CacheKey::Rulesets), cache.get(&CacheKey::RulesetIndices))
            {
                return Ok(Arc::new(RulesetTable::from_parts(
                    rulesets.as_ref().clone(),
                    index.as_ref().clone(),
                )));
            }

            let data = self.data(&Locale::root())?;
            let table = match data.lookup("plurals") {
                Some(subtree) => RulesetTable::build(subtree)?,
                None => RulesetTable::default(),
            };
            cache.put(CacheKey::Rulesets, CacheValue::Rulesets(Arc::new(table.rulesets().to_vec())));
            cache.put(
                CacheKey::RulesetIndices,
                CacheValue::RulesetIndices(Arc::new(table.index().clone())),
            );
            Ok(Arc::new(table))
        })
    }

    /// Compile-once pattern cache, keyed by the pattern string.
    fn compiled(&self, pattern: &str) -> Arc<CompiledPattern> {
        if let Some(compiled) = self.patterns.read().get(pattern) {
            return compiled.clone();
        }
        // A concurrent build of the same pattern is wasteful but safe: both
        // writers insert an identical value.
        let compiled = Arc::new(compile(pattern));
        self.patterns.write().insert(pattern.to_string(), compiled.clone());
        compiled
    }

    fn symbols_for(&self, locale: &Locale, data: &MergedLocaleData) -> Arc<NumberSymbols> {
        let key = locale.name();
        if let Some(symbols) = self.symbols.read().get(&key) {
            return symbols.clone();
        }
        let symbols = Arc::new(NumberSymbols::from_data(data));
        self.symbols.write().insert(key, symbols.clone());
        symbols
    }

    fn literals_for(&self, locale: &Locale, data: &MergedLocaleData) -> Arc<DateTimeLiterals> {
        let key = locale.name();
        if let Some(literals) = self.literals.read().get(&key) {
            return literals.clone();
        }
        let literals = Arc::new(DateTimeLiterals::from_data(data));
        self.literals.write().insert(key, literals.clone());
        literals
    }

    fn pattern_text(&self, data: &MergedLocaleData, kind: DateTimeKind, length: PatternLength) -> String {
        let date = |data: &MergedLocaleData| {
            data.lookup_text(&format!("calendar/dateFormats/{}", length.key()))
                .unwrap_or(match length {
                    PatternLength::Full => "EEEE, MMMM d, y",
                    PatternLength::Long => "MMMM d, y",
                    PatternLength::Medium => "MMM d, y",
                    PatternLength::Short => "M/d/yy",
                })
                .to_string()
        };
        let time = |data: &MergedLocaleData| {
            data.lookup_text(&format!("calendar/timeFormats/{}", length.key()))
                .unwrap_or(match length {
                    PatternLength::Full | PatternLength::Long | PatternLength::Medium => "h:mm:ss a",
                    PatternLength::Short => "h:mm a",
                })
                .to_string()
        };

        match kind {
            DateTimeKind::Date => date(data),
            DateTimeKind::Time => time(data),
            DateTimeKind::DateTime => {
                let glue = data
                    .lookup_text(&format!("calendar/dateTimeFormats/{}", length.key()))
                    .unwrap_or("{1} {0}");
                glue.replace("{1}", &date(data)).replace("{0}", &time(data))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    use super::*;
    use crate::data::testutil::{branch, leaf};
    use crate::data::{LocaleNode, NodeKey};
    use crate::error::NumberParseError;

    struct FixtureParser {
        trees: HashMap<String, LocaleNode>,
        calls: Arc<AtomicUsize>,
    }

    impl SourceParser for FixtureParser {
        fn parse(&self, source: &str) -> Result<LocaleNode, DataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.trees.get(source).cloned().ok_or_else(|| DataError::Source {
                source_name: source.to_string(),
                message: "unknown fixture".to_string(),
            })
        }
    }

    fn month_entries(prefix: &str) -> LocaleNode {
        let entries: Vec<(String, LocaleNode)> =
            (1..=12).map(|index| (index.to_string(), leaf(&format!("{prefix}{index}")))).collect();
        let borrowed: Vec<(&str, LocaleNode)> =
            entries.iter().map(|(key, node)| (key.as_str(), node.clone())).collect();
        branch(&borrowed)
    }

    fn root_tree() -> LocaleNode {
        let en_group = NodeKey::new("pluralRules").with_attr("locales", "en de").to_string();
        let one = NodeKey::new("pluralRule").with_attr("count", "one").to_string();
        let alias_key = NodeKey::new("alias")
            .with_attr("source", "locale")
            .with_attr("path", "../format")
            .to_string();

        branch(&[
            ("plurals", branch(&[(en_group.as_str(), branch(&[(one.as_str(), leaf("n is 1"))]))])),
            (
                "numbers",
                branch(&[
                    ("decimalFormat", leaf("#,##0.###")),
                    ("percentFormat", leaf("#,##0%")),
                    ("symbols", branch(&[("decimal", leaf(".")), ("group", leaf(","))])),
                ]),
            ),
            (
                "calendar",
                branch(&[
                    (
                        "months",
                        branch(&[
                            ("format", branch(&[("wide", month_entries("Month"))])),
                            ("stand-alone", branch(&[(alias_key.as_str(), leaf(""))])),
                        ]),
                    ),
                    ("dateFormats", branch(&[("short", leaf("M/d/yy")), ("long", leaf("MMMM d, y"))])),
                    ("timeFormats", branch(&[("short", leaf("HH:mm"))])),
                    ("dateTimeFormats", branch(&[("short", leaf("{1}, {0}"))])),
                ]),
            ),
        ])
    }

    fn de_tree() -> LocaleNode {
        branch(&[
            ("numbers", branch(&[("symbols", branch(&[("decimal", leaf(",")), ("group", leaf("."))]))])),
            ("calendar", branch(&[("dateFormats", branch(&[("short", leaf("dd.MM.yy"))]))])),
        ])
    }

    fn catalog() -> (LocaleCatalog, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut trees = HashMap::new();
        trees.insert("root".to_string(), root_tree());
        trees.insert("de".to_string(), de_tree());
        let parser = FixtureParser { trees, calls: calls.clone() };

        let sources = [("root", "root"), ("de", "de")]
            .map(|(stem, source)| (stem.to_string(), source.to_string()));
        (LocaleCatalog::new(Box::new(parser), sources), calls)
    }

    fn reference_instant() -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2013, 2, 12).unwrap(),
            NaiveTime::from_hms_opt(4, 30, 0).unwrap(),
        )
    }

    #[test]
    fn fallback_chain_skips_absent_intermediates() {
        let (catalog, _) = catalog();
        // de_DE has no file of its own: the chain is root, then de.
        let data = catalog.data(&Locale::parse("de_DE").unwrap()).unwrap();
        assert_eq!(data.lookup_text("numbers/symbols/decimal"), Some(","));
        // Root-only keys survive the merge.
        assert_eq!(data.lookup_text("numbers/decimalFormat"), Some("#,##0.###"));
    }

    #[test]
    fn missing_root_is_a_hard_error() {
        let parser = FixtureParser { trees: HashMap::new(), calls: Arc::new(AtomicUsize::new(0)) };
        let catalog = LocaleCatalog::new(Box::new(parser), [("en".to_string(), "en".to_string())]);
        assert!(matches!(
            catalog.data(&Locale::new("en")),
            Err(Error::Data(DataError::MissingRootLocale)),
        ));
    }

    #[test]
    fn plural_category_entry_point() {
        let (catalog, _) = catalog();
        let en = Locale::new("en");

        assert_eq!(catalog.plural_category(1.0, &en).unwrap(), PluralCategory::One);
        assert_eq!(catalog.plural_category(0.0, &en).unwrap(), PluralCategory::Other);
        assert_eq!(catalog.plural_category(2.0, &en).unwrap(), PluralCategory::Other);
        // Rulesets are global: a language with no rules is simply `other`.
        assert_eq!(catalog.plural_category(1.0, &Locale::new("ja")).unwrap(), PluralCategory::Other);
    }

    #[test]
    fn parse_number_entry_point() {
        let (catalog, _) = catalog();

        let parsed = catalog
            .parse_number("1,234.5", &Locale::new("en"), NumberPatternKind::Decimal, ParseMode::Strict)
            .unwrap();
        assert!((parsed - 1234.5).abs() < 1e-9);

        // German symbols come from the de overlay.
        let parsed = catalog
            .parse_number("1.234,5", &Locale::new("de"), NumberPatternKind::Decimal, ParseMode::Strict)
            .unwrap();
        assert!((parsed - 1234.5).abs() < 1e-9);

        let failure = catalog
            .parse_number("abc", &Locale::new("en"), NumberPatternKind::Decimal, ParseMode::Strict)
            .unwrap_err();
        assert!(matches!(failure, Error::NumberParse(NumberParseError::InvalidDigit('a'))));

        let parsed = catalog
            .parse_number(
                "$ 1234,56 EUR",
                &Locale::new("de"),
                NumberPatternKind::Decimal,
                ParseMode::Lenient,
            )
            .unwrap();
        assert!((parsed - 1234.56).abs() < 1e-9);
    }

    #[test]
    fn format_datetime_entry_point() {
        let (catalog, _) = catalog();
        let at = reference_instant();

        let en = Locale::new("en");
        assert_eq!(
            catalog.format_datetime(at, &en, DateTimeKind::Date, PatternLength::Short).unwrap(),
            "2/12/13",
        );
        // The wide month name comes from the root fixture data.
        assert_eq!(
            catalog.format_datetime(at, &en, DateTimeKind::Date, PatternLength::Long).unwrap(),
            "Month2 12, 2013",
        );
        // The glue pattern combines date and time.
        assert_eq!(
            catalog.format_datetime(at, &en, DateTimeKind::DateTime, PatternLength::Short).unwrap(),
            "2/12/13, 04:30",
        );

        // de overrides the short date format.
        let de = Locale::new("de");
        assert_eq!(
            catalog.format_datetime(at, &de, DateTimeKind::Date, PatternLength::Short).unwrap(),
            "12.02.13",
        );
    }

    #[test]
    fn standalone_months_resolve_through_the_alias() {
        let (catalog, _) = catalog();
        let data = catalog.data(&Locale::new("en")).unwrap();
        // The stand-alone subtree was aliased to format during load.
        assert_eq!(data.lookup_text("calendar/months/stand-alone/wide/3"), Some("Month3"));

        let literals = DateTimeLiterals::from_data(&data);
        assert_eq!(literals.months_standalone.wide[2], "Month3");
    }

    #[test]
    fn loads_are_cached_per_source_set() {
        let (catalog, calls) = catalog();
        let en = Locale::new("en");

        catalog.data(&en).unwrap();
        let after_first = calls.load(Ordering::SeqCst);
        catalog.data(&en).unwrap();
        catalog
            .format_datetime(reference_instant(), &en, DateTimeKind::Date, PatternLength::Short)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), after_first, "repeat loads must hit the cache");

        // A different chain (root + de) parses the extra source once.
        catalog.data(&Locale::new("de")).unwrap();
        assert!(calls.load(Ordering::SeqCst) > after_first);
    }
}
