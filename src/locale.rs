//! Locale identifiers and fallback chains.

use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// A locale identifier: a language subtag plus optional script and region.
///
/// The canonical form uses underscores (`en`, `en_GB`, `zh_Hans_CN`) and is
/// usable both as a map key and as a filename-stem lookup into a locale data
/// directory. Parsing accepts `-` or `_` between subtags.
///
/// # Example
/// ```
/// use glotta::Locale;
///
/// let locale = Locale::parse("en-GB").unwrap();
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.name(), "en_GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// A language-only locale.
    pub fn new(language: &str) -> Self {
        Self { language: language.to_lowercase(), script: None, region: None }
    }

    /// A language + region locale.
    pub fn with_region(language: &str, region: &str) -> Self {
        Self { language: language.to_lowercase(), script: None, region: Some(region.to_uppercase()) }
    }

    /// The sentinel locale whose data file anchors every fallback chain.
    pub fn root() -> Self {
        Self { language: "root".to_string(), script: None, region: None }
    }

    /// Parse a tag like `en`, `en-GB`, `zh_Hans_CN`.
    ///
    /// Subtags are recognized by shape: 2-3 letters = language, 4 letters =
    /// script (title-cased), 2 letters or 3 digits = region.
    pub fn parse(tag: &str) -> Result<Self, DataError> {
        if tag == "root" {
            return Ok(Self::root());
        }

        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DataError::InvalidLocale(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;
        for part in parts {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                script = Some(titlecase(part));
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                region = Some(part.to_string());
            } else {
                return Err(DataError::InvalidLocale(tag.to_string()));
            }
        }

        Ok(Self { language: language.to_lowercase(), script, region })
    }

    /// The language subtag (`en` in `en_GB`).
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Canonical underscore-joined name (`en_GB`), also the filename stem.
    pub fn name(&self) -> String {
        let mut name = self.language.clone();
        if let Some(script) = &self.script {
            name.push('_');
            name.push_str(script);
        }
        if let Some(region) = &self.region {
            name.push('_');
            name.push_str(region);
        }
        name
    }

    /// The fallback chain for this locale, most specific first, always ending
    /// at `root`.
    ///
    /// # Example
    /// ```
    /// use glotta::Locale;
    ///
    /// let chain: Vec<String> = Locale::parse("en_GB").unwrap().fallback_chain().collect();
    /// assert_eq!(chain, ["en_GB", "en", "root"]);
    /// ```
    pub fn fallback_chain(&self) -> FallbackChain {
        FallbackChain::new(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Locale {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn titlecase(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Iterator over increasingly generic locale names, terminating at `root`.
///
/// Each step drops the rightmost (least significant) subtag; the sentinel
/// `root` is always the final element, so the chain is finite for every
/// input. Absence of an intermediate file is the caller's concern: the chain
/// itself only names candidates.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    names: std::vec::IntoIter<String>,
}

impl FallbackChain {
    fn new(locale: &Locale) -> Self {
        let mut subtags: Vec<&str> = Vec::with_capacity(3);
        subtags.push(locale.language());
        if let Some(script) = locale.script() {
            subtags.push(script);
        }
        if let Some(region) = locale.region() {
            subtags.push(region);
        }

        let mut names = Vec::with_capacity(subtags.len() + 1);
        while !subtags.is_empty() {
            names.push(subtags.join("_"));
            subtags.pop();
        }
        if names.last().map(String::as_str) != Some("root") {
            names.push("root".to_string());
        }

        Self { names: names.into_iter() }
    }
}

impl Iterator for FallbackChain {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.names.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_separators() {
        let cases: Vec<(&str, &str)> = vec![
            ("en", "en"),
            ("EN", "en"),
            ("en-GB", "en_GB"),
            ("en_gb", "en_GB"),
            ("zh-hans-cn", "zh_Hans_CN"),
            ("es-419", "es_419"),
            ("root", "root"),
        ];
        for (input, expected) in cases {
            assert_eq!(Locale::parse(input).unwrap().name(), expected, "tag {input}");
        }
    }

    #[test]
    fn parse_rejects_junk() {
        for tag in ["", "x", "toolong", "en-Q!", "en-Latn-GB-whatever"] {
            assert!(Locale::parse(tag).is_err(), "tag {tag}");
        }
    }

    #[test]
    fn fallback_chain_terminates_at_root() {
        let chain: Vec<String> = Locale::parse("zh_Hans_CN").unwrap().fallback_chain().collect();
        assert_eq!(chain, ["zh_Hans_CN", "zh_Hans", "zh", "root"]);

        // A locale with nothing to strip still reaches root.
        let chain: Vec<String> = Locale::new("ja").fallback_chain().collect();
        assert_eq!(chain, ["ja", "root"]);

        // root itself is not duplicated.
        let chain: Vec<String> = Locale::root().fallback_chain().collect();
        assert_eq!(chain, ["root"]);
    }
}
