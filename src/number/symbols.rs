//! Localized number symbols.

use crate::data::MergedLocaleData;

/// Separators and sign affixes for one locale. Read-only once built.
///
/// Affixes are literal substrings; an empty pair means "no affix required"
/// (the usual case for positive numbers). The defaults are the root-locale
/// conventions, so a locale tree only needs to override what differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: String,
    pub group: String,
    pub positive_prefix: String,
    pub positive_suffix: String,
    pub negative_prefix: String,
    pub negative_suffix: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal: ".".to_string(),
            group: ",".to_string(),
            positive_prefix: String::new(),
            positive_suffix: String::new(),
            negative_prefix: "-".to_string(),
            negative_suffix: String::new(),
        }
    }
}

impl NumberSymbols {
    /// Build from the `numbers/symbols` subtree of merged data, falling back
    /// to the defaults field by field. The negative prefix honours an
    /// explicit `negativePrefix` first and the plain `minusSign` second.
    pub fn from_data(data: &MergedLocaleData) -> Self {
        let mut symbols = Self::default();
        let read = |path: &str| data.lookup_text(path).map(str::to_string);

        if let Some(decimal) = read("numbers/symbols/decimal") {
            symbols.decimal = decimal;
        }
        if let Some(group) = read("numbers/symbols/group") {
            symbols.group = group;
        }
        if let Some(prefix) = read("numbers/symbols/negativePrefix").or_else(|| read("numbers/symbols/minusSign")) {
            symbols.negative_prefix = prefix;
        }
        if let Some(suffix) = read("numbers/symbols/negativeSuffix") {
            symbols.negative_suffix = suffix;
        }
        if let Some(prefix) = read("numbers/symbols/positivePrefix") {
            symbols.positive_prefix = prefix;
        }
        if let Some(suffix) = read("numbers/symbols/positiveSuffix") {
            symbols.positive_suffix = suffix;
        }
        symbols
    }
}
