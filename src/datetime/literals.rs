//! Localized name tables for date/time formatting.

use crate::data::MergedLocaleData;

/// Name-length class selected by a field's width: up to 3 repetitions is
/// abbreviated, 4 is wide, 5 and beyond is narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameWidth {
    Abbreviated,
    Wide,
    Narrow,
}

impl NameWidth {
    pub(crate) fn from_field_width(width: usize) -> Self {
        match width {
            0..=3 => NameWidth::Abbreviated,
            4 => NameWidth::Wide,
            _ => NameWidth::Narrow,
        }
    }
}

/// One set of names in three width classes, indexed 0-based.
///
/// Narrow names are frequently absent from locale data; lookup falls back
/// narrow → abbreviated → wide so a thin locale still formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    pub abbreviated: Vec<String>,
    pub wide: Vec<String>,
    pub narrow: Vec<String>,
}

impl NameTable {
    fn from_strs(abbreviated: &[&str], wide: &[&str], narrow: &[&str]) -> Self {
        let own = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();
        Self { abbreviated: own(abbreviated), wide: own(wide), narrow: own(narrow) }
    }

    pub fn get(&self, width: NameWidth, index: usize) -> Option<&str> {
        let name = match width {
            NameWidth::Abbreviated => self.abbreviated.get(index).or_else(|| self.wide.get(index)),
            NameWidth::Wide => self.wide.get(index).or_else(|| self.abbreviated.get(index)),
            NameWidth::Narrow => self
                .narrow
                .get(index)
                .or_else(|| self.abbreviated.get(index))
                .or_else(|| self.wide.get(index)),
        };
        name.map(String::as_str)
    }
}

/// All localized literals the formatter needs. Built once per locale from
/// merged data and immutable afterwards.
///
/// Months and quarters carry separate "format" (inflected, used inside a
/// date) and "stand-alone" tables; the remaining kinds only have a format
/// table. Defaults are the root-locale (English) names, so partially
/// populated trees degrade field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeLiterals {
    pub months_format: NameTable,
    pub months_standalone: NameTable,
    /// Indexed 0 = Sunday.
    pub weekdays: NameTable,
    pub quarters_format: NameTable,
    pub quarters_standalone: NameTable,
    /// Indexed 0 = before the epoch, 1 = after.
    pub eras: NameTable,
    /// Indexed 0 = AM, 1 = PM.
    pub day_periods: NameTable,
}

impl Default for DateTimeLiterals {
    fn default() -> Self {
        let months = NameTable::from_strs(
            &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
            &[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            &["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
        );
        let quarters = NameTable::from_strs(
            &["Q1", "Q2", "Q3", "Q4"],
            &["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
            &["1", "2", "3", "4"],
        );
        Self {
            months_standalone: months.clone(),
            months_format: months,
            weekdays: NameTable::from_strs(
                &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
                &["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
                &["S", "M", "T", "W", "T", "F", "S"],
            ),
            quarters_standalone: quarters.clone(),
            quarters_format: quarters,
            eras: NameTable::from_strs(&["BC", "AD"], &["Before Christ", "Anno Domini"], &["B", "A"]),
            day_periods: NameTable::from_strs(&["AM", "PM"], &["AM", "PM"], &["a", "p"]),
        }
    }
}

impl DateTimeLiterals {
    /// Build from the `calendar` subtree of merged data.
    ///
    /// Stand-alone tables start from the locale's format table (not the
    /// defaults), so data that only ships format names — or aliases
    /// stand-alone to format — behaves the same way.
    pub fn from_data(data: &MergedLocaleData) -> Self {
        let mut literals = Self::default();

        overlay(&mut literals.months_format, data, "calendar/months/format");
        literals.months_standalone = literals.months_format.clone();
        overlay(&mut literals.months_standalone, data, "calendar/months/stand-alone");

        overlay(&mut literals.weekdays, data, "calendar/days/format");

        overlay(&mut literals.quarters_format, data, "calendar/quarters/format");
        literals.quarters_standalone = literals.quarters_format.clone();
        overlay(&mut literals.quarters_standalone, data, "calendar/quarters/stand-alone");

        if let Some(names) = read_names(data, "calendar/eras/eraAbbr") {
            literals.eras.abbreviated = names;
        }
        if let Some(names) = read_names(data, "calendar/eras/eraNames") {
            literals.eras.wide = names;
        }
        if let Some(names) = read_names(data, "calendar/eras/eraNarrow") {
            literals.eras.narrow = names;
        }

        overlay(&mut literals.day_periods, data, "calendar/dayPeriods/format");

        literals
    }
}

fn overlay(table: &mut NameTable, data: &MergedLocaleData, base: &str) {
    if let Some(names) = read_names(data, &format!("{base}/abbreviated")) {
        table.abbreviated = names;
    }
    if let Some(names) = read_names(data, &format!("{base}/wide")) {
        table.wide = names;
    }
    if let Some(names) = read_names(data, &format!("{base}/narrow")) {
        table.narrow = names;
    }
}

/// Leaf children of a branch, in insertion order (data files list them in
/// index order: month 1..12, day sun..sat, am/pm).
fn read_names(data: &MergedLocaleData, path: &str) -> Option<Vec<String>> {
    let branch = data.lookup(path)?.as_branch()?;
    let names: Vec<String> =
        branch.iter().filter_map(|(_, node)| node.text().map(str::to_string)).collect();
    if names.is_empty() { None } else { Some(names) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_classes() {
        assert_eq!(NameWidth::from_field_width(1), NameWidth::Abbreviated);
        assert_eq!(NameWidth::from_field_width(3), NameWidth::Abbreviated);
        assert_eq!(NameWidth::from_field_width(4), NameWidth::Wide);
        assert_eq!(NameWidth::from_field_width(5), NameWidth::Narrow);
        assert_eq!(NameWidth::from_field_width(7), NameWidth::Narrow);
    }

    #[test]
    fn narrow_falls_back_to_abbreviated_then_wide() {
        let mut table = NameTable::default();
        table.wide = vec!["January".to_string()];
        assert_eq!(table.get(NameWidth::Narrow, 0), Some("January"));
        assert_eq!(table.get(NameWidth::Abbreviated, 0), Some("January"));

        table.abbreviated = vec!["Jan".to_string()];
        assert_eq!(table.get(NameWidth::Narrow, 0), Some("Jan"));

        table.narrow = vec!["J".to_string()];
        assert_eq!(table.get(NameWidth::Narrow, 0), Some("J"));
        assert_eq!(table.get(NameWidth::Wide, 1), None);
    }

    #[test]
    fn defaults_cover_every_index() {
        let literals = DateTimeLiterals::default();
        assert_eq!(literals.months_format.get(NameWidth::Wide, 0), Some("January"));
        assert_eq!(literals.months_format.get(NameWidth::Abbreviated, 11), Some("Dec"));
        assert_eq!(literals.weekdays.get(NameWidth::Wide, 6), Some("Saturday"));
        assert_eq!(literals.quarters_format.get(NameWidth::Abbreviated, 3), Some("Q4"));
        assert_eq!(literals.eras.get(NameWidth::Abbreviated, 1), Some("AD"));
        assert_eq!(literals.day_periods.get(NameWidth::Abbreviated, 0), Some("AM"));
    }
}
