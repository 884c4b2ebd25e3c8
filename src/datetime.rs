//! Localized date/time formatting.
//!
//! ```text
//! "EEEE, MMMM d" ── compile ──▶ CompiledPattern
//!                                     │
//! NaiveDateTime ── format_datetime ───┤
//!                                     │
//! DateTimeLiterals (months, weekdays, eras, day periods) ──┘
//! ```
//!
//! The formatter walks the token stream once; all calendar arithmetic comes
//! from chrono's `Datelike`/`Timelike` views of the instant.

mod format;
mod literals;
#[cfg(test)]
mod tests;

pub use format::format_datetime;
pub use literals::{DateTimeLiterals, NameTable, NameWidth};
