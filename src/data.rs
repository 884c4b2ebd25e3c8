//! Locale-data model and resolution.
//!
//! Loading locale data is a pipeline:
//!
//! ```text
//! sources ── SourceParser ──▶ LocaleNode trees     (node.rs)
//!                               │
//!                               ▼  left-to-right, most generic first
//!                         merge_all                (merge.rs)
//!                               │
//!                               ▼  one top-down pass
//!                         resolve_aliases          (alias.rs)
//!                               │
//!                               ▼
//!                       MergedLocaleData ──▶ cache (repository.rs)
//! ```
//!
//! Everything downstream (plural rulesets, symbol and literal tables,
//! default patterns) reads the merged tree through `lookup`, where a miss is
//! an `Option`, not an error: missing entries mean "fall back", by design.

mod alias;
mod merge;
mod node;
mod repository;

pub use merge::{merge, merge_all};
pub use node::{Branch, LocaleNode, NodeKey};
pub use repository::{LocaleRepository, MergedLocaleData, SourceParser};
