//! # Chatstat
//!
//! A Rust library for parsing WhatsApp text exports into typed records and
//! computing chat statistics over them.
//!
//! ## Overview
//!
//! WhatsApp writes exports as plain text, one timestamp-prefixed entry per
//! message, in a layout that depends on the exporting device and its clock
//! setting. Chatstat reads all four layouts:
//!
//! | Layout | Example |
//! |--------|---------|
//! | Android, 12-hour | `15/01/24, 10:30 pm - Alice: Hi` |
//! | Android, 24-hour | `15/01/24, 22:30 - Alice: Hi` |
//! | iOS, 12-hour | `[15/01/24, 10:30:45 PM] Alice: Hi` |
//! | iOS, 24-hour | `[15/01/2024, 22:30:45] Alice: Hi` |
//!
//! Parsing never fails on a single bad line: an unreadable timestamp becomes
//! `None`, a line without a sender becomes a [`SYSTEM`](SYSTEM_SENDER)
//! record, and text in the wrong layout produces no records at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "1/1/23, 10:00 am - Alice: Hi there\n\
//!                 1/1/23, 10:05 am - Bob: <Media omitted>\n\
//!                 1/1/23, 10:06 am - Alice left\n";
//!
//!     let records = preprocess(text, FormatSpec::Android12)?;
//!     validate_records(&records, FormatSpec::Android12)?;
//!
//!     let stats = fetch_stats(&records, &UserSelection::Overall);
//!     assert_eq!(stats.messages, 3);
//!     assert_eq!(stats.media, 1);
//!
//!     let active = fetch_most_active_users(&records, &UserSelection::Overall);
//!     assert_eq!(active.top[0].sender, "Alice");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`format`] — [`FormatSpec`](format::FormatSpec), the four export layouts
//! - [`parsing`] — segmentation, timestamp cleanup, sender classification
//! - [`parser`] — [`ExportParser`](parser::ExportParser), [`preprocess`](parser::preprocess),
//!   [`validate_records`](parser::validate_records)
//! - [`record`] — [`Record`] and its derived calendar fields
//! - [`analysis`] — aggregators and the combined [`Report`](analysis::Report)
//! - [`config`] — parser and analysis configuration
//! - [`output`] — CSV / JSON / JSONL record writers
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — [`ChatstatError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use parser::{preprocess, validate_records};
pub use record::{Record, SYSTEM_SENDER};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::record::{CalendarFields, Record, SYSTEM_SENDER};

    pub use crate::error::{ChatstatError, Result};

    pub use crate::format::{ClockFormat, Device, FormatSpec};

    pub use crate::parser::{ExportParser, preprocess, validate_records};

    pub use crate::config::{AnalysisConfig, MEDIA_PLACEHOLDER, ParserConfig};

    pub use crate::analysis::{
        Analyzer, Report, UserSelection, emoji_helper, fetch_most_active_users, fetch_stats,
        most_common_words, selectable_users, timeline, week_activity_map, wordcloud_corpus,
    };

    pub use crate::output::{OutputConfig, OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
