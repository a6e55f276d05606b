//! Export parser: raw text in, records out.
//!
//! [`ExportParser`] runs the stages of [`parsing`](crate::parsing) over an
//! export: split on delimiters, parse each timestamp, separate sender from
//! message, derive calendar fields. Per-entry problems never abort the run;
//! an unreadable timestamp becomes `None` and text in the wrong layout simply
//! produces no records. Use [`validate_records`] to turn those outcomes into
//! errors when a caller wants to refuse them.
//!
//! # Example
//!
//! ```rust
//! use chatstat::format::FormatSpec;
//! use chatstat::parser::preprocess;
//!
//! # fn main() -> chatstat::Result<()> {
//! let text = "1/1/23, 10:00 am - Alice: Hi there\n\
//!             1/1/23, 10:05 am - Bob: <Media omitted>\n\
//!             1/1/23, 10:06 am - Alice left\n";
//!
//! let records = preprocess(text, FormatSpec::Android12)?;
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[2].sender, "SYSTEM");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};
use crate::format::FormatSpec;
use crate::parsing::{Entry, Segmenter, classify, normalize_timestamp};
use crate::record::Record;

/// Parser for one export layout.
///
/// Holds the compiled delimiter pattern; build once, parse many exports.
/// Parsing takes `&self` and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct ExportParser {
    config: ParserConfig,
    segmenter: Segmenter,
}

impl ExportParser {
    /// Creates a parser for `format` with default configuration.
    pub fn new(format: FormatSpec) -> Result<Self> {
        Self::with_config(ParserConfig::new(format))
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let segmenter = Segmenter::new(config.format)?;
        Ok(Self { config, segmenter })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn format(&self) -> FormatSpec {
        self.config.format
    }

    /// Reads a UTF-8 export file and parses it.
    pub fn parse(&self, path: &Path) -> Result<Vec<Record>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| ChatstatError::Utf8 {
            context: format!("export file {}", path.display()),
            source,
        })?;
        Ok(self.parse_str(&text))
    }

    /// Parses export text that is already in memory.
    ///
    /// Returns one record per delimiter match in export order (unless the
    /// configuration skips some). An empty result means no delimiter of the
    /// selected layout was found.
    pub fn parse_str(&self, text: &str) -> Vec<Record> {
        let format = self.format();
        let mut records = Vec::new();
        let mut entries = 0usize;
        let mut unparsed = 0usize;

        for entry in self.segmenter.entries(text) {
            entries += 1;
            let record = entry_to_record(entry, format);

            if record.timestamp.is_none() {
                unparsed += 1;
                if self.config.skip_unparsed_timestamps {
                    continue;
                }
            }
            if self.config.skip_system_messages && record.is_system() {
                continue;
            }
            records.push(record);
        }

        if entries == 0 {
            warn!(%format, bytes = text.len(), "no entries matched the selected layout");
        } else if unparsed > 0 {
            warn!(%format, unparsed, entries, "some timestamps could not be parsed");
        }
        if !self.config.keeps_all_entries() {
            debug!(%format, skipped = entries - records.len(), "skipped entries by configuration");
        }
        debug!(%format, entries, records = records.len(), "parsed export");

        records
    }
}

/// Classifies one entry and derives its fields.
fn entry_to_record(entry: Entry<'_>, format: FormatSpec) -> Record {
    let timestamp = normalize_timestamp(entry.timestamp, format);
    let (sender, message) = classify(entry.body);
    Record::new(timestamp, sender, message)
}

/// Parses `text` as `format` with default configuration.
///
/// Pure function of its inputs: the same text and layout always give the
/// same records.
pub fn preprocess(text: &str, format: FormatSpec) -> Result<Vec<Record>> {
    Ok(ExportParser::new(format)?.parse_str(text))
}

/// Checks that a parse produced something usable.
///
/// - no records: [`ChatstatError::FormatMismatch`]
/// - no record with a timestamp: [`ChatstatError::AllTimestampsNull`]
///
/// Both almost always mean the wrong device or clock format was selected.
pub fn validate_records(records: &[Record], format: FormatSpec) -> Result<()> {
    if records.is_empty() {
        return Err(ChatstatError::format_mismatch(format));
    }
    if records.iter().all(|r| r.timestamp.is_none()) {
        return Err(ChatstatError::all_timestamps_null(format, records.len()));
    }
    Ok(())
}
