//! Record table writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter, requires `csv-output`
//! - [`write_json`] / [`to_json`] - JSON array of records, requires `json-output`
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line, requires `json-output`
//!
//! Columns are chosen by [`OutputConfig`]: sender and message always, the
//! timestamp and the derived calendar fields on request.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::output::{OutputConfig, OutputFormat, to_csv, write_to_format};
//! use chatstat::Record;
//!
//! let records = vec![
//!     Record::new(None, "Alice", "Hello!"),
//!     Record::new(None, "Bob", "Hi there!"),
//! ];
//!
//! let config = OutputConfig::new().with_timestamps();
//! write_to_format(&records, "records.jsonl", OutputFormat::Jsonl, &config)?;
//!
//! let csv = to_csv(&records, &config)?;
//! assert!(csv.starts_with("Timestamp;Sender;Message"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use crate::error::{ChatstatError, Result};
use crate::record::Record;

/// Which optional columns the writers include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include the parsed timestamp
    pub include_timestamps: bool,
    /// Include date, year, month, day, weekday, hour and minute
    pub include_calendar: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    /// Every column on.
    pub fn all() -> Self {
        Self::new().with_timestamps().with_calendar()
    }
}

/// Output format of the record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,
    /// JSON array of records
    Json,
    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatstat::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Cargo feature that provides the writer.
    pub fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension.
    ///
    /// ```rust
    /// use chatstat::output::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/records.ndjson").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("records.xml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatstatError::invalid_output(format!(
                "Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"
            ))
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to `path` in `format`.
///
/// # Errors
///
/// Fails if the file cannot be written or the writer for `format` was not
/// compiled in.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[Record],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders records as a string in `format`.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[Record],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> ChatstatError {
    ChatstatError::invalid_output(format!(
        "{format} output requires the '{}' feature to be enabled",
        format.required_feature()
    ))
}

/// Timestamp layout used by every writer.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
