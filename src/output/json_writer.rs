//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::{OutputConfig, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::record::{CalendarFields, Record};

/// Record shape shared by the JSON and JSONL writers.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    sender: &'a str,
    message: &'a str,
    #[serde(flatten)]
    calendar: Option<&'a CalendarFields>,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn new(record: &'a Record, config: &OutputConfig) -> Self {
        Self {
            timestamp: if config.include_timestamps {
                record
                    .timestamp
                    .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            } else {
                None
            },
            sender: &record.sender,
            message: &record.message,
            calendar: if config.include_calendar {
                record.calendar.as_ref()
            } else {
                None
            },
        }
    }
}

/// Writes records to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "message": "Hello"},
///   {"sender": "Bob", "message": "Hi"}
/// ]
/// ```
pub fn write_json(records: &[Record], path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Renders records as a JSON array string, same format as [`write_json`].
pub fn to_json(records: &[Record], config: &OutputConfig) -> Result<String> {
    let rows: Vec<JsonRecord<'_>> = records.iter().map(|r| JsonRecord::new(r, config)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
