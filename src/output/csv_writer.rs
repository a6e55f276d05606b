//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{OutputConfig, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::record::Record;

const CALENDAR_COLUMNS: [&str; 8] = [
    "Date",
    "Year",
    "MonthNumber",
    "Month",
    "Day",
    "Weekday",
    "Hour",
    "Minute",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on [`OutputConfig`]
///   - Basic: `Sender`, `Message`
///   - With timestamps: `Timestamp` first
///   - With calendar: `Date` .. `Minute` last, empty for undated records
/// - Encoding: UTF-8
pub fn write_csv(records: &[Record], path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(path)?;
    write_records(records, file, config)
}

/// Renders records as a CSV string, same layout as [`write_csv`].
pub fn to_csv(records: &[Record], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(records: &[Record], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for record in records {
        writer.write_record(build_row(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }
    header.push("Sender");
    header.push("Message");
    if config.include_calendar {
        header.extend(CALENDAR_COLUMNS);
    }

    header
}

fn build_row(record: &Record, config: &OutputConfig) -> Vec<String> {
    let mut row = Vec::new();

    if config.include_timestamps {
        row.push(
            record
                .timestamp
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        );
    }

    row.push(record.sender.clone());
    row.push(record.message.clone());

    if config.include_calendar {
        match &record.calendar {
            Some(c) => row.extend([
                c.date.to_string(),
                c.year.to_string(),
                c.month_number.to_string(),
                c.month_name.to_string(),
                c.day.to_string(),
                c.weekday_name.to_string(),
                c.hour.to_string(),
                c.minute.to_string(),
            ]),
            None => row.extend(std::iter::repeat_n(String::new(), CALENDAR_COLUMNS.len())),
        }
    }

    row
}
