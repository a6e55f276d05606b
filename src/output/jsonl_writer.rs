//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::OutputConfig;
use super::json_writer::JsonRecord;
use crate::error::Result;
use crate::record::Record;

/// Writes records in JSONL format, one object per line.
///
/// ```jsonl
/// {"sender":"Alice","message":"Hello"}
/// {"sender":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(records: &[Record], path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a JSONL string, same format as [`write_jsonl`].
pub fn to_jsonl(records: &[Record], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(records: &[Record], sink: &mut W, config: &OutputConfig) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(&JsonRecord::new(record, config))?;
        writeln!(sink, "{line}")?;
    }
    Ok(())
}
