//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Layout`] - export layout picker, maps onto [`FormatSpec`]
//! - [`ExportFormat`] - record table format, maps onto [`OutputFormat`]
//!
//! ```rust
//! use chatstat::cli::Layout;
//! use chatstat::format::FormatSpec;
//!
//! assert_eq!(FormatSpec::from(Layout::Ios24h), FormatSpec::Ios24);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::UserSelection;
use crate::format::FormatSpec;
use crate::output::{OutputConfig, OutputFormat};

/// Parse a WhatsApp chat export and print activity statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt -l android-12h
    chatstat chat.txt -l ios-24h -u Alice
    chatstat chat.txt -l Android_24hour --json
    chatstat chat.txt -l ios-12h -o records.jsonl -f jsonl -t -c
    chatstat chat.txt -l android-12h --list-users
    chatstat chat.txt -l android-24h --links")]
pub struct Args {
    /// Path to the exported .txt file
    pub input: PathBuf,

    /// Device and clock format the export was made with
    #[arg(short, long, value_enum, ignore_case = true)]
    pub layout: Layout,

    /// Only analyze messages from this sender ("Overall" for everyone)
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// List every shared link in the text report
    #[arg(long)]
    pub links: bool,

    /// Also write the selected records to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format of the record file
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Include timestamps in the record file
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include derived calendar fields in the record file
    #[arg(short = 'c', long)]
    pub calendar: bool,

    /// Log parse details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn format_spec(&self) -> FormatSpec {
        self.layout.into()
    }

    pub fn selection(&self) -> UserSelection {
        UserSelection::from(self.user.clone())
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            include_timestamps: self.timestamps,
            include_calendar: self.calendar,
        }
    }
}

/// Export layout as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum Layout {
    /// Android, 12-hour clock: `1/1/23, 10:00 am - `
    #[value(name = "android-12h", alias = "Android_12hour")]
    #[serde(rename = "android-12h")]
    Android12h,

    /// Android, 24-hour clock: `1/1/23, 22:00 - `
    #[value(name = "android-24h", alias = "Android_24hour")]
    #[serde(rename = "android-24h")]
    Android24h,

    /// iOS, 12-hour clock: `[1/1/23, 10:00:00 PM] `
    #[value(name = "ios-12h", alias = "iOS_12hour")]
    #[serde(rename = "ios-12h")]
    Ios12h,

    /// iOS, 24-hour clock: `[1/1/23, 22:00:00] `
    #[value(name = "ios-24h", alias = "iOS_24hour")]
    #[serde(rename = "ios-24h")]
    Ios24h,
}

impl From<Layout> for FormatSpec {
    fn from(layout: Layout) -> FormatSpec {
        match layout {
            Layout::Android12h => FormatSpec::Android12,
            Layout::Android24h => FormatSpec::Android24,
            Layout::Ios12h => FormatSpec::Ios12,
            Layout::Ios24h => FormatSpec::Ios24,
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", FormatSpec::from(*self))
    }
}

/// Record table format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> OutputFormat {
        match format {
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}
