//! Parsed chat records.
//!
//! A [`Record`] is one fully processed entry of an export: when it was sent,
//! who sent it and what was said. Calendar fields used for grouping (month,
//! weekday, hour, ...) are derived once from the timestamp and stored in
//! [`CalendarFields`], so aggregators never re-derive them.
//!
//! # Example
//!
//! ```
//! use chatstat::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 0)
//!     .unwrap();
//! let record = Record::new(Some(ts), "Alice", "Hello!");
//!
//! assert_eq!(record.year(), Some(2024));
//! assert_eq!(record.month_name(), Some("January"));
//! assert_eq!(record.weekday_name(), Some("Monday"));
//! assert!(!record.is_system());
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Sender recorded for entries without a `"sender: "` prefix.
///
/// Covers join/leave notices, the encryption banner and other lines that
/// WhatsApp writes on its own behalf.
pub const SYSTEM_SENDER: &str = "SYSTEM";

const MONTH_NAMES: [&str; 12] = [
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
];

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English name of a month, `month` in `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Calendar fields derived from a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    pub date: NaiveDate,
    pub year: i32,
    /// 1 through 12
    pub month_number: u32,
    pub month_name: &'static str,
    pub day: u32,
    pub weekday_name: &'static str,
    /// 0 through 23
    pub hour: u32,
    /// 0 through 59
    pub minute: u32,
}

impl CalendarFields {
    /// Derives every field from `ts`. Pure: nothing else is consulted.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        let date = ts.date();
        Self {
            date,
            year: date.year(),
            month_number: date.month(),
            // month() is always 1..=12
            month_name: MONTH_NAMES[date.month0() as usize],
            day: date.day(),
            weekday_name: weekday_name(date.weekday()),
            hour: ts.hour(),
            minute: ts.minute(),
        }
    }
}

/// A chat entry split into timestamp, sender and message.
///
/// `calendar` is `Some` exactly when `timestamp` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// When the message was sent, `None` if the timestamp was unreadable.
    pub timestamp: Option<NaiveDateTime>,

    /// Display name of the author, or [`SYSTEM_SENDER`].
    pub sender: String,

    /// Message text, trimmed. May span several lines.
    pub message: String,

    /// Fields derived from `timestamp`.
    #[serde(flatten)]
    pub calendar: Option<CalendarFields>,
}

impl Record {
    /// Creates a record and derives its calendar fields.
    pub fn new(
        timestamp: Option<NaiveDateTime>,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            message: message.into(),
            calendar: timestamp.map(CalendarFields::from_timestamp),
        }
    }

    /// Creates a system notification record.
    pub fn system(timestamp: Option<NaiveDateTime>, message: impl Into<String>) -> Self {
        Self::new(timestamp, SYSTEM_SENDER, message)
    }

    /// Returns `true` if this entry had no sender prefix.
    pub fn is_system(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }

    /// Returns `true` if the message is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.calendar.as_ref().map(|c| c.date)
    }

    pub fn year(&self) -> Option<i32> {
        self.calendar.as_ref().map(|c| c.year)
    }

    pub fn month_number(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.month_number)
    }

    pub fn month_name(&self) -> Option<&'static str> {
        self.calendar.as_ref().map(|c| c.month_name)
    }

    pub fn day(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.day)
    }

    pub fn weekday_name(&self) -> Option<&'static str> {
        self.calendar.as_ref().map(|c| c.weekday_name)
    }

    pub fn hour(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.hour)
    }

    pub fn minute(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.minute)
    }
}
