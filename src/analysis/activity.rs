//! Activity over time: monthly timeline and weekday distribution.

use std::collections::BTreeMap;

use serde::Serialize;

use super::UserSelection;
use super::rank::rank;
use crate::record::Record;

/// Weekday names, Monday first.
const WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub year: i32,
    pub month_number: u32,
    pub month_name: &'static str,
    pub messages: usize,
    /// Display label, `"{year}-{month_name}"`
    pub label: String,
}

/// Counts messages per (year, month), oldest month first.
///
/// Months without messages are absent. Records without a timestamp are
/// skipped.
///
/// ```
/// use chatstat::analysis::{UserSelection, timeline};
/// use chatstat::format::FormatSpec;
/// use chatstat::parser::preprocess;
///
/// # fn main() -> chatstat::Result<()> {
/// let text = "5/3/24, 9:00 - Alice: hi\n1/1/24, 9:00 - Bob: hey\n2/1/24, 9:00 - Bob: yo\n";
/// let records = preprocess(text, FormatSpec::Android24)?;
///
/// let points = timeline(&records, &UserSelection::Overall);
/// let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
/// assert_eq!(labels, ["2024-January", "2024-March"]);
/// assert_eq!(points[0].messages, 2);
/// # Ok(())
/// # }
/// ```
pub fn timeline(records: &[Record], selection: &UserSelection) -> Vec<TimelinePoint> {
    let mut months: BTreeMap<(i32, u32), (&'static str, usize)> = BTreeMap::new();

    for calendar in selection.filter(records).filter_map(|r| r.calendar.as_ref()) {
        months
            .entry((calendar.year, calendar.month_number))
            .or_insert((calendar.month_name, 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_number), (month_name, messages))| TimelinePoint {
            year,
            month_number,
            month_name,
            messages,
            label: format!("{year}-{month_name}"),
        })
        .collect()
}

/// Messages sent on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub weekday: &'static str,
    pub messages: usize,
}

/// Result of [`week_activity_map`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekActivity {
    days: Vec<DayCount>,
}

impl WeekActivity {
    /// Weekdays that have messages, busiest first.
    pub fn ranked(&self) -> &[DayCount] {
        &self.days
    }

    /// All seven weekdays, Monday first, zero where nothing was sent.
    pub fn in_week_order(&self) -> Vec<DayCount> {
        WEEK.iter()
            .map(|&weekday| DayCount {
                weekday,
                messages: self.get(weekday),
            })
            .collect()
    }

    /// Message count for `weekday` (English name), zero if absent.
    pub fn get(&self, weekday: &str) -> usize {
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map_or(0, |d| d.messages)
    }

    /// Busiest weekday, `None` when no record has a timestamp.
    pub fn busiest(&self) -> Option<&DayCount> {
        self.days.first()
    }

    pub fn total(&self) -> usize {
        self.days.iter().map(|d| d.messages).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Counts messages per weekday.
///
/// Records without a timestamp are skipped. Equal counts keep first-seen
/// order in [`WeekActivity::ranked`].
pub fn week_activity_map(records: &[Record], selection: &UserSelection) -> WeekActivity {
    let days = rank(selection.filter(records).filter_map(Record::weekday_name))
        .into_iter()
        .map(|(weekday, messages)| DayCount { weekday, messages })
        .collect();

    WeekActivity { days }
}
