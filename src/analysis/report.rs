//! All aggregates for one selection, bundled for display or serialization.

use serde::Serialize;
use tracing::debug;

use super::{
    ActiveUsers, Analyzer, ChatStats, DayCount, EmojiCount, TimelinePoint, UserSelection,
    WordCount, timeline, week_activity_map,
};
use crate::record::Record;

/// Everything the dashboard shows for one user selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `"Overall"` or the selected sender
    pub selection: String,
    pub stats: ChatStats,
    /// Present only for the overall view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_users: Option<ActiveUsers>,
    pub common_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
    pub timeline: Vec<TimelinePoint>,
    /// Monday first, zero-filled
    pub week_activity: Vec<DayCount>,
    /// Weekday with the most messages, first seen on ties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_day: Option<DayCount>,
}

pub(super) fn build(analyzer: &Analyzer, records: &[Record], selection: &UserSelection) -> Report {
    let active_users = selection
        .is_overall()
        .then(|| analyzer.fetch_most_active_users(records, selection));

    let week = week_activity_map(records, selection);

    let report = Report {
        selection: selection.to_string(),
        stats: analyzer.fetch_stats(records, selection),
        active_users,
        common_words: analyzer.most_common_words(records, selection),
        emojis: analyzer.emoji_helper(records, selection),
        timeline: timeline(records, selection),
        week_activity: week.in_week_order(),
        busiest_day: week.busiest().cloned(),
    };

    debug!(
        selection = %report.selection,
        messages = report.stats.messages,
        dated = week.total(),
        months = report.timeline.len(),
        "built report"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatSpec;
    use crate::parser::preprocess;

    const SAMPLE: &str = "1/1/23, 10:00 am - Alice: Hi there 😀\n\
                          1/1/23, 10:05 am - Bob: <Media omitted>\n\
                          1/1/23, 10:06 am - Alice left\n";

    #[test]
    fn test_overall_report() {
        let records = preprocess(SAMPLE, FormatSpec::Android12).unwrap();
        let report = Analyzer::new().report(&records, &UserSelection::Overall);

        assert_eq!(report.selection, "Overall");
        assert_eq!(report.stats.messages, 3);
        assert_eq!(report.stats.media, 1);
        assert!(report.active_users.is_some());
        assert_eq!(report.emojis.len(), 1);
        assert_eq!(report.timeline.len(), 1);
        assert_eq!(report.timeline[0].label, "2023-January");
        assert_eq!(report.week_activity.len(), 7);
        // 2023-01-01 is a Sunday
        assert_eq!(report.week_activity[6].messages, 3);
        let busiest = report.busiest_day.unwrap();
        assert_eq!((busiest.weekday, busiest.messages), ("Sunday", 3));
    }

    #[test]
    fn test_undated_report_has_no_busiest_day() {
        let records = vec![Record::new(None, "Alice", "hi")];
        let report = Analyzer::new().report(&records, &UserSelection::Overall);
        assert!(report.busiest_day.is_none());
        assert!(report.week_activity.iter().all(|d| d.messages == 0));
    }

    #[test]
    fn test_user_report_has_no_active_users() {
        let records = preprocess(SAMPLE, FormatSpec::Android12).unwrap();
        let report = Analyzer::new().report(&records, &UserSelection::from("Alice"));
        assert_eq!(report.selection, "Alice");
        assert_eq!(report.stats.messages, 1);
        assert!(report.active_users.is_none());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_report_serializes() {
        let records = preprocess(SAMPLE, FormatSpec::Android12).unwrap();
        let report = Analyzer::new().report(&records, &UserSelection::from("Bob"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["stats"]["media"], 1);
        assert!(json.get("active_users").is_none());
        assert_eq!(json["week_activity"][0]["weekday"], "Monday");
    }
}
