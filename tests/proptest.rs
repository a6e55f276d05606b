//! Property-based tests for chatstat.
//!
//! These tests generate random exports and record sets to find edge cases.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;

use chatstat::analysis::UserSelection;
use chatstat::prelude::*;

const SENDERS: [&str; 6] = ["Alice", "Bob", "Charlie", "User123", "Иван", "村上"];

/// Generate a random message body using fast strategies (no regex!)
fn arb_text() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Hi there!".to_string(),
        "How are you?".to_string(),
        "Good morning".to_string(),
        "Привет мир".to_string(),
        "<Media omitted>".to_string(),
        "look www.example.com".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "two\nlines".to_string(),
        "note: colon inside".to_string(),
    ])
}

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2030, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

/// One entry: timestamp, sender (None = system notice), body.
fn arb_entry() -> impl Strategy<Value = (NaiveDateTime, Option<&'static str>, String)> {
    (
        arb_timestamp(),
        prop::option::weighted(0.9, prop::sample::select(SENDERS.to_vec())),
        arb_text(),
    )
}

fn arb_format() -> impl Strategy<Value = FormatSpec> {
    prop::sample::select(FormatSpec::all().to_vec())
}

/// Renders a timestamp the way `format` writes it.
fn render(format: FormatSpec, ts: NaiveDateTime) -> String {
    match format {
        FormatSpec::Android12 => ts.format("%-d/%-m/%y, %-I:%M %P - ").to_string(),
        FormatSpec::Android24 => ts.format("%-d/%-m/%y, %-H:%M - ").to_string(),
        FormatSpec::Ios12 => ts.format("[%-d/%-m/%y, %-I:%M:%S %p] ").to_string(),
        FormatSpec::Ios24 => ts.format("[%d/%m/%Y, %H:%M:%S] ").to_string(),
    }
}

fn render_export(format: FormatSpec, entries: &[(NaiveDateTime, Option<&str>, String)]) -> String {
    entries
        .iter()
        .map(|(ts, sender, body)| match sender {
            Some(sender) => format!("{}{sender}: {body}\n", render(format, *ts)),
            None => format!("{}Someone left\n", render(format, *ts)),
        })
        .collect()
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_entry(), 0..max_len).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(ts, sender, body)| match sender {
                Some(sender) => Record::new(Some(ts), sender, body),
                None => Record::system(Some(ts), body),
            })
            .collect()
    })
}

/// Drops the seconds Android layouts do not carry.
fn truncate_to(format: FormatSpec, ts: NaiveDateTime) -> NaiveDateTime {
    match format {
        FormatSpec::Android12 | FormatSpec::Android24 => ts.with_second(0).unwrap(),
        FormatSpec::Ios12 | FormatSpec::Ios24 => ts,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// Every rendered entry comes back as one record with its timestamp
    #[test]
    fn rendered_exports_round_trip_timestamps(
        format in arb_format(),
        entries in prop::collection::vec(arb_entry(), 0..20),
    ) {
        let text = render_export(format, &entries);
        let records = preprocess(&text, format).unwrap();

        prop_assert_eq!(records.len(), entries.len());
        for (record, (ts, sender, _)) in records.iter().zip(&entries) {
            prop_assert_eq!(record.timestamp, Some(truncate_to(format, *ts)));
            match sender {
                Some(sender) => prop_assert_eq!(record.sender.as_str(), *sender),
                None => prop_assert!(record.is_system()),
            }
        }
    }

    /// Parsing is a pure function of text and layout
    #[test]
    fn preprocess_is_idempotent(
        format in arb_format(),
        entries in prop::collection::vec(arb_entry(), 0..20),
    ) {
        let text = render_export(format, &entries);
        prop_assert_eq!(preprocess(&text, format).unwrap(), preprocess(&text, format).unwrap());
    }

    /// Arbitrary text never panics
    #[test]
    fn arbitrary_text_never_panics(format in arb_format(), text in "\\PC{0,200}") {
        let _ = preprocess(&text, format).unwrap();
    }

    /// Calendar fields exist exactly when the timestamp does
    #[test]
    fn calendar_present_iff_timestamp(format in arb_format(), text in "[0-9/:,\\[\\] apmAPM-]{0,80}") {
        for record in preprocess(&text, format).unwrap() {
            prop_assert_eq!(record.timestamp.is_some(), record.calendar.is_some());
        }
    }

    // ============================================
    // AGGREGATOR PROPERTIES
    // ============================================

    /// Filtering by one sender never increases any count
    #[test]
    fn filtered_stats_never_exceed_overall(records in arb_records(30), user in prop::sample::select(SENDERS.to_vec())) {
        let overall = fetch_stats(&records, &UserSelection::Overall);
        let filtered = fetch_stats(&records, &UserSelection::from(user));

        prop_assert!(filtered.messages <= overall.messages);
        prop_assert!(filtered.words <= overall.words);
        prop_assert!(filtered.media <= overall.media);
        prop_assert!(filtered.link_count() <= overall.link_count());
    }

    /// Sender shares add up to 100% (within rounding)
    #[test]
    fn shares_sum_to_hundred(records in arb_records(30)) {
        let active = fetch_most_active_users(&records, &UserSelection::Overall);
        if !records.is_empty() {
            let sum: f64 = active.shares.iter().map(|s| s.percentage).sum();
            prop_assert!((sum - 100.0).abs() < 0.01 * active.shares.len() as f64 + 1e-9);
        }
        prop_assert!(active.top.len() <= 5);
    }

    /// The top senders only depend on per-sender counts and first appearance
    #[test]
    fn top_users_stable_under_reordering(records in arb_records(30), seed in any::<u64>()) {
        let before = fetch_most_active_users(&records, &UserSelection::Overall);

        // Keep every first appearance in place and rotate whatever follows
        // the last one.
        let mut seen = std::collections::HashSet::new();
        let cut = records
            .iter()
            .enumerate()
            .filter(|(_, r)| seen.insert(r.sender.clone()))
            .map(|(i, _)| i + 1)
            .last()
            .unwrap_or(0);
        let (head, tail) = records.split_at(cut);
        let mut tail = tail.to_vec();
        let len = tail.len();
        if len > 1 {
            tail.rotate_left((seed as usize) % len);
        }
        let reordered: Vec<Record> = head.iter().cloned().chain(tail).collect();

        let after = fetch_most_active_users(&reordered, &UserSelection::Overall);
        prop_assert_eq!(before.top, after.top);
    }

    /// Word and emoji rankings never see system or media records
    #[test]
    fn rankings_skip_system_and_media(records in arb_records(30)) {
        let all = UserSelection::Overall;
        let words = most_common_words(&records, &all);
        prop_assert!(words.len() <= 20);
        prop_assert!(words.iter().all(|w| w.word != "<media"));
        prop_assert!(words.windows(2).all(|w| w[0].count >= w[1].count));

        let conversational: Vec<Record> = records
            .iter()
            .filter(|r| !r.is_system() && r.message != MEDIA_PLACEHOLDER)
            .cloned()
            .collect();
        prop_assert_eq!(emoji_helper(&records, &all), emoji_helper(&conversational, &all));
    }

    /// Timeline and weekday totals agree with the dated record count
    #[test]
    fn time_buckets_cover_dated_records(records in arb_records(30)) {
        let all = UserSelection::Overall;
        let dated = records.iter().filter(|r| r.timestamp.is_some()).count();

        let months: usize = timeline(&records, &all).iter().map(|p| p.messages).sum();
        prop_assert_eq!(months, dated);
        prop_assert_eq!(week_activity_map(&records, &all).total(), dated);

        let points = timeline(&records, &all);
        prop_assert!(points.windows(2).all(|w| (w[0].year, w[0].month_number) < (w[1].year, w[1].month_number)));
    }
}
