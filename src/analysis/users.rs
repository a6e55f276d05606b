//! Sender rankings and the user picker list.

use serde::Serialize;

use super::rank::rank;
use super::{OVERALL, UserSelection};
use crate::config::AnalysisConfig;
use crate::record::Record;

/// Message count of one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub messages: usize,
}

/// Share of all selected messages written by one sender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub sender: String,
    /// Percentage of the selected records, rounded to two decimals
    pub percentage: f64,
}

/// Result of [`fetch_most_active_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActiveUsers {
    /// The busiest senders, most messages first
    pub top: Vec<SenderCount>,
    /// Every sender, same order as `top`
    pub shares: Vec<UserShare>,
}

/// Ranks senders by message count.
///
/// `top` holds the first five senders, `shares` covers every sender. System
/// notifications count as a sender of their own. Equal counts keep the
/// order in which the senders first appear.
pub fn fetch_most_active_users(records: &[Record], selection: &UserSelection) -> ActiveUsers {
    fetch_most_active_users_with(records, selection, &AnalysisConfig::default())
}

pub(crate) fn fetch_most_active_users_with(
    records: &[Record],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> ActiveUsers {
    let ranked = rank(selection.filter(records).map(|r| r.sender.as_str()));
    let total: usize = ranked.iter().map(|(_, n)| n).sum();

    let shares = ranked
        .iter()
        .map(|&(sender, n)| UserShare {
            sender: sender.to_string(),
            percentage: percentage(n, total),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(config.top_users)
        .map(|(sender, messages)| SenderCount {
            sender: sender.to_string(),
            messages,
        })
        .collect();

    ActiveUsers { top, shares }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 10_000.0).round() / 100.0
}

/// Lists the choices for a user picker.
///
/// `"Overall"` first, then every distinct non-system sender sorted by name.
pub fn selectable_users(records: &[Record]) -> Vec<String> {
    let mut senders: Vec<&str> = records
        .iter()
        .filter(|r| !r.is_system())
        .map(|r| r.sender.as_str())
        .collect();
    senders.sort_unstable();
    senders.dedup();

    std::iter::once(OVERALL)
        .chain(senders)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages_from(senders: &[&str]) -> Vec<Record> {
        senders
            .iter()
            .map(|s| Record::new(None, *s, "msg"))
            .collect()
    }

    #[test]
    fn test_top_and_shares() {
        let records = messages_from(&["Alice", "Bob", "Alice", "SYSTEM", "Alice", "Bob"]);
        let active = fetch_most_active_users(&records, &UserSelection::Overall);

        let top: Vec<_> = active.top.iter().map(|s| (s.sender.as_str(), s.messages)).collect();
        assert_eq!(top, vec![("Alice", 3), ("Bob", 2), ("SYSTEM", 1)]);

        assert_eq!(active.shares.len(), 3);
        assert_eq!(active.shares[0].percentage, 50.0);
        assert_eq!(active.shares[1].percentage, 33.33);
        assert_eq!(active.shares[2].percentage, 16.67);
    }

    #[test]
    fn test_top_is_truncated_to_five() {
        let records = messages_from(&["A", "B", "C", "D", "E", "F", "G"]);
        let active = fetch_most_active_users(&records, &UserSelection::Overall);
        assert_eq!(active.top.len(), 5);
        assert_eq!(active.shares.len(), 7);
        // ties keep first-seen order
        assert_eq!(active.top[0].sender, "A");
        assert_eq!(active.top[4].sender, "E");
    }

    #[test]
    fn test_custom_top_users() {
        let records = messages_from(&["A", "B", "B"]);
        let config = AnalysisConfig::new().with_top_users(1);
        let active = fetch_most_active_users_with(&records, &UserSelection::Overall, &config);
        assert_eq!(active.top.len(), 1);
        assert_eq!(active.top[0].sender, "B");
    }

    #[test]
    fn test_single_user_selection() {
        let records = messages_from(&["Alice", "Bob", "Alice"]);
        let active = fetch_most_active_users(&records, &UserSelection::from("Bob"));
        assert_eq!(active.top.len(), 1);
        assert_eq!(active.shares[0].percentage, 100.0);
    }

    #[test]
    fn test_empty_records() {
        let active = fetch_most_active_users(&[], &UserSelection::Overall);
        assert_eq!(active, ActiveUsers::default());
    }

    #[test]
    fn test_selectable_users() {
        let records = messages_from(&["Zed", "SYSTEM", "alice", "Bob", "Zed"]);
        assert_eq!(selectable_users(&records), vec!["Overall", "Bob", "Zed", "alice"]);
    }

    #[test]
    fn test_selectable_users_empty() {
        assert_eq!(selectable_users(&[]), vec!["Overall"]);
    }
}
