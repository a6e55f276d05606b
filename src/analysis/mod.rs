//! Aggregators over parsed records.
//!
//! Every aggregator is a pure, read-only function of a record slice and a
//! [`UserSelection`]. Nothing is cached between calls.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`fetch_stats`] | message, word, media and link counts |
//! | [`fetch_most_active_users`] | top senders plus share of every sender |
//! | [`most_common_words`] | top words, case-folded |
//! | [`emoji_helper`] | full emoji ranking |
//! | [`timeline`] | messages per calendar month |
//! | [`week_activity_map`] | messages per weekday |
//!
//! The free functions use [`AnalysisConfig::default`]. Build an [`Analyzer`]
//! to change the media placeholder or ranking sizes.
//!
//! # Example
//!
//! ```rust
//! use chatstat::analysis::{UserSelection, fetch_stats, most_common_words};
//! use chatstat::format::FormatSpec;
//! use chatstat::parser::preprocess;
//!
//! # fn main() -> chatstat::Result<()> {
//! let text = "1/1/23, 10:00 am - Alice: Hi there\n\
//!             1/1/23, 10:05 am - Bob: <Media omitted>\n\
//!             1/1/23, 10:06 am - Alice left\n";
//! let records = preprocess(text, FormatSpec::Android12)?;
//!
//! let stats = fetch_stats(&records, &UserSelection::Overall);
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//!
//! let words = most_common_words(&records, &UserSelection::from("Alice"));
//! assert_eq!(words[0].word, "hi");
//! # Ok(())
//! # }
//! ```

mod activity;
mod emoji;
mod rank;
mod report;
mod stats;
mod users;
mod words;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use activity::{DayCount, TimelinePoint, WeekActivity, timeline, week_activity_map};
pub use emoji::{EmojiCount, emoji_helper, is_emoji};
pub use report::Report;
pub use stats::{ChatStats, extract_links, fetch_stats};
pub use users::{ActiveUsers, SenderCount, UserShare, fetch_most_active_users, selectable_users};
pub use words::{WordCount, most_common_words, wordcloud_corpus};

use crate::config::AnalysisConfig;
use crate::record::Record;

/// Label used for the unfiltered view in user pickers.
pub const OVERALL: &str = "Overall";

/// Which records an aggregator looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserSelection {
    /// Every record, system notifications included.
    #[default]
    Overall,
    /// Only records whose sender equals the name exactly.
    User(String),
}

impl UserSelection {
    /// Returns `true` if `record` passes the filter.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::User(name) => record.sender == *name,
        }
    }

    /// Iterates over the records that pass the filter, in order.
    pub fn filter<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, UserSelection::Overall)
    }
}

impl From<&str> for UserSelection {
    /// `"Overall"` selects everything; any other name selects that sender.
    fn from(name: &str) -> Self {
        if name == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(name.to_string())
        }
    }
}

impl From<Option<String>> for UserSelection {
    fn from(name: Option<String>) -> Self {
        name.map_or(UserSelection::Overall, |n| UserSelection::from(n.as_str()))
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSelection::Overall => write!(f, "{OVERALL}"),
            UserSelection::User(name) => write!(f, "{name}"),
        }
    }
}

/// Aggregators bound to one [`AnalysisConfig`].
///
/// Holds no state besides the configuration; methods take `&self`.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn fetch_stats(&self, records: &[Record], selection: &UserSelection) -> ChatStats {
        stats::fetch_stats_with(records, selection, &self.config)
    }

    pub fn fetch_most_active_users(
        &self,
        records: &[Record],
        selection: &UserSelection,
    ) -> ActiveUsers {
        users::fetch_most_active_users_with(records, selection, &self.config)
    }

    pub fn most_common_words(&self, records: &[Record], selection: &UserSelection) -> Vec<WordCount> {
        words::most_common_words_with(records, selection, &self.config)
    }

    pub fn wordcloud_corpus(&self, records: &[Record], selection: &UserSelection) -> String {
        words::wordcloud_corpus_with(records, selection, &self.config)
    }

    pub fn emoji_helper(&self, records: &[Record], selection: &UserSelection) -> Vec<EmojiCount> {
        emoji::emoji_helper_with(records, selection, &self.config)
    }

    /// Runs every aggregator once and collects the results.
    pub fn report(&self, records: &[Record], selection: &UserSelection) -> Report {
        report::build(self, records, selection)
    }
}

/// Returns `true` if `record` takes part in word and emoji rankings.
///
/// System notifications, media placeholders and blank messages do not.
pub(crate) fn is_conversational(record: &Record, config: &AnalysisConfig) -> bool {
    !record.is_system() && record.message != config.media_placeholder && !record.is_blank()
}
