//! Word frequencies and the word-cloud corpus.

use serde::Serialize;

use super::rank::rank;
use super::{UserSelection, is_conversational};
use crate::config::AnalysisConfig;
use crate::record::Record;

/// One entry of the common-words ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Returns the twenty most frequent words.
///
/// Words are whitespace-separated tokens, lowercased; punctuation stays
/// attached. System notifications, media placeholders and blank messages are
/// skipped. Equal counts keep first-seen order.
pub fn most_common_words(records: &[Record], selection: &UserSelection) -> Vec<WordCount> {
    most_common_words_with(records, selection, &AnalysisConfig::default())
}

pub(crate) fn most_common_words_with(
    records: &[Record],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    let words = selection
        .filter(records)
        .filter(|r| is_conversational(r, config))
        .flat_map(|r| {
            r.message
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

    rank(words)
        .into_iter()
        .take(config.top_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Joins the messages a word cloud is drawn from with single spaces.
///
/// Same record selection as [`most_common_words`], original casing kept.
pub fn wordcloud_corpus(records: &[Record], selection: &UserSelection) -> String {
    wordcloud_corpus_with(records, selection, &AnalysisConfig::default())
}

pub(crate) fn wordcloud_corpus_with(
    records: &[Record],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> String {
    selection
        .filter(records)
        .filter(|r| is_conversational(r, config))
        .map(|r| r.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
