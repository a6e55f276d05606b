//! Emoji frequencies.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::rank::rank;
use super::{UserSelection, is_conversational};
use crate::config::AnalysisConfig;
use crate::record::Record;

/// Single code points that render as an emoji: pictographs, skin-tone
/// modifiers and regional indicator letters.
static EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Modifier}\x{1F1E6}-\x{1F1FF}]")
        .expect("emoji regex is valid")
});

/// One entry of the emoji ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Returns `true` if the code point `c` is an emoji on its own.
///
/// Joiners and variation selectors are not; digits and `#` are not either,
/// even though they can start a keycap sequence.
///
/// ```
/// use chatstat::analysis::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('\u{200d}'));
/// ```
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI_REGEX.is_match(c.encode_utf8(&mut buf))
}

/// Ranks every emoji code point by frequency, untruncated.
///
/// Sequences are counted per code point: `👍🏽` counts one `👍` and one
/// skin-tone modifier. System notifications and media placeholders are
/// skipped. Equal counts keep first-seen order.
pub fn emoji_helper(records: &[Record], selection: &UserSelection) -> Vec<EmojiCount> {
    emoji_helper_with(records, selection, &AnalysisConfig::default())
}

pub(crate) fn emoji_helper_with(
    records: &[Record],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<EmojiCount> {
    let emojis = selection
        .filter(records)
        .filter(|r| is_conversational(r, config))
        .flat_map(|r| EMOJI_REGEX.find_iter(&r.message).map(|m| m.as_str()));

    rank(emojis)
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(emojis: &[EmojiCount]) -> Vec<(&str, usize)> {
        emojis.iter().map(|e| (e.emoji.as_str(), e.count)).collect()
    }

    #[test]
    fn test_emoji_helper_counts_and_orders() {
        let records = vec![
            Record::new(None, "Alice", "haha 😂😂 nice 👍"),
            Record::new(None, "Bob", "👍 ok 😂"),
            Record::new(None, "Bob", "🎉"),
        ];
        let emojis = emoji_helper(&records, &UserSelection::Overall);
        assert_eq!(pairs(&emojis), vec![("😂", 3), ("👍", 2), ("🎉", 1)]);
    }

    #[test]
    fn test_emoji_helper_excludes_system_and_media() {
        let records = vec![
            Record::system(None, "Alice created group 🎉"),
            Record::new(None, "Bob", "<Media omitted>"),
            Record::new(None, "Bob", "no emoji here"),
        ];
        assert!(emoji_helper(&records, &UserSelection::Overall).is_empty());
    }

    #[test]
    fn test_emoji_helper_filtered() {
        let records = vec![
            Record::new(None, "Alice", "😂"),
            Record::new(None, "Bob", "🔥🔥"),
        ];
        let emojis = emoji_helper(&records, &UserSelection::from("Alice"));
        assert_eq!(pairs(&emojis), vec![("😂", 1)]);
    }

    #[test]
    fn test_emoji_helper_is_not_truncated() {
        let text: String = ('\u{1F600}'..='\u{1F630}').collect();
        let records = vec![Record::new(None, "Alice", text)];
        assert_eq!(emoji_helper(&records, &UserSelection::Overall).len(), 49);
    }

    #[test]
    fn test_skin_tone_counts_separately() {
        let records = vec![Record::new(None, "Alice", "👍🏽")];
        let emojis = emoji_helper(&records, &UserSelection::Overall);
        assert_eq!(pairs(&emojis), vec![("👍", 1), ("🏽", 1)]);
    }

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('🔥'));
        assert!(is_emoji('🇩'));
        assert!(!is_emoji('1'));
        assert!(!is_emoji('#'));
        assert!(!is_emoji('\u{fe0f}'));
        assert!(!is_emoji('é'));
    }
}
