//! Headline counts: messages, words, media, links.

use std::sync::LazyLock;

use linkify::{LinkFinder, LinkKind};
use serde::Serialize;

use super::UserSelection;
use crate::config::AnalysisConfig;
use crate::record::Record;

/// Finds links with or without a scheme. Emails are recognized so their
/// domain part is not reported as a link.
static LINK_FINDER: LazyLock<LinkFinder> = LazyLock::new(|| {
    let mut finder = LinkFinder::new();
    finder.url_must_have_scheme(false);
    finder
});

/// Summary counts for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Number of records
    pub messages: usize,
    /// Whitespace-separated tokens across all messages
    pub words: usize,
    /// Messages exactly equal to the media placeholder
    pub media: usize,
    /// Every URL found, in message order
    pub links: Vec<String>,
}

impl ChatStats {
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Computes [`ChatStats`] with the default media placeholder.
pub fn fetch_stats(records: &[Record], selection: &UserSelection) -> ChatStats {
    fetch_stats_with(records, selection, &AnalysisConfig::default())
}

pub(crate) fn fetch_stats_with(
    records: &[Record],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> ChatStats {
    let mut stats = ChatStats::default();

    for record in selection.filter(records) {
        stats.messages += 1;
        stats.words += record.message.split_whitespace().count();
        if record.message == config.media_placeholder {
            stats.media += 1;
        }
        stats.links.extend(extract_links(&record.message));
    }

    stats
}

/// Finds URLs in free text.
///
/// Recognizes links with a scheme (`https://...`), `www.` links and bare
/// domains on any TLD such as `example.fr/path`. Sentence punctuation
/// directly after a URL is not part of it, and email addresses are not
/// links.
///
/// ```
/// use chatstat::analysis::extract_links;
///
/// assert_eq!(
///     extract_links("see https://example.com/a, or docs.rs."),
///     vec!["https://example.com/a", "docs.rs"]
/// );
/// assert!(extract_links("mail bob@example.com").is_empty());
/// ```
pub fn extract_links(text: &str) -> Vec<String> {
    LINK_FINDER
        .links(text)
        .filter(|link| *link.kind() == LinkKind::Url)
        .map(|link| link.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new(None, "Alice", "Hi there"),
            Record::new(None, "Bob", "<Media omitted>"),
            Record::system(None, "Alice left"),
            Record::new(None, "Alice", "look at https://example.com and www.rust-lang.org"),
        ]
    }

    #[test]
    fn test_fetch_stats_overall() {
        let stats = fetch_stats(&records(), &UserSelection::Overall);
        assert_eq!(stats.messages, 4);
        // 2 + 2 + 2 + 5
        assert_eq!(stats.words, 11);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.link_count(), 2);
        assert_eq!(stats.links, vec!["https://example.com", "www.rust-lang.org"]);
    }

    #[test]
    fn test_fetch_stats_filtered() {
        let stats = fetch_stats(&records(), &UserSelection::from("Bob"));
        assert_eq!(stats.messages, 1);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.media, 1);
        assert!(stats.links.is_empty());
    }

    #[test]
    fn test_fetch_stats_unknown_user_is_empty() {
        let stats = fetch_stats(&records(), &UserSelection::from("Carol"));
        assert_eq!(stats, ChatStats::default());
    }

    #[test]
    fn test_media_must_match_exactly() {
        let records = vec![
            Record::new(None, "Bob", "<media omitted>"),
            Record::new(None, "Bob", "<Media omitted> lol"),
        ];
        assert_eq!(fetch_stats(&records, &UserSelection::Overall).media, 0);
    }

    #[test]
    fn test_custom_media_placeholder() {
        let records = vec![Record::new(None, "Bob", "<Medien ausgeschlossen>")];
        let config = AnalysisConfig::new().with_media_placeholder("<Medien ausgeschlossen>");
        assert_eq!(fetch_stats_with(&records, &UserSelection::Overall, &config).media, 1);
    }

    #[test]
    fn test_extract_links_variants() {
        assert_eq!(extract_links("http://a.b/c?d=e"), vec!["http://a.b/c?d=e"]);
        assert_eq!(extract_links("(see example.org/x)"), vec!["example.org/x"]);
        assert_eq!(extract_links("two: github.com youtu.be"), vec!["github.com", "youtu.be"]);
    }

    #[test]
    fn test_extract_links_any_tld() {
        assert_eq!(extract_links("visit example.fr now"), vec!["example.fr"]);
        assert_eq!(extract_links("see yandex.ru"), vec!["yandex.ru"]);
        assert_eq!(extract_links("go to shop.xyz!"), vec!["shop.xyz"]);
        assert_eq!(extract_links("lemonde.fr/article"), vec!["lemonde.fr/article"]);
    }

    #[test]
    fn test_extract_links_skips_email_addresses() {
        assert!(extract_links("mail bob@example.com").is_empty());
        assert_eq!(
            extract_links("bob@example.com or example.com"),
            vec!["example.com"]
        );
    }

    #[test]
    fn test_fetch_stats_ignores_emails() {
        let records = vec![Record::new(None, "Alice", "write to alice@mail.example.de")];
        assert_eq!(fetch_stats(&records, &UserSelection::Overall).link_count(), 0);
    }

    #[test]
    fn test_extract_links_ignores_plain_text() {
        assert!(extract_links("see you at 10:30, ok?").is_empty());
        assert!(extract_links("that was it. Next one").is_empty());
        assert!(extract_links("").is_empty());
    }
}
