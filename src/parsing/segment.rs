//! Splitting export text into timestamped entries.

use regex::Regex;

use crate::error::Result;
use crate::format::FormatSpec;

/// One timestamp plus the text that follows it, before classification.
///
/// Both fields borrow from the export text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'t> {
    /// The matched delimiter, e.g. `"15/01/24, 10:30 pm - "`.
    pub timestamp: &'t str,
    /// Everything between this delimiter and the next one (or end of text).
    pub body: &'t str,
}

/// Compiled delimiter pattern for one [`FormatSpec`].
///
/// Build it once per layout and reuse it for any number of exports.
#[derive(Debug, Clone)]
pub struct Segmenter {
    format: FormatSpec,
    regex: Regex,
}

impl Segmenter {
    pub fn new(format: FormatSpec) -> Result<Self> {
        Ok(Self {
            format,
            regex: Regex::new(format.segment_pattern())?,
        })
    }

    pub fn format(&self) -> FormatSpec {
        self.format
    }

    /// Lazily yields one [`Entry`] per delimiter match, in text order.
    ///
    /// Text before the first delimiter (an export header, a stray line) is
    /// skipped. Text without any delimiter yields nothing.
    pub fn entries<'t>(&self, text: &'t str) -> impl Iterator<Item = Entry<'t>> {
        let mut matches = self.regex.find_iter(text).peekable();
        std::iter::from_fn(move || {
            let current = matches.next()?;
            let body_end = matches.peek().map_or(text.len(), |next| next.start());
            Some(Entry {
                timestamp: current.as_str(),
                body: &text[current.end()..body_end],
            })
        })
    }

    /// Collects [`entries`](Self::entries) into a vector.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<Entry<'t>> {
        self.entries(text).collect()
    }
}
