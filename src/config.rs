//! Configuration types for parsing and analysis.
//!
//! Plain builder-style structs with no CLI framework dependencies.
//!
//! - [`ParserConfig`] - which layout to read and what to keep
//! - [`AnalysisConfig`] - media placeholder and ranking sizes
//!
//! Output settings live in [`OutputConfig`](crate::output::OutputConfig).
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, ParserConfig};
//! use chatstat::format::FormatSpec;
//!
//! let parser = ParserConfig::new(FormatSpec::Ios24).with_skip_system_messages(true);
//! let analysis = AnalysisConfig::new().with_top_words(50);
//!
//! assert!(parser.skip_system_messages);
//! assert_eq!(analysis.top_users, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::format::FormatSpec;

/// Placeholder WhatsApp writes instead of an attachment when exporting
/// without media.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for export parsing.
///
/// With the defaults every delimiter match becomes exactly one record, in
/// export order. The two skip flags trade that guarantee for a cleaner set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Layout of the export
    pub format: FormatSpec,

    /// Drop join/leave/encryption notices (default: false)
    pub skip_system_messages: bool,

    /// Drop records whose timestamp could not be parsed (default: false)
    pub skip_unparsed_timestamps: bool,
}

impl ParserConfig {
    /// Creates a configuration for `format` with default values.
    pub fn new(format: FormatSpec) -> Self {
        Self {
            format,
            skip_system_messages: false,
            skip_unparsed_timestamps: false,
        }
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets whether to skip records without a parsed timestamp.
    #[must_use]
    pub fn with_skip_unparsed_timestamps(mut self, skip: bool) -> Self {
        self.skip_unparsed_timestamps = skip;
        self
    }

    /// Returns `true` if every entry is turned into a record.
    pub fn keeps_all_entries(&self) -> bool {
        !self.skip_system_messages && !self.skip_unparsed_timestamps
    }
}

/// Configuration for the aggregators in [`analysis`](crate::analysis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Exact message text counted as media (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Number of senders in the most-active ranking (default: 5)
    pub top_users: usize,

    /// Number of words in the common-words ranking (default: 20)
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
            top_users: 5,
            top_words: 20,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text.
    ///
    /// Localized exports use their own wording, e.g. `<Medien ausgeschlossen>`.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the size of the most-active ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the size of the common-words ranking.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}
