//! Unified error types for chatstat.
//!
//! The parsing and aggregation core never fails on a single bad line: an
//! unreadable timestamp becomes `None` and a text without any delimiter
//! becomes an empty record set. [`ChatstatError`] covers the edges around
//! that core: reading files, writing output, naming a layout, and the
//! caller-level sanity checks in [`validate_records`](crate::validate_records).

use std::io;

use thiserror::Error;

use crate::format::FormatSpec;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Record;
///
/// fn load() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A layout name could not be mapped to a [`FormatSpec`].
    #[error("Unknown export layout '{input}'. Expected one of: {expected}")]
    UnknownFormat {
        /// The name that was provided
        input: String,
        /// Comma-separated list of accepted names
        expected: String,
    },

    /// No timestamp delimiter of the selected layout occurs in the text.
    ///
    /// Almost always means the wrong device or clock format was selected.
    #[error("No {format} messages found. Check the selected device and time format.")]
    FormatMismatch {
        /// The layout that was tried
        format: FormatSpec,
    },

    /// Entries were found but none of their timestamps could be parsed.
    #[error(
        "Failed to parse dates for all {records} messages as {format}. \
         Choose the correct device and time format combination."
    )]
    AllTimestampsNull {
        /// The layout that was tried
        format: FormatSpec,
        /// Number of records without a timestamp
        records: usize,
    },

    /// An output format name or extension is not supported, or its writer
    /// was compiled out.
    #[error("Invalid output format: {message}")]
    InvalidOutput {
        /// Description of what's wrong
        message: String,
    },

    /// A delimiter pattern failed to compile.
    #[error("Invalid delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when an export or a generated buffer is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an unknown layout error listing the accepted names.
    pub fn unknown_format(input: impl Into<String>) -> Self {
        ChatstatError::UnknownFormat {
            input: input.into(),
            expected: FormatSpec::all_names().join(", "),
        }
    }

    /// Creates a format mismatch error.
    pub fn format_mismatch(format: FormatSpec) -> Self {
        ChatstatError::FormatMismatch { format }
    }

    /// Creates an error for a record set with no parsed timestamps.
    pub fn all_timestamps_null(format: FormatSpec, records: usize) -> Self {
        ChatstatError::AllTimestampsNull { format, records }
    }

    /// Creates an invalid output format error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        ChatstatError::InvalidOutput {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if the error suggests a wrong layout was selected.
    ///
    /// Both [`FormatMismatch`](Self::FormatMismatch) and
    /// [`AllTimestampsNull`](Self::AllTimestampsNull) qualify.
    pub fn is_wrong_layout(&self) -> bool {
        matches!(
            self,
            ChatstatError::FormatMismatch { .. } | ChatstatError::AllTimestampsNull { .. }
        )
    }

    /// Returns `true` if this is an unknown layout name error.
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, ChatstatError::UnknownFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
