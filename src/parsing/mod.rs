//! Building blocks of the export parser.
//!
//! Each submodule implements one stage of turning raw export text into
//! [`Record`](crate::Record)s:
//!
//! 1. [`segment`] splits the text on timestamp delimiters into [`Entry`]s
//! 2. [`timestamp`] cleans and parses each entry's timestamp
//! 3. [`classify`] separates sender from message
//!
//! [`ExportParser`](crate::parser::ExportParser) chains them together.

pub mod classify;
pub mod segment;
pub mod timestamp;

pub use classify::{SENDER_DELIMITER, classify};
pub use segment::{Entry, Segmenter};
pub use timestamp::{clean_timestamp, normalize_timestamp};
