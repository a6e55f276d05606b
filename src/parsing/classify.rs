//! Sender/message separation.

use crate::record::SYSTEM_SENDER;

/// Separator between the sender name and the message text.
pub const SENDER_DELIMITER: &str = ": ";

/// Splits an entry body into `(sender, message)`.
///
/// The body is cut at the first [`SENDER_DELIMITER`]; both halves are
/// trimmed. A body without the delimiter is a notification written by
/// WhatsApp itself and gets [`SYSTEM_SENDER`] with the whole trimmed body as
/// its message.
///
/// A notification whose text contains `": "` is indistinguishable from an
/// authored message and is attributed to whatever precedes the first
/// delimiter.
///
/// # Example
///
/// ```
/// use chatstat::parsing::classify;
///
/// assert_eq!(classify("Alice: see: this\n"), ("Alice", "see: this"));
/// assert_eq!(classify("Bob left\n"), ("SYSTEM", "Bob left"));
/// ```
pub fn classify(body: &str) -> (&str, &str) {
    match body.split_once(SENDER_DELIMITER) {
        Some((sender, message)) => (sender.trim(), message.trim()),
        None => (SYSTEM_SENDER, body.trim()),
    }
}
