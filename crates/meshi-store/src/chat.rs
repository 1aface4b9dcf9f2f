//! Chat read-state helpers.

use meshi_core::ChatMessage;

/// Count messages `user` has not seen yet.
///
/// Own messages never count. With a read marker, only messages stamped
/// strictly after it count. Timestamps are compared as strings, which
/// matches chronological order only while every stamp comes from the same
/// clock format and timezone.
pub fn unread_count(messages: &[ChatMessage], user: &str, last_read: Option<&str>) -> usize {
    messages
        .iter()
        .filter(|m| m.user != user)
        .filter(|m| match last_read {
            Some(marker) => m.timestamp.as_str() > marker,
            None => true,
        })
        .count()
}
