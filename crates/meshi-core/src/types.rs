//! Records shared by the store, the enrichment pipeline and the HTTP layer.

use serde::{Deserialize, Serialize};

/// Machine-extracted view of a meetup description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredData {
    pub food_genre: Option<String>,
    /// Reserved; nothing fills it yet.
    pub specific_menu: Option<String>,
    pub location: Option<String>,
    /// Digits followed by the currency unit, e.g. `3000円`.
    pub budget: Option<String>,
    #[serde(default)]
    pub other_requirements: Vec<String>,
}

/// A fully assembled meetup. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meetup {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Unmodified caller input. Kept in storage, left out of responses.
    #[serde(skip_serializing, default)]
    pub original_content: String,
    pub structured_data: StructuredData,
    pub hashtags: Vec<String>,
    pub creator: String,
    pub created_at: String,
    pub datetime: Option<String>,
}

/// Body of `POST /api/meetups`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMeetupRequest {
    #[serde(default)]
    pub content: String,
    pub datetime: Option<String>,
    pub food_item: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub structured_datetime: Option<String>,
}

impl CreateMeetupRequest {
    /// Free-text request with no explicit fields.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

/// One message in a meetup's chat room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub user: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Joined,
    Message,
}

/// Inbox entry for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub user: String,
    pub meetup_id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: String,
    pub read: bool,
}

/// Treat blank strings the same as an absent field.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
