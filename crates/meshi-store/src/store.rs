//! Storage abstraction for meetups and their per-meetup collections.
//!
//! A meetup owns two mutable collections keyed by its id: the participant
//! list and the chat room. Implementations must register and remove all
//! three together, and must serialize concurrent joins and message appends.

use meshi_core::{ChatMessage, Meetup, Result};

pub trait MeetupStore: Send + Sync {
    /// Draw the next meetup id. Ids start at 1 and are never handed out twice.
    fn next_id(&self) -> Result<u64>;

    /// Register a meetup with its initial participants and an empty chat.
    fn insert(&self, meetup: Meetup, participants: Vec<String>) -> Result<()>;

    fn get(&self, id: u64) -> Result<Option<Meetup>>;

    /// All meetups, in insertion order.
    fn list(&self) -> Result<Vec<Meetup>>;

    /// Remove a meetup with its participants, chat and read markers.
    /// Returns false when the id is unknown.
    fn delete(&self, id: u64) -> Result<bool>;

    fn participants(&self, id: u64) -> Result<Vec<String>>;

    /// Add `user` to the meetup. Returns false if they were already in.
    fn join(&self, id: u64, user: &str) -> Result<bool>;

    /// Meetups `user` participates in.
    fn participations(&self, user: &str) -> Result<Vec<Meetup>>;

    /// Append a chat message, assigning its id. Also returns the participant
    /// list as it stood when the message landed.
    fn append_message(
        &self,
        id: u64,
        user: &str,
        message: &str,
        timestamp: &str,
    ) -> Result<(ChatMessage, Vec<String>)>;

    fn messages(&self, id: u64) -> Result<Vec<ChatMessage>>;

    /// Record that `user` has read the meetup's chat up to `timestamp`.
    fn mark_read(&self, id: u64, user: &str, timestamp: &str) -> Result<()>;

    fn last_read(&self, id: u64, user: &str) -> Result<Option<String>>;
}
