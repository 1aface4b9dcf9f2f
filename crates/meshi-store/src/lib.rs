//! Meshi Store — meetup persistence, chat rooms, read markers, notification inbox.

pub mod chat;
pub mod memory;
pub mod notify;
pub mod search;
pub mod store;

pub use chat::unread_count;
pub use memory::MemoryStore;
pub use notify::{Inbox, NewNotification, NotificationSink};
pub use search::{search, MeetupQuery};
pub use store::MeetupStore;
