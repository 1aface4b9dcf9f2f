//! In-process store standing in for a database.
//!
//! Meetups, participant lists, chat rooms and read markers sit behind one
//! lock so create/delete touch all of them at once.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::store::MeetupStore;
use meshi_core::{ChatMessage, Error, Meetup, Result};

/// Everything keyed by meetup id.
#[derive(Default)]
struct Tables {
    meetups: BTreeMap<u64, Meetup>,
    participants: HashMap<u64, Vec<String>>,
    chat_rooms: HashMap<u64, Vec<ChatMessage>>,
    /// meetup id -> user -> last read timestamp
    read_markers: HashMap<u64, HashMap<String, String>>,
}

impl Tables {
    fn ensure_meetup(&self, id: u64) -> Result<()> {
        if self.meetups.contains_key(&id) {
            Ok(())
        } else {
            Err(Error::meetup_not_found())
        }
    }
}

pub struct MemoryStore {
    counter: AtomicU64,
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MeetupStore for MemoryStore {
    fn next_id(&self) -> Result<u64> {
        Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn insert(&self, meetup: Meetup, participants: Vec<String>) -> Result<()> {
        let id = meetup.id;
        let mut tables = self.tables.write();
        if tables.meetups.contains_key(&id) {
            return Err(Error::AlreadyExists(format!("Meetup {} already exists", id)));
        }
        tables.meetups.insert(id, meetup);
        tables.participants.insert(id, participants);
        tables.chat_rooms.insert(id, Vec::new());
        debug!("Registered meetup {}", id);
        Ok(())
    }

    fn get(&self, id: u64) -> Result<Option<Meetup>> {
        Ok(self.tables.read().meetups.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Meetup>> {
        Ok(self.tables.read().meetups.values().cloned().collect())
    }

    fn delete(&self, id: u64) -> Result<bool> {
        let mut tables = self.tables.write();
        if tables.meetups.remove(&id).is_none() {
            return Ok(false);
        }
        tables.participants.remove(&id);
        tables.chat_rooms.remove(&id);
        tables.read_markers.remove(&id);
        info!("Deleted meetup {}", id);
        Ok(true)
    }

    fn participants(&self, id: u64) -> Result<Vec<String>> {
        let tables = self.tables.read();
        tables.ensure_meetup(id)?;
        Ok(tables.participants.get(&id).cloned().unwrap_or_default())
    }

    fn join(&self, id: u64, user: &str) -> Result<bool> {
        let mut tables = self.tables.write();
        tables.ensure_meetup(id)?;
        let list = tables.participants.entry(id).or_default();
        if list.iter().any(|p| p == user) {
            return Ok(false);
        }
        list.push(user.to_string());
        Ok(true)
    }

    fn participations(&self, user: &str) -> Result<Vec<Meetup>> {
        let tables = self.tables.read();
        Ok(tables
            .meetups
            .values()
            .filter(|m| {
                tables
                    .participants
                    .get(&m.id)
                    .map(|list| list.iter().any(|p| p == user))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    fn append_message(
        &self,
        id: u64,
        user: &str,
        message: &str,
        timestamp: &str,
    ) -> Result<(ChatMessage, Vec<String>)> {
        let mut tables = self.tables.write();
        tables.ensure_meetup(id)?;
        let room = tables.chat_rooms.entry(id).or_default();
        let chat_message = ChatMessage {
            id: room.len() as u64 + 1,
            user: user.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        };
        room.push(chat_message.clone());
        let participants = tables.participants.get(&id).cloned().unwrap_or_default();
        Ok((chat_message, participants))
    }

    fn messages(&self, id: u64) -> Result<Vec<ChatMessage>> {
        let tables = self.tables.read();
        tables.ensure_meetup(id)?;
        Ok(tables.chat_rooms.get(&id).cloned().unwrap_or_default())
    }

    fn mark_read(&self, id: u64, user: &str, timestamp: &str) -> Result<()> {
        let mut tables = self.tables.write();
        tables.ensure_meetup(id)?;
        tables
            .read_markers
            .entry(id)
            .or_default()
            .insert(user.to_string(), timestamp.to_string());
        Ok(())
    }

    fn last_read(&self, id: u64, user: &str) -> Result<Option<String>> {
        let tables = self.tables.read();
        tables.ensure_meetup(id)?;
        Ok(tables
            .read_markers
            .get(&id)
            .and_then(|markers| markers.get(user))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshi_core::StructuredData;

    fn meetup(id: u64, creator: &str) -> Meetup {
        Meetup {
            id,
            title: "【食事募集】".into(),
            content: "ごはん行きたい".into(),
            original_content: "ごはん行きたい".into(),
            structured_data: StructuredData::default(),
            hashtags: Vec::new(),
            creator: creator.into(),
            created_at: "2025-01-01T12:00:00.000000+09:00".into(),
            datetime: None,
        }
    }

    fn store_with_meetup() -> MemoryStore {
        let store = MemoryStore::new();
        let id = store.next_id().unwrap();
        store.insert(meetup(id, "alice"), vec!["alice".into()]).unwrap();
        store
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let store = MemoryStore::new();
        let first = store.next_id().unwrap();
        store.insert(meetup(first, "alice"), vec!["alice".into()]).unwrap();
        assert!(store.delete(first).unwrap());
        let second = store.next_id().unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_insert_registers_all_collections() {
        let store = store_with_meetup();
        assert_eq!(store.get(1).unwrap().unwrap().creator, "alice");
        assert_eq!(store.participants(1).unwrap(), vec!["alice".to_string()]);
        assert!(store.messages(1).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = store_with_meetup();
        let err = store.insert(meetup(1, "bob"), vec![]).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[test]
    fn test_delete_removes_everything() {
        let store = store_with_meetup();
        store.append_message(1, "alice", "hi", "t1").unwrap();
        store.mark_read(1, "alice", "t1").unwrap();

        assert!(store.delete(1).unwrap());
        assert!(store.get(1).unwrap().is_none());
        assert!(matches!(store.participants(1), Err(Error::NotFound(_))));
        assert!(matches!(store.messages(1), Err(Error::NotFound(_))));
        assert!(matches!(store.last_read(1, "alice"), Err(Error::NotFound(_))));
        assert!(!store.delete(1).unwrap());
    }

    #[test]
    fn test_join_is_idempotent() {
        let store = store_with_meetup();
        assert!(store.join(1, "bob").unwrap());
        assert!(!store.join(1, "bob").unwrap());
        assert!(!store.join(1, "alice").unwrap());
        assert_eq!(
            store.participants(1).unwrap(),
            vec!["alice".to_string(), "bob".to_string()]
        );
    }

    #[test]
    fn test_join_unknown_meetup() {
        let store = MemoryStore::new();
        assert!(matches!(store.join(42, "bob"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_message_ids_follow_room_position() {
        let store = store_with_meetup();
        let (first, _) = store.append_message(1, "alice", "hello", "t1").unwrap();
        let (second, _) = store.append_message(1, "bob", "hey", "t2").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.messages(1).unwrap().len(), 2);
    }

    #[test]
    fn test_append_returns_participants_at_post_time() {
        let store = store_with_meetup();
        store.join(1, "bob").unwrap();
        let (_, participants) = store.append_message(1, "bob", "hey", "t1").unwrap();
        assert_eq!(participants, vec!["alice".to_string(), "bob".to_string()]);

        store.delete(1).unwrap();
        assert!(matches!(
            store.append_message(1, "bob", "late", "t2"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_participations() {
        let store = store_with_meetup();
        let id = store.next_id().unwrap();
        store.insert(meetup(id, "bob"), vec!["bob".into()]).unwrap();

        let alice: Vec<u64> = store.participations("alice").unwrap().iter().map(|m| m.id).collect();
        assert_eq!(alice, vec![1]);

        store.join(2, "alice").unwrap();
        let alice: Vec<u64> = store.participations("alice").unwrap().iter().map(|m| m.id).collect();
        assert_eq!(alice, vec![1, 2]);
    }

    #[test]
    fn test_read_markers() {
        let store = store_with_meetup();
        assert_eq!(store.last_read(1, "alice").unwrap(), None);
        store.mark_read(1, "alice", "2025-01-01T12:00:00.000000+09:00").unwrap();
        assert_eq!(
            store.last_read(1, "alice").unwrap().as_deref(),
            Some("2025-01-01T12:00:00.000000+09:00")
        );
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..100).map(|_| store.next_id().unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();
        let mut ids: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 800);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&800));
    }

    #[test]
    fn test_concurrent_joins_and_messages_are_not_lost() {
        let store = std::sync::Arc::new(store_with_meetup());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let user = format!("user{}", i);
                    assert!(store.join(1, &user).unwrap());
                    let (message, _) = store.append_message(1, &user, "hi", "t").unwrap();
                    message.id
                })
            })
            .collect();
        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
        assert_eq!(store.participants(1).unwrap().len(), 17);
        let mut stored: Vec<u64> = store.messages(1).unwrap().iter().map(|m| m.id).collect();
        stored.sort_unstable();
        assert_eq!(stored, ids);
    }
}
