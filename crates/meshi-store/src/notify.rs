//! Notification delivery.
//!
//! Delivery is fire-and-forget: senders never learn whether or how a
//! notification arrived. [`Inbox`] keeps them in memory so the web client
//! can poll a per-user list and unread badge.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use crate::store::MeetupStore;
use meshi_core::{Notification, NotificationKind, Result};

/// A notification about to be delivered.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user: String,
    pub meetup_id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: String,
}

pub trait NotificationSink: Send + Sync {
    fn deliver(&self, notification: NewNotification);
}

/// In-memory notification store.
pub struct Inbox {
    counter: AtomicU64,
    entries: RwLock<Vec<Notification>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Notifications for `user`, newest first.
    pub fn list(&self, user: &str) -> Vec<Notification> {
        let entries = self.entries.read();
        entries
            .iter()
            .rev()
            .filter(|n| n.user == user)
            .cloned()
            .collect()
    }

    pub fn unread_count(&self, user: &str) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|n| n.user == user && !n.read)
            .count()
    }

    /// Mark every notification `user` got for `meetup_id` as read.
    /// Returns how many changed.
    pub fn mark_meetup_read(&self, user: &str, meetup_id: u64) -> usize {
        let mut entries = self.entries.write();
        let mut changed = 0;
        for n in entries
            .iter_mut()
            .filter(|n| n.user == user && n.meetup_id == meetup_id && !n.read)
        {
            n.read = true;
            changed += 1;
        }
        changed
    }

    /// Drop notifications that point at a deleted meetup.
    pub fn forget_meetup(&self, meetup_id: u64) {
        self.entries.write().retain(|n| n.meetup_id != meetup_id);
    }

    /// Deliver, then retract everything for the meetup if it is already gone.
    /// Deletion calls [`Inbox::forget_meetup`] after removing the meetup, so
    /// either that call or this check sees the delivered entry.
    /// Returns false when the notification was retracted.
    pub fn deliver_live(
        &self,
        store: &dyn MeetupStore,
        notification: NewNotification,
    ) -> Result<bool> {
        let meetup_id = notification.meetup_id;
        self.deliver(notification);
        if store.get(meetup_id)?.is_some() {
            return Ok(true);
        }
        debug!("Meetup {} vanished during delivery", meetup_id);
        self.forget_meetup(meetup_id);
        Ok(false)
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for Inbox {
    fn deliver(&self, notification: NewNotification) {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Notify {} about meetup {} ({:?})",
            notification.user, notification.meetup_id, notification.kind
        );
        self.entries.write().push(Notification {
            id,
            user: notification.user,
            meetup_id: notification.meetup_id,
            kind: notification.kind,
            message: notification.message,
            created_at: notification.created_at,
            read: false,
        });
    }
}
