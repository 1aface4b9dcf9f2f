//! Shared application state.

use std::sync::Arc;

use meshi_auth::CredentialService;
use meshi_core::{CivilClock, Clock, MeshiConfig};
use meshi_enrich::MeetupBuilder;
use meshi_store::{Inbox, MeetupStore, MemoryStore};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: MeshiConfig,
    pub store: Arc<dyn MeetupStore>,
    pub clock: Arc<dyn Clock>,
    pub auth: CredentialService,
    pub inbox: Inbox,
}

impl AppState {
    /// In-memory store and the configured civil clock.
    pub fn new(config: MeshiConfig) -> Self {
        let clock = CivilClock::new(config.timezone);
        Self::with_parts(config, Arc::new(MemoryStore::new()), Arc::new(clock))
    }

    pub fn with_parts(
        config: MeshiConfig,
        store: Arc<dyn MeetupStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            store,
            clock,
            auth: CredentialService::new(),
            inbox: Inbox::new(),
        }
    }

    pub fn builder(&self) -> MeetupBuilder<'_> {
        MeetupBuilder::new(self.store.as_ref(), self.clock.as_ref())
    }
}
