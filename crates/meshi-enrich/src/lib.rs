//! Meshi Enrich — turns free-text meetup invitations into structured,
//! searchable, taggable records and assembles the stored meetup.

pub mod builder;
pub mod extract;

pub use builder::MeetupBuilder;
pub use extract::{Enrichment, enrich};
