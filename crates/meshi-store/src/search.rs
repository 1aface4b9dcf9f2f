//! Meetup list filtering for the public feed.

use meshi_core::{non_blank, Meetup};

/// Query parameters of the meetup feed. Blank values are ignored.
#[derive(Debug, Clone, Default)]
pub struct MeetupQuery {
    /// Case-insensitive substring of title, content or any hashtag.
    pub search: Option<String>,
    /// Substring of the meetup's `datetime`.
    pub date_filter: Option<String>,
}

impl MeetupQuery {
    fn matches(&self, meetup: &Meetup) -> bool {
        if let Some(needle) = non_blank(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            let hit = meetup.title.to_lowercase().contains(&needle)
                || meetup.content.to_lowercase().contains(&needle)
                || meetup
                    .hashtags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(date) = non_blank(self.date_filter.as_deref()) {
            match &meetup.datetime {
                Some(dt) if dt.contains(date) => {}
                _ => return false,
            }
        }

        true
    }
}

/// Apply `query` and order newest first.
///
/// `created_at` strings share one format and zone, so comparing them as
/// text orders them in time. Equal stamps fall back to the higher id.
pub fn search(meetups: Vec<Meetup>, query: &MeetupQuery) -> Vec<Meetup> {
    let mut hits: Vec<Meetup> = meetups.into_iter().filter(|m| query.matches(m)).collect();
    hits.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    hits
}
