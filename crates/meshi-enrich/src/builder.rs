//! Meetup assembly: request + creator + clock → stored meetup.

use tracing::{debug, info};

use crate::extract::{self, hashtags};
use meshi_core::{non_blank, Clock, CreateMeetupRequest, Meetup, Result, StructuredData};
use meshi_store::MeetupStore;

/// Genre word used in titles when the caller gave no food item.
const DEFAULT_FOOD: &str = "食事";

/// Builds meetups and registers them in a store.
pub struct MeetupBuilder<'a> {
    store: &'a dyn MeetupStore,
    clock: &'a dyn Clock,
}

impl<'a> MeetupBuilder<'a> {
    pub fn new(store: &'a dyn MeetupStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Assemble a meetup for `creator` and register it with the creator as
    /// its first participant and an empty chat room.
    pub fn create(&self, request: &CreateMeetupRequest, creator: &str) -> Result<Meetup> {
        let id = self.store.next_id()?;
        let meetup = assemble(id, request, creator, self.clock.timestamp());

        self.store.insert(meetup.clone(), vec![creator.to_string()])?;
        info!("Created meetup {} by {}: {}", meetup.id, creator, meetup.title);
        Ok(meetup)
    }
}

/// Explicit structured fields the caller filled in directly.
struct ExplicitFields<'r> {
    food_item: Option<&'r str>,
    budget: Option<&'r str>,
    location: Option<&'r str>,
}

impl<'r> ExplicitFields<'r> {
    fn from_request(request: &'r CreateMeetupRequest) -> Option<Self> {
        let fields = Self {
            food_item: non_blank(request.food_item.as_deref()),
            budget: non_blank(request.budget.as_deref()),
            location: non_blank(request.location.as_deref()),
        };
        if fields.food_item.is_none() && fields.budget.is_none() && fields.location.is_none() {
            None
        } else {
            Some(fields)
        }
    }

    fn structured(&self) -> StructuredData {
        StructuredData {
            food_genre: self.food_item.map(str::to_string),
            specific_menu: None,
            location: self.location.map(str::to_string),
            budget: self.budget.map(str::to_string),
            other_requirements: Vec::new(),
        }
    }

    fn content(&self, fallback: &str) -> String {
        let mut parts = Vec::new();
        if let Some(food) = self.food_item {
            parts.push(format!("{}の募集", food));
        }
        if let Some(budget) = self.budget {
            parts.push(format!("予算:{}", budget));
        }
        if let Some(location) = self.location {
            parts.push(format!("場所:{}", location));
        }
        if parts.is_empty() {
            fallback.to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Not length-limited, unlike free-text titles.
    fn title(&self) -> String {
        format!("【{}募集】", self.food_item.unwrap_or(DEFAULT_FOOD))
    }
}

/// Assemble a meetup without touching any store.
///
/// Explicit fields bypass extraction entirely; otherwise the free-text
/// pipeline derives everything from `request.content`.
pub fn assemble(
    id: u64,
    request: &CreateMeetupRequest,
    creator: &str,
    created_at: String,
) -> Meetup {
    let (title, content, structured_data, hashtags) = match ExplicitFields::from_request(request) {
        Some(fields) => {
            debug!("Meetup {} uses explicit fields", id);
            let structured = fields.structured();
            let content = fields.content(&request.content);
            let tags = hashtags::generate(&content, &structured);
            (fields.title(), content, structured, tags)
        }
        None => {
            let enriched = extract::enrich(&request.content);
            (
                enriched.title,
                enriched.description,
                enriched.structured,
                enriched.hashtags,
            )
        }
    };

    let datetime = non_blank(request.structured_datetime.as_deref())
        .or_else(|| non_blank(request.datetime.as_deref()))
        .map(str::to_string);

    Meetup {
        id,
        title,
        content,
        original_content: request.content.clone(),
        structured_data,
        hashtags,
        creator: creator.to_string(),
        created_at,
        datetime,
    }
}
