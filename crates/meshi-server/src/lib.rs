//! Meshi server — HTTP surface over the meetup store and enrichment pipeline.

pub mod auth;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
