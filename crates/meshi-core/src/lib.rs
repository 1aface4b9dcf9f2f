//! Meshi Core — shared records, configuration, civil-timezone clock.

pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{CivilClock, Clock, FixedClock};
pub use config::MeshiConfig;
pub use error::{Error, Result};
pub use types::*;
