//! Civil-timezone clock.
//!
//! Every timestamp in the system comes from a [`Clock`], rendered as
//! RFC 3339 with microseconds and a numeric offset. All values share one
//! zone and one width, so they sort lexically in chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use parking_lot::Mutex;

/// Source of "now" in a named civil timezone.
pub trait Clock: Send + Sync {
    /// Current instant in the clock's timezone.
    fn now(&self) -> DateTime<Tz>;

    /// Current instant as a fixed-width ISO-8601 string.
    fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

/// Render a timestamp the way every stored record carries it.
pub fn format_timestamp(at: &DateTime<Tz>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Wall clock converted into a configured timezone.
#[derive(Debug, Clone, Copy)]
pub struct CivilClock {
    tz: Tz,
}

impl CivilClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for CivilClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Manually advanced clock for tests.
pub struct FixedClock {
    at: Mutex<DateTime<Tz>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Tz>) -> Self {
        Self { at: Mutex::new(at) }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: chrono::Duration) {
        let mut at = self.at.lock();
        *at += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        *self.at.lock()
    }
}
