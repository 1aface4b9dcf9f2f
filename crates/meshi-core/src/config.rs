//! Configuration from environment variables.

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{Error, Result};

/// Timezone used for every timestamp when `MESHI_TIMEZONE` is unset.
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Top-level Meshi configuration.
#[derive(Debug, Clone, Serialize)]
pub struct MeshiConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Civil timezone for `created_at` and chat timestamps.
    #[serde(serialize_with = "serialize_tz")]
    pub timezone: Tz,
}

impl MeshiConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let tz_name =
            std::env::var("MESHI_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = parse_timezone(&tz_name)?;

        Ok(Self {
            host,
            port,
            timezone,
        })
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for MeshiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            timezone: chrono_tz::Asia::Tokyo,
        }
    }
}

/// Parse an IANA timezone name such as `Asia/Tokyo`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| Error::Config(format!("invalid timezone '{}': {}", name, e)))
}

fn serialize_tz<S: serde::Serializer>(tz: &Tz, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(tz.name())
}
