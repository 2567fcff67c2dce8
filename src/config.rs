//! Server settings from the environment: HOST, PORT, FORM_TTL_HOURS.
//! Missing or unusable values fall back to the defaults.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Forms not touched for this long are evicted.
    pub form_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None, None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("FORM_TTL_HOURS").ok(),
        )
    }

    /// Build from raw variable values, as read from the environment.
    pub fn from_vars(host: Option<String>, port: Option<String>, form_ttl_hours: Option<String>) -> Self {
        Self {
            host: host.filter(|s| !s.trim().is_empty()).unwrap_or_else(default_host),
            port: port
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or_else(default_port),
            form_ttl: form_ttl_hours
                .and_then(|h| ttl_from_hours(&h))
                .unwrap_or_else(|| Duration::from_secs(default_form_ttl_hours() * 3600)),
        }
    }
}

/// Hours to a TTL. Zero and values whose seconds overflow `u64` are refused.
fn ttl_from_hours(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(|hours| hours.checked_mul(3600))
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_form_ttl_hours() -> u64 {
    12
}
