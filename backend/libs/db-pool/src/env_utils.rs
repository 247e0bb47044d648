//! Environment variable parsing utilities

use std::str::FromStr;

/// Parse an environment variable with a default fallback
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
