//! Inspector configuration from environment variables

use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Pretty-print JSON output
    pub pretty: bool,

    /// Exit non-zero when any block fails to parse
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            pretty: env_flag("XGID_PRETTY").unwrap_or(true),
            strict: env_flag("XGID_STRICT").unwrap_or(false),
        }
    }
}

/// Accepts 1/0, true/false, yes/no, on/off (case-insensitive).
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| parse_flag(&v))
}
