//! Application timing and shelf-life configuration.
//!
//! Values come from `PANTRY_*` variables captured at build time (the browser
//! has no process environment). Every key is optional and falls back to its
//! `DEFAULT_*` constant.

use std::time::Duration;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
pub const DEFAULT_SCAN_DELAY_MS: u64 = 2000;
pub const DEFAULT_TIP_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

pub const REPLY_DELAY_KEY: &str = "PANTRY_REPLY_DELAY_MS";
pub const SCAN_DELAY_KEY: &str = "PANTRY_SCAN_DELAY_MS";
pub const TIP_INTERVAL_KEY: &str = "PANTRY_TIP_INTERVAL_MS";
pub const SHELF_LIFE_KEY: &str = "PANTRY_SHELF_LIFE_DAYS";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A key was present but its value did not parse.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated assistant "thinking" time before a reply is appended.
    pub reply_delay: Duration,
    /// Simulated detection time between a scan and its results.
    pub scan_delay: Duration,
    /// How long each tip stays on the tips banner.
    pub tip_interval: Duration,
    /// Days until a freshly scanned item expires.
    pub shelf_life_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            scan_delay: Duration::from_millis(DEFAULT_SCAN_DELAY_MS),
            tip_interval: Duration::from_millis(DEFAULT_TIP_INTERVAL_MS),
            shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
        }
    }
}

impl AppConfig {
    /// Build typed config from an arbitrary key lookup.
    ///
    /// Optional:
    /// - `PANTRY_REPLY_DELAY_MS`: default 1500
    /// - `PANTRY_SCAN_DELAY_MS`: default 2000
    /// - `PANTRY_TIP_INTERVAL_MS`: default 5000
    /// - `PANTRY_SHELF_LIFE_DAYS`: default 7
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a present value is not a
    /// non-negative integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let reply_ms = parse_u64(&lookup, REPLY_DELAY_KEY, DEFAULT_REPLY_DELAY_MS)?;
        let scan_ms = parse_u64(&lookup, SCAN_DELAY_KEY, DEFAULT_SCAN_DELAY_MS)?;
        let tip_ms = parse_u64(&lookup, TIP_INTERVAL_KEY, DEFAULT_TIP_INTERVAL_MS)?;
        let shelf_life_days = parse_u32(&lookup, SHELF_LIFE_KEY, DEFAULT_SHELF_LIFE_DAYS)?;

        Ok(Self {
            reply_delay: Duration::from_millis(reply_ms),
            scan_delay: Duration::from_millis(scan_ms),
            tip_interval: Duration::from_millis(tip_ms),
            shelf_life_days,
        })
    }

    /// Build config from `PANTRY_*` variables set when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let raw = match key {
                REPLY_DELAY_KEY => option_env!("PANTRY_REPLY_DELAY_MS"),
                SCAN_DELAY_KEY => option_env!("PANTRY_SCAN_DELAY_MS"),
                TIP_INTERVAL_KEY => option_env!("PANTRY_TIP_INTERVAL_MS"),
                SHELF_LIFE_KEY => option_env!("PANTRY_SHELF_LIFE_DAYS"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_u32(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: u32) -> Result<u32, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
