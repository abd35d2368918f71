//! Draft timing configuration.
//!
//! Defaults match the mailer front end: save after one quiet second, keep
//! drafts for a week. Native hosts may override any value through the
//! environment; in the browser the environment is empty and defaults apply.

use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_SAVED_NOTICE_MS: u64 = 2000;
pub const DEFAULT_RECOVERED_NOTICE_MS: u64 = 5000;
pub const DEFAULT_CLEARED_NOTICE_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftConfig {
    /// Quiet period after the last edit before a save fires.
    pub debounce: Duration,
    /// Age at which a stored draft stops being restored.
    pub expiry: Duration,
    /// How long the "Draft saved" indicator stays visible.
    pub saved_notice: Duration,
    /// How long the "recovered" notice stays visible.
    pub recovered_notice: Duration,
    /// How long the "cleared" notice stays visible.
    pub cleared_notice: Duration,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            expiry: Duration::from_secs(DEFAULT_EXPIRY_SECS),
            saved_notice: Duration::from_millis(DEFAULT_SAVED_NOTICE_MS),
            recovered_notice: Duration::from_millis(DEFAULT_RECOVERED_NOTICE_MS),
            cleared_notice: Duration::from_millis(DEFAULT_CLEARED_NOTICE_MS),
        }
    }
}

impl DraftConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `DRAFT_DEBOUNCE_MS`: default 1000
    /// - `DRAFT_EXPIRY_SECS`: default 604800 (7 days)
    /// - `DRAFT_SAVED_NOTICE_MS`: default 2000
    /// - `DRAFT_RECOVERED_NOTICE_MS`: default 5000
    /// - `DRAFT_CLEARED_NOTICE_MS`: default 3000
    ///
    /// Unparseable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |key: &str, default: u64| Duration::from_millis(parse_or(&lookup, key, default));
        Self {
            debounce: millis("DRAFT_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
            expiry: Duration::from_secs(parse_or(&lookup, "DRAFT_EXPIRY_SECS", DEFAULT_EXPIRY_SECS)),
            saved_notice: millis("DRAFT_SAVED_NOTICE_MS", DEFAULT_SAVED_NOTICE_MS),
            recovered_notice: millis("DRAFT_RECOVERED_NOTICE_MS", DEFAULT_RECOVERED_NOTICE_MS),
            cleared_notice: millis("DRAFT_CLEARED_NOTICE_MS", DEFAULT_CLEARED_NOTICE_MS),
        }
    }

    /// Expiry threshold in milliseconds, saturating at `i64::MAX`.
    #[must_use]
    pub fn expiry_millis(&self) -> i64 {
        i64::try_from(self.expiry.as_millis()).unwrap_or(i64::MAX)
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
