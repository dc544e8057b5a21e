// * Runtime configuration
// * Defaults come from `constants`, overrides from `GW_SCOUT_*` environment variables.

pub mod constants;

use std::time::Duration;
use thiserror::Error;

use constants::{
    DEFAULT_CREW_PAGE_URL, DEFAULT_HISTORY_URL, DEFAULT_MEMBERS_URL, DEFAULT_PACING_MS,
    DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT_SECS, ID_PLACEHOLDER,
};

const ENV_MY_GUILD: &str = "GW_SCOUT_MY_GUILD";
const ENV_SEARCH_URL: &str = "GW_SCOUT_SEARCH_URL";
const ENV_HISTORY_URL: &str = "GW_SCOUT_HISTORY_URL";
const ENV_MEMBERS_URL: &str = "GW_SCOUT_MEMBERS_URL";
const ENV_CREW_PAGE_URL: &str = "GW_SCOUT_CREW_PAGE_URL";
const ENV_PACING_MS: &str = "GW_SCOUT_PACING_MS";
const ENV_TIMEOUT_SECS: &str = "GW_SCOUT_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must contain the '{{id}}' placeholder, got '{value}'")]
    MissingPlaceholder { key: &'static str, value: String },
}

/// Settings for one report engine instance
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutConfig {
    /// Operator's own crew. `None` disables own-history and comparison sections.
    pub my_guild: Option<String>,
    pub search_url: String,
    pub history_url: String,
    pub members_url: String,
    pub crew_page_url: String,
    pub pacing: Duration,
    pub request_timeout: Duration,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            my_guild: None,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            history_url: DEFAULT_HISTORY_URL.to_string(),
            members_url: DEFAULT_MEMBERS_URL.to_string(),
            crew_page_url: DEFAULT_CREW_PAGE_URL.to_string(),
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ScoutConfig {
    /// Builds a config from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // * Separated from `from_env` so tests never touch the real environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.my_guild = lookup(ENV_MY_GUILD)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(url) = lookup(ENV_SEARCH_URL) {
            config.search_url = url;
        }
        if let Some(url) = lookup(ENV_HISTORY_URL) {
            config.history_url = require_placeholder(ENV_HISTORY_URL, url)?;
        }
        if let Some(url) = lookup(ENV_MEMBERS_URL) {
            config.members_url = require_placeholder(ENV_MEMBERS_URL, url)?;
        }
        if let Some(url) = lookup(ENV_CREW_PAGE_URL) {
            config.crew_page_url = require_placeholder(ENV_CREW_PAGE_URL, url)?;
        }
        if let Some(ms) = lookup(ENV_PACING_MS) {
            config.pacing = Duration::from_millis(parse_number(ENV_PACING_MS, &ms)?);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }

        Ok(config)
    }

    pub fn with_my_guild(mut self, id: impl Into<String>) -> Self {
        self.my_guild = Some(id.into());
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

fn require_placeholder(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.contains(ID_PLACEHOLDER) {
        Ok(value)
    } else {
        Err(ConfigError::MissingPlaceholder { key, value })
    }
}
