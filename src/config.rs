use std::env;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::warn;

pub(crate) const DEFAULT_INSIGHT_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_INSIGHT_MODEL: &str = "gpt-4o-mini";

/// Which backend answers insight requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsightBackend {
    /// Local template after a short artificial delay.
    Simulated,
    /// OpenAI-compatible chat-completions endpoint.
    Remote,
}

impl InsightBackend {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "simulated" | "sim" | "local" => Some(Self::Simulated),
            "remote" | "openai" => Some(Self::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) insight_backend: InsightBackend,
    pub(crate) insight_url: String,
    pub(crate) insight_model: String,
    pub(crate) insight_api_key: Option<String>,
    pub(crate) insight_delay: Duration,
    /// Pinned calendar date; `None` reads the local clock.
    pub(crate) today: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insight_backend: InsightBackend::Simulated,
            insight_url: DEFAULT_INSIGHT_URL.to_string(),
            insight_model: DEFAULT_INSIGHT_MODEL.to_string(),
            insight_api_key: None,
            insight_delay: Duration::from_millis(1500),
            today: None,
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Unset or empty keys keep
    /// their defaults; malformed values are logged and ignored.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("FINTRACK_INSIGHT") {
            match InsightBackend::parse(&raw) {
                Some(backend) => config.insight_backend = backend,
                None => warn!(value = %raw, "Unknown FINTRACK_INSIGHT, using simulated"),
            }
        }
        if let Some(url) = get("FINTRACK_INSIGHT_URL") {
            config.insight_url = url;
        }
        if let Some(model) = get("FINTRACK_INSIGHT_MODEL") {
            config.insight_model = model;
        }
        config.insight_api_key = get("FINTRACK_INSIGHT_API_KEY");

        if let Some(raw) = get("FINTRACK_INSIGHT_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.insight_delay = Duration::from_millis(ms),
                Err(_) => warn!(value = %raw, "Invalid FINTRACK_INSIGHT_DELAY_MS, ignoring"),
            }
        }
        if let Some(raw) = get("FINTRACK_TODAY") {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => config.today = Some(date),
                Err(_) => warn!(value = %raw, "Invalid FINTRACK_TODAY, expected YYYY-MM-DD"),
            }
        }

        config
    }

    /// The calendar date used for new transactions and date buckets.
    pub(crate) fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
