//! Poller configuration
//!
//! Defines all configurable parameters for the poller including the
//! buildbot base URL, the builder list, and the two cycle delays.

use std::path::PathBuf;
use std::time::Duration;

use buildwatch_core::domain::BuilderName;

/// Default buildbot builders directory to poll
pub const DEFAULT_BASE_URL: &str = "https://build.chromium.org/p/client.flutter/json/builders";

/// Default builder list, comma-separated (clap-friendly)
pub const DEFAULT_BUILDERS: &str = "Linux,Linux Engine,Mac,Mac Engine";

/// Delay between cycles when at least one fetch resolved
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Delay between cycles when every fetch rejected
const DEFAULT_FAILURE_BACKOFF: Duration = Duration::from_secs(60);

/// Poller configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the buildbot builders directory
    pub base_url: String,

    /// Builders to poll each cycle
    pub builders: Vec<BuilderName>,

    /// Delay before the next cycle after a cycle with any resolution
    pub poll_interval: Duration,

    /// Delay before the next cycle after a cycle that failed outright
    pub failure_backoff: Duration,

    /// Where to write the rendered status page, if anywhere
    pub html_out: Option<PathBuf>,
}

impl Config {
    /// Creates a configuration with default delays
    pub fn new(base_url: String, builders: Vec<BuilderName>) -> Self {
        Self {
            base_url,
            builders,
            poll_interval: DEFAULT_POLL_INTERVAL,
            failure_backoff: DEFAULT_FAILURE_BACKOFF,
            html_out: None,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.builders.is_empty() {
            anyhow::bail!("builder list cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.failure_backoff.is_zero() {
            anyhow::bail!("failure_backoff must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL.to_string(),
            parse_builders(DEFAULT_BUILDERS),
        )
    }
}

/// Parses a comma-separated builder list, skipping empty segments
pub fn parse_builders(list: &str) -> Vec<BuilderName> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(BuilderName::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(30));
        assert_eq!(config.failure_backoff, Duration::from_secs(60));
        assert_eq!(config.builders.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_builder_list() {
        let builders = parse_builders(DEFAULT_BUILDERS);
        let names: Vec<&str> = builders.iter().map(|b| b.as_str()).collect();
        assert_eq!(names, vec!["Linux", "Linux Engine", "Mac", "Mac Engine"]);
    }

    #[test]
    fn test_parse_builders_skips_empty_segments() {
        let builders = parse_builders("Linux, ,Mac,");
        let names: Vec<&str> = builders.iter().map(|b| b.as_str()).collect();
        assert_eq!(names, vec!["Linux", "Mac"]);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty builder list should fail
        config.builders = Vec::new();
        assert!(config.validate().is_err());

        config.builders = parse_builders("Linux");

        // Invalid URL should fail
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8010/json/builders".to_string();
        assert!(config.validate().is_ok());

        // Zero delays should fail
        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
