//! Buildwatch HTTP Client
//!
//! A small, type-safe client for the buildbot master's JSON API.
//!
//! The API exposes one directory per builder: `{base}/{builder}/builds`
//! lists builds keyed by number, and `{base}/{builder}/builds/{n}` gives
//! the detail for one build. This crate wraps both plus the derived
//! "did the latest build pass" question the poller actually asks.
//!
//! # Example
//!
//! ```no_run
//! use buildwatch_client::BuildbotClient;
//! use buildwatch_core::domain::BuilderName;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), buildwatch_client::ClientError> {
//!     let client =
//!         BuildbotClient::new("https://build.chromium.org/p/client.flutter/json/builders");
//!
//!     let green = client.fetch_builder_status(&BuilderName::new("Linux")).await?;
//!     println!("Linux is {}", if green { "green" } else { "red" });
//!     Ok(())
//! }
//! ```

mod builders;
pub mod error;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for a buildbot master's JSON API
#[derive(Debug, Clone)]
pub struct BuildbotClient {
    /// Base URL of the builders directory
    /// (e.g., "https://build.chromium.org/p/client.flutter/json/builders")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BuildbotClient {
    /// Create a new buildbot client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the builders directory
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new buildbot client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use buildwatch_client::BuildbotClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BuildbotClient::with_client("http://localhost:8010/json/builders", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the builders directory
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and deserialize the JSON body
    ///
    /// Any status other than 200 rejects, mirroring the strict check the
    /// original widget applied before reading the body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ClientError::api_error(status.as_u16(), url));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("{url}: {e}")))
    }
}
