//! # nis-api
//!
//! Launch Library 2 HTTP client for nextinspace.
//!
//! Fetches upcoming events and launches, normalizes them with `nis-core`,
//! and merges both feeds into one date-ordered sequence:
//! - `GET {base}/event/upcoming?limit={n}`
//! - `GET {base}/launch?limit={n}&net__gte={YYYY-MM-DD}`
//! - `GET {launcher configuration url}` per launch, only when asked for
//!
//! Any failure aborts the whole call. Nothing is retried.

mod error;
mod events;
mod http;
mod launches;
mod upcoming;
mod vehicles;

pub use error::ApiError;
pub use nis_core::{Event, EventDate, ItemKind, Launch, SpaceItem, Vehicle};

use nis_config::ApiConfig;

/// How much to fetch for each launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchDetail {
    /// Launch fields only. One request per feed.
    #[default]
    Summary,
    /// Also fetch the launch vehicle, one extra request per launch.
    WithVehicle,
}

impl LaunchDetail {
    #[must_use]
    pub const fn includes_vehicle(self) -> bool {
        matches!(self, Self::WithVehicle)
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Launch Library 2 API.
#[derive(Debug, Clone)]
pub struct SpaceClient {
    http: reqwest::Client,
    base_url: String,
    max_concurrent_vehicle_requests: usize,
}

impl SpaceClient {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. no TLS backend available).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_concurrent_vehicle_requests: config.max_concurrent_vehicle_requests.max(1),
        })
    }

    /// Base URL requests are built from, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a paginated list endpoint and return its `results`, capped at
    /// `limit` items.
    async fn fetch_results(
        &self,
        url: &str,
        limit: usize,
    ) -> Result<Vec<serde_json::Value>, ApiError> {
        let body = http::get_json(&self.http, url).await?;
        let mut results = http::take_results(body, url)?;
        results.truncate(limit);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_defaults() {
        let client = SpaceClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://ll.thespacedevs.com/2.0.0");
        assert_eq!(client.max_concurrent_vehicle_requests, 4);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/2.0.0/".into(),
            ..ApiConfig::default()
        };
        let client = SpaceClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/2.0.0");
    }

    #[test]
    fn summary_is_the_default_detail() {
        assert_eq!(LaunchDetail::default(), LaunchDetail::Summary);
        assert!(!LaunchDetail::Summary.includes_vehicle());
        assert!(LaunchDetail::WithVehicle.includes_vehicle());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_upcoming() {
        let client = SpaceClient::new(&ApiConfig::default()).unwrap();
        let items = client.upcoming(5, LaunchDetail::Summary).await.unwrap();
        println!("\n── upcoming(5) ── {} items", items.len());
        for item in &items {
            println!(
                "  [{:>6}] {} | {}",
                item.kind(),
                item.date(),
                item.name().unwrap_or("-"),
            );
        }
        assert!(items.len() <= 5);
    }
}
