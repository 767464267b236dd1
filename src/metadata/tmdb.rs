//! TMDB (The Movie Database) watch-provider lookup.
//!
//! Implements [`WatchProviderSource`] with the TMDB v3
//! `/movie/{id}/watch/providers` endpoint. There is no rate limiting or retry:
//! a failed lookup is reported to the caller, which skips that movie.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::error::{check_status, Error, Result};
use crate::metadata::provider::WatchProviderSource;

const SERVICE: &str = "tmdb";

// ---------------------------------------------------------------------------
// TMDB API response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct WatchProvidersResponse {
    #[serde(default)]
    results: HashMap<String, RegionProviders>,
}

#[derive(Debug, Deserialize)]
struct RegionProviders {
    flatrate: Option<Vec<ProviderOffer>>,
}

#[derive(Debug, Deserialize)]
struct ProviderOffer {
    provider_name: String,
}

impl WatchProvidersResponse {
    /// Flatrate provider names for `region`, or `None` if the region has no
    /// flatrate entry.
    pub(crate) fn flatrate(self, region: &str) -> Option<Vec<String>> {
        let mut results = self.results;
        let offers = results.remove(region)?.flatrate?;
        Some(offers.into_iter().map(|o| o.provider_name).collect())
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// TMDB watch-provider client.
///
/// # Examples
///
/// ```no_run
/// use elsewherr::config::TmdbConfig;
/// use elsewherr::metadata::TmdbClient;
/// use std::time::Duration;
///
/// let config = TmdbConfig {
///     api_key: "your-api-key".into(),
///     url: "https://api.themoviedb.org/3".into(),
/// };
/// let client = TmdbClient::new(&config, Duration::from_secs(30)).unwrap();
/// ```
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build TMDB HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn watch_providers(&self, tmdb_id: i64) -> Result<WatchProvidersResponse> {
        let url = format!("{}/movie/{}/watch/providers", self.base_url, tmdb_id);
        debug!(url = %url, "TMDB watch providers");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| Error::Request {
                service: SERVICE,
                source,
            })?;

        check_status(SERVICE, response)
            .await?
            .json()
            .await
            .map_err(|source| Error::Decode {
                service: SERVICE,
                source,
            })
    }
}

#[async_trait]
impl WatchProviderSource for TmdbClient {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn flatrate_providers(
        &self,
        tmdb_id: i64,
        region: &str,
    ) -> Result<Option<Vec<String>>> {
        let response = self.watch_providers(tmdb_id).await?;
        debug!(tmdb_id, regions = response.results.len(), "TMDB regions with offers");
        Ok(response.flatrate(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> WatchProvidersResponse {
        serde_json::from_str(json).unwrap()
    }

    const HEAT: &str = r#"{
        "id": 949,
        "results": {
            "GB": {
                "link": "https://www.themoviedb.org/movie/949-heat/watch?locale=GB",
                "flatrate": [
                    {"logo_path": "/a.jpg", "provider_id": 8, "provider_name": "Netflix", "display_priority": 1},
                    {"logo_path": "/b.jpg", "provider_id": 337, "provider_name": "Disney Plus", "display_priority": 2}
                ],
                "rent": [
                    {"logo_path": "/c.jpg", "provider_id": 2, "provider_name": "Apple TV", "display_priority": 4}
                ]
            },
            "US": {
                "link": "https://www.themoviedb.org/movie/949-heat/watch?locale=US",
                "buy": [
                    {"logo_path": "/c.jpg", "provider_id": 2, "provider_name": "Apple TV", "display_priority": 4}
                ]
            }
        }
    }"#;

    #[test]
    fn test_flatrate_for_region() {
        assert_eq!(
            parse(HEAT).flatrate("GB"),
            Some(vec!["Netflix".to_string(), "Disney Plus".to_string()])
        );
    }

    #[test]
    fn test_region_without_flatrate() {
        assert_eq!(parse(HEAT).flatrate("US"), None);
    }

    #[test]
    fn test_unknown_region() {
        assert_eq!(parse(HEAT).flatrate("DE"), None);
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(parse(r#"{"id": 1, "results": {}}"#).flatrate("GB"), None);
        assert_eq!(parse(r#"{"id": 1}"#).flatrate("GB"), None);
    }
}
