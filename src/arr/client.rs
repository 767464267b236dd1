use crate::arr::types::{Movie, NewTag, Tag};
use crate::config::RadarrConfig;
use crate::error::{check_status, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const SERVICE: &str = "radarr";

/// The Radarr operations a sync needs
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// List every tag defined in Radarr
    async fn fetch_tags(&self) -> Result<Vec<Tag>>;

    /// Create a tag. Radarr refuses a label that already exists.
    async fn create_tag(&self, label: &str) -> Result<Tag>;

    /// List every movie in the library
    async fn fetch_movies(&self) -> Result<Vec<Movie>>;

    /// Replace a movie record
    async fn update_movie(&self, movie: &Movie) -> Result<()>;
}

/// Radarr v3 API client authenticated with a static API key
pub struct RadarrClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RadarrClient {
    pub fn new(config: &RadarrConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build Radarr HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v3{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .header("X-Api-Key", &self.api_key)
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

#[async_trait::async_trait]
impl MovieCatalog for RadarrClient {
    async fn fetch_tags(&self) -> Result<Vec<Tag>> {
        self.get_json("/tag").await
    }

    async fn create_tag(&self, label: &str) -> Result<Tag> {
        let response = self
            .client
            .post(self.url("/tag"))
            .header("X-Api-Key", &self.api_key)
            .json(&NewTag::new(label))
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

    async fn fetch_movies(&self) -> Result<Vec<Movie>> {
        self.get_json("/movie").await
    }

    async fn update_movie(&self, movie: &Movie) -> Result<()> {
        let response = self
            .client
            .put(self.url("/movie"))
            .header("X-Api-Key", &self.api_key)
            .json(movie)
            .send()
            .await
            .map_err(|source| Error::Request {
                service: SERVICE,
                source,
            })?;

        check_status(SERVICE, response).await?;
        Ok(())
    }
}
