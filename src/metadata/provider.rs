//! Watch-provider lookup abstraction.

use async_trait::async_trait;

use crate::error::Result;

/// Source of per-region streaming availability for a movie.
#[async_trait]
pub trait WatchProviderSource: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    /// Names of the flatrate (subscription) providers offering the movie in
    /// `region`.
    ///
    /// Returns `Ok(None)` when the service has no flatrate entry for the
    /// region. That is the normal answer for most catalogue titles and is not
    /// an error. `Ok(Some(vec![]))` means the region lists flatrate offers but
    /// none of them.
    async fn flatrate_providers(&self, tmdb_id: i64, region: &str)
        -> Result<Option<Vec<String>>>;
}
