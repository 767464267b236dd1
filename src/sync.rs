//! One full reconciliation pass over the Radarr library.

use crate::arr::{Movie, MovieCatalog};
use crate::config::ProvidersConfig;
use crate::error::Result;
use crate::metadata::WatchProviderSource;
use crate::tags::{ensure_provider_tags, ProviderTagRegistry};
use serde::Serialize;

/// What happened to a single movie during a sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieOutcome {
    /// New tag list was sent to Radarr
    Updated { tags: Vec<i64> },
    /// Dry run: new tag list was computed but not sent
    WouldUpdate { tags: Vec<i64> },
    /// No flatrate offers in the configured region; movie left alone
    NoAvailability,
    /// Provider lookup or the Radarr update failed
    Failed { reason: String },
}

/// Counters for a finished sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub movies: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub tags_created: usize,
}

impl SyncSummary {
    fn record(&mut self, outcome: &MovieOutcome) {
        self.movies += 1;
        match outcome {
            MovieOutcome::Updated { .. } | MovieOutcome::WouldUpdate { .. } => self.updated += 1,
            MovieOutcome::NoAvailability => self.skipped += 1,
            MovieOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Drives a sync: create provider tags, classify tags, then reconcile each
/// movie in turn.
///
/// Movies are processed strictly one after another. Only the tag registry is
/// shared between movies.
pub struct Synchronizer<'a> {
    catalog: &'a dyn MovieCatalog,
    providers: &'a dyn WatchProviderSource,
    settings: &'a ProvidersConfig,
    dry_run: bool,
}

impl<'a> Synchronizer<'a> {
    pub fn new(
        catalog: &'a dyn MovieCatalog,
        providers: &'a dyn WatchProviderSource,
        settings: &'a ProvidersConfig,
    ) -> Self {
        Self {
            catalog,
            providers,
            settings,
            dry_run: false,
        }
    }

    /// Compute new tag lists without creating tags or updating movies
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run a full sync.
    ///
    /// Failing to list tags or movies aborts the run. Failures for a single
    /// movie are logged and counted in the summary.
    pub async fn run(&self) -> Result<SyncSummary> {
        let mut summary = SyncSummary::default();

        if self.settings.required.is_empty() {
            tracing::warn!("No required providers configured; provider tags will only be removed");
        }

        if self.dry_run {
            tracing::info!("Dry run: provider tags will not be created");
        } else {
            tracing::debug!("Creating provider tags in Radarr");
            summary.tags_created = ensure_provider_tags(
                self.catalog,
                &self.settings.tag_prefix,
                &self.settings.required,
            )
            .await;
        }

        let registry = self.build_registry().await?;

        tracing::debug!("Fetching movies from Radarr");
        let movies = self.catalog.fetch_movies().await?;
        tracing::info!("Reconciling provider tags for {} movies", movies.len());

        for movie in movies {
            let outcome = self.process_movie(&registry, movie).await;
            summary.record(&outcome);
        }

        Ok(summary)
    }

    async fn build_registry(&self) -> Result<ProviderTagRegistry> {
        let existing = self.catalog.fetch_tags().await?;
        tracing::debug!("Radarr has {} tags", existing.len());

        let registry = ProviderTagRegistry::new(
            &self.settings.tag_prefix,
            &self.settings.required,
            &existing,
        );
        tracing::debug!(
            managed = registry.to_remove().len(),
            addable = registry.to_add().len(),
            "Classified Radarr tags"
        );
        Ok(registry)
    }

    /// Look up availability for one movie, reconcile its tags and push the
    /// result
    pub async fn process_movie(
        &self,
        registry: &ProviderTagRegistry,
        mut movie: Movie,
    ) -> MovieOutcome {
        tracing::info!("Movie: {} (TMDB ID {})", movie.title, movie.tmdb_id);

        let available = match self
            .providers
            .flatrate_providers(movie.tmdb_id, &self.settings.region)
            .await
        {
            Ok(Some(available)) => available,
            Ok(None) => {
                tracing::info!("No flatrate providers in {}", self.settings.region);
                return MovieOutcome::NoAvailability;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to look up {} providers for {}: {}",
                    self.providers.name(),
                    movie.title,
                    e
                );
                return MovieOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };
        tracing::debug!(?available, "Flatrate providers");

        tracing::debug!(before = ?movie.tags, "Current tags");
        let tags = registry.reconcile(&movie.tags, &available);
        tracing::debug!(after = ?tags, "Reconciled tags");
        movie.tags = tags.clone();

        if self.dry_run {
            tracing::info!("Would update {} with tags {:?}", movie.title, tags);
            return MovieOutcome::WouldUpdate { tags };
        }

        match self.catalog.update_movie(&movie).await {
            Ok(()) => {
                tracing::info!("Updated {}", movie.title);
                MovieOutcome::Updated { tags }
            }
            Err(e) => {
                tracing::warn!("Failed to update {} in Radarr: {}", movie.title, e);
                MovieOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
