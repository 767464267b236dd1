//! Streaming availability lookup.
//!
//! [`WatchProviderSource`] is what the sync engine consumes; [`TmdbClient`]
//! is the production implementation backed by TMDB.

pub mod provider;
pub mod tmdb;

pub use provider::WatchProviderSource;
pub use tmdb::TmdbClient;
