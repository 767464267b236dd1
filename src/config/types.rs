use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub radarr: RadarrConfig,

    pub tmdb: TmdbConfig,

    pub providers: ProvidersConfig,

    /// Per-request timeout for both Radarr and TMDB calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Optional file that receives debug-level logs alongside stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_request_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RadarrConfig {
    pub url: String,

    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    pub api_key: String,

    /// Base URL of the TMDB v3 API
    #[serde(default = "default_tmdb_url")]
    pub url: String,
}

pub const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";

fn default_tmdb_url() -> String {
    DEFAULT_TMDB_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Prefix marking a Radarr tag as owned by elsewherr, e.g. `elsewherr_`
    pub tag_prefix: String,

    /// TMDB watch-provider region code, e.g. `GB` or `US`
    pub region: String,

    /// Streaming services to tag movies with, as TMDB names them
    #[serde(default)]
    pub required: Vec<String>,
}
