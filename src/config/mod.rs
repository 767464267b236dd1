mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locations searched, in order, when no config path is given
const DEFAULT_PATHS: [&str; 4] = [
    "./config.toml",
    "./elsewherr.toml",
    "~/.config/elsewherr/config.toml",
    "/etc/elsewherr/config.toml",
];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content)?;

    config.radarr.url = config.radarr.url.trim_end_matches('/').to_string();
    config.tmdb.url = config.tmdb.url.trim_end_matches('/').to_string();

    validate_config(&config)?;

    Ok(config)
}

/// Resolve the config file to use.
///
/// An explicit path is returned as-is; otherwise the default locations are
/// searched. There is no built-in default configuration, so finding nothing
/// is an error.
pub fn find_config(custom_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = custom_path {
        return Ok(path.to_path_buf());
    }

    for path_str in DEFAULT_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    anyhow::bail!(
        "No config file found (searched {}); pass one with --config",
        DEFAULT_PATHS.join(", ")
    )
}

/// Find and load the config file
pub fn load_config_from(custom_path: Option<&Path>) -> Result<Config> {
    let path = find_config(custom_path)?;
    load_config(&path)
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.radarr.api_key.trim().is_empty() {
        anyhow::bail!("radarr.api_key cannot be empty");
    }
    validate_url("radarr.url", &config.radarr.url)?;

    if config.tmdb.api_key.trim().is_empty() {
        anyhow::bail!("tmdb.api_key cannot be empty");
    }
    validate_url("tmdb.url", &config.tmdb.url)?;

    // An empty prefix is a substring of every label and would claim every tag
    if config.providers.tag_prefix.is_empty() {
        anyhow::bail!("providers.tag_prefix cannot be empty");
    }

    if config.providers.region.trim().is_empty() {
        anyhow::bail!("providers.region cannot be empty");
    }

    if config.request_timeout_secs == 0 {
        anyhow::bail!("request_timeout_secs cannot be 0");
    }

    Ok(())
}

fn validate_url(key: &str, value: &str) -> Result<()> {
    let url = reqwest::Url::parse(value).with_context(|| format!("{} is not a valid URL", key))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{} must use http or https, got {}", key, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [radarr]
        url = "http://localhost:7878/"
        api_key = "radarr-key"

        [tmdb]
        api_key = "tmdb-key"

        [providers]
        tag_prefix = "elsewherr_"
        region = "GB"
        required = ["Netflix", "Disney Plus"]
    "#;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(VALID).unwrap();
        assert_eq!(config.radarr.url, "http://localhost:7878");
        assert_eq!(config.tmdb.url, DEFAULT_TMDB_URL);
        assert_eq!(config.providers.required, vec!["Netflix", "Disney Plus"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_rejects_empty_prefix() {
        let content = VALID.replace("tag_prefix = \"elsewherr_\"", "tag_prefix = \"\"");
        let err = parse_config(&content).unwrap_err();
        assert!(err.to_string().contains("tag_prefix"));
    }

    #[test]
    fn test_rejects_missing_api_key() {
        let content = VALID.replace("api_key = \"radarr-key\"", "api_key = \"  \"");
        let err = parse_config(&content).unwrap_err();
        assert!(err.to_string().contains("radarr.api_key"));
    }

    #[test]
    fn test_rejects_bad_url() {
        let content = VALID.replace("http://localhost:7878/", "ftp://localhost");
        assert!(parse_config(&content).is_err());
    }

    #[test]
    fn test_missing_section_is_error() {
        let content = VALID.replace("[tmdb]\n        api_key = \"tmdb-key\"", "");
        assert!(parse_config(&content).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_find_config_prefers_explicit_path() {
        let path = Path::new("/some/where.toml");
        assert_eq!(find_config(Some(path)).unwrap(), path);
    }
}
