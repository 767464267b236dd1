mod cli;

use elsewherr::arr::RadarrClient;
use elsewherr::config::{self, Config};
use elsewherr::metadata::TmdbClient;
use elsewherr::sync::Synchronizer;
use elsewherr::tags::canonical_label;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

async fn run_sync(config: &Config, dry_run: bool) -> Result<()> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let radarr = RadarrClient::new(&config.radarr, timeout)?;
    let tmdb = TmdbClient::new(&config.tmdb, timeout)?;

    tracing::info!(
        "Syncing {} provider tags for region {} into Radarr at {}",
        config.providers.required.len(),
        config.providers.region,
        config.radarr.url
    );

    let summary = Synchronizer::new(&radarr, &tmdb, &config.providers)
        .dry_run(dry_run)
        .run()
        .await
        .context("Sync aborted")?;

    tracing::info!(
        movies = summary.movies,
        updated = summary.updated,
        skipped = summary.skipped,
        failed = summary.failed,
        tags_created = summary.tags_created,
        "Sync complete"
    );

    Ok(())
}

/// Install the tracing subscriber.
///
/// Stdout gets `info` (or `debug` when verbose); the optional log file always
/// gets `debug`. `RUST_LOG` overrides the stdout level.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "elsewherr=debug".to_string()
        } else {
            "elsewherr=info".to_string()
        }
    });

    let stdout_layer = fmt::layer().with_filter(EnvFilter::new(&env_filter));

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {:?}", path))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(EnvFilter::new("elsewherr=debug")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { dry_run } => {
            // Config comes first: a missing file aborts before any network call
            let config = config::load_config_from(cli.config.as_deref())?;
            let log_file = cli.log_file.as_deref().or(config.log_file.as_deref());
            init_logging(cli.verbose, log_file)?;

            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(run_sync(&config, dry_run))
        }
        Commands::Validate { path } => {
            init_logging(cli.verbose, cli.log_file.as_deref())?;
            let path = path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("elsewherr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let path = config::find_config(path)?;
    println!("Validating config: {:?}", path);
    let config = config::load_config(&path)?;

    println!("✓ Configuration is valid");
    println!("  Radarr: {}", config.radarr.url);
    println!("  TMDB: {}", config.tmdb.url);
    println!("  Region: {}", config.providers.region);
    println!("  Tag prefix: {}", config.providers.tag_prefix);
    println!("  Required providers: {}", config.providers.required.len());
    for provider in &config.providers.required {
        println!(
            "    {} -> {}",
            provider,
            canonical_label(&config.providers.tag_prefix, provider)
        );
    }
    if config.providers.required.is_empty() {
        println!("  (no required providers: existing provider tags will only be removed)");
    }

    Ok(())
}
