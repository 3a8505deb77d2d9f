// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

mod logging;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use remote_identity::{
    detect_platform, find_matching_repository, load_config, parse_remote,
    parse_repository_identifier, same_github_remote, HostedRepository, ParsedRemote,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Parse git remote URLs and match them against known repositories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Repository list (default: ~/.remote-identity/repositories.toml)
    #[arg(long, global = true, env = "REMOTE_IDENTITY_CONFIG")]
    config: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, global = true, env = "REMOTE_IDENTITY_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Also write logs to rolling files in this directory
    #[arg(long, global = true, env = "REMOTE_IDENTITY_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, global = true, env = "REMOTE_IDENTITY_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a remote URL into hostname, owner and repository name
    Parse { url: String },
    /// Parse a remote URL or a bare `owner/name` pair
    Identify { input: String },
    /// Check whether a remote URL is a remote for the given clone URL
    Same {
        /// Clone URL of the known repository; omit for a repository without one
        #[arg(long)]
        clone_url: Option<String>,
        candidate: String,
    },
    /// Find the configured repository a remote URL belongs to
    Find { url: String },
}

#[derive(Serialize)]
struct ParseReport<'a> {
    #[serde(flatten)]
    remote: &'a ParsedRemote,
    platform: &'a str,
}

#[derive(Serialize)]
struct SameReport<'a> {
    clone_url: Option<&'a str>,
    candidate: &'a str,
    same: bool,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_parse(url: &str, json: bool) -> Result<()> {
    let remote = parse_remote(url).ok_or_else(|| eyre!("Not a recognized remote URL: {url}"))?;
    let platform = detect_platform(&remote);
    if json {
        return print_json(&ParseReport {
            remote: &remote,
            platform: platform.name(),
        });
    }
    println!("hostname: {}", remote.hostname());
    println!("owner:    {}", remote.owner());
    println!("name:     {}", remote.name());
    println!("platform: {}", platform.name());
    Ok(())
}

fn run_identify(input: &str, json: bool) -> Result<()> {
    let identifier = parse_repository_identifier(input)
        .ok_or_else(|| eyre!("Not a remote URL or owner/name pair: {input}"))?;
    if json {
        return print_json(&identifier);
    }
    match &identifier.hostname {
        Some(hostname) => println!("{hostname}/{}/{}", identifier.owner, identifier.name),
        None => println!("{}/{}", identifier.owner, identifier.name),
    }
    Ok(())
}

/// Builds a repository record around a bare clone URL.
fn ad_hoc_repository(clone_url: Option<&str>) -> HostedRepository {
    let parsed = clone_url.and_then(parse_remote);
    HostedRepository::new(
        parsed.as_ref().map_or("", ParsedRemote::owner),
        parsed.as_ref().map_or("", ParsedRemote::name),
        clone_url.map(str::to_string),
    )
}

fn run_same(clone_url: Option<&str>, candidate: &str, json: bool) -> Result<()> {
    let repository = ad_hoc_repository(clone_url);
    let same = same_github_remote(&repository, candidate);
    if json {
        return print_json(&SameReport {
            clone_url,
            candidate,
            same,
        });
    }
    println!("{same}");
    Ok(())
}

fn run_find(config: Option<&Path>, url: &str, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let repository = find_matching_repository(config.repositories(), url)
        .ok_or_else(|| eyre!("No configured repository matches {url}"))?;
    info!("Matched {} to {}", url, repository.display_name());
    if json {
        return print_json(repository);
    }
    println!("{}", repository.display_name());
    Ok(())
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    init_logging(LogConfig {
        log_dir: args.log_dir.clone(),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    })?;
    if let Some(dir) = &args.log_dir {
        debug!("Writing logs to {}", dir.join(LOG_FILENAME).display());
    }

    match &args.command {
        Command::Parse { url } => run_parse(url, args.json),
        Command::Identify { input } => run_identify(input, args.json),
        Command::Same {
            clone_url,
            candidate,
        } => run_same(clone_url.as_deref(), candidate, args.json),
        Command::Find { url } => run_find(args.config.as_deref(), url, args.json),
    }
}
