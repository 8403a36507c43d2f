//! CLI administration tool for ttl-shortener.
//!
//! Computes aliases and expiry timestamps offline, and inspects the configured
//! key-value store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the alias a URL maps to
//! cargo run --bin admin -- alias https://example.com
//!
//! # Show the expiry timestamp for a TTL
//! cargo run --bin admin -- expiry 7
//! cargo run --bin admin -- expiry 7 --from 2024-01-01T00:00:00Z
//!
//! # Look up an alias in Redis
//! cargo run --bin admin -- resolve 1xCrcw
//!
//! # Check store connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! `resolve` and `check` read the same store settings as the server
//! (`REDIS_URL` or `REDIS_HOST`/..., `URLS_KEY_PREFIX`).

use ttl_shortener::config::{self, Config};
use ttl_shortener::domain::entities::TtlBoundaries;
use ttl_shortener::domain::repositories::ShortenedUrlRepository;
use ttl_shortener::infrastructure::persistence::RedisUrlRepository;
use ttl_shortener::utils::alias_encoder::{encode_alias, reduce_digest};
use ttl_shortener::utils::ttl::{compute_expiry, expiry_instant, is_valid_ttl};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for ttl-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the alias a URL encodes to
    Alias {
        /// Long URL
        url: String,
    },

    /// Print the expiry timestamp for a TTL in days
    Expiry {
        /// Days from now
        days: i64,

        /// Start instant (RFC 3339) instead of the current time
        #[arg(long)]
        from: Option<DateTime<Utc>>,
    },

    /// Look up an alias in the configured store
    Resolve {
        alias: String,
    },

    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Alias { url } => print_alias(&url),
        Commands::Expiry { days, from } => print_expiry(days, from)?,
        Commands::Resolve { alias } => resolve(&alias).await?,
        Commands::Check => check().await?,
    }

    Ok(())
}

fn print_alias(url: &str) {
    println!("{}", "Alias".bright_blue().bold());
    println!("  URL:    {}", url.cyan());
    println!("  Digest: {}", reduce_digest(url));

    match encode_alias(url) {
        Ok(alias) if alias.is_empty() => {
            println!("  Alias:  {}", "(empty, digest reduced to zero)".yellow());
        }
        Ok(alias) => println!("  Alias:  {}", alias.bright_yellow().bold()),
        Err(e) => println!("  Alias:  {}", e.to_string().red()),
    }
}

fn print_expiry(days: i64, from: Option<DateTime<Utc>>) -> Result<()> {
    let bounds = TtlBoundaries::DEFAULT;
    let now = from.unwrap_or_else(Utc::now);

    if !is_valid_ttl(days, &bounds) {
        println!(
            "{} TTL {} is outside [{}, {})",
            "Invalid:".red().bold(),
            days,
            bounds.lower_bound(),
            bounds.upper_bound()
        );
    }

    let expiry = compute_expiry(days, now)?;
    let expires_at = expiry_instant(expiry)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();

    println!("{}", "Expiry".bright_blue().bold());
    println!("  From:          {}", now.to_rfc3339());
    println!("  Epoch seconds: {}", expiry.to_string().bright_yellow().bold());
    println!("  Expires at:    {}", expires_at);

    Ok(())
}

async fn connect(config: &Config) -> Result<RedisUrlRepository> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    RedisUrlRepository::connect(redis_url, config.key_prefix.clone())
        .await
        .context("Failed to connect to Redis")
}

async fn resolve(alias: &str) -> Result<()> {
    let config = config::Config::from_env()?;
    let repo = connect(&config).await?;

    match repo.get_by_alias(alias).await? {
        Some(url) => println!("{} -> {}", alias.bright_yellow(), url.cyan()),
        None => println!("{} {}", alias.bright_yellow(), "not found or expired".red()),
    }

    Ok(())
}

async fn check() -> Result<()> {
    let config = config::Config::from_env()?;
    let repo = connect(&config).await?;

    if repo.health_check().await {
        println!("{}", "Store reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}
