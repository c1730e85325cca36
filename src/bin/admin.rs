//! CLI administration tool for link-shortener.
//!
//! Creates and inspects links directly against the configured store, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a generated slug
//! cargo run --bin admin -- link create https://example.com/page
//!
//! # Create a link with a chosen slug
//! cargo run --bin admin -- link create https://example.com/page --slug launch
//!
//! # Show where a slug points
//! cargo run --bin admin -- link show launch
//!
//! # Check the store connection (applies pending migrations)
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use link_shortener::application::services::LinkService;
use link_shortener::config::Config;
use link_shortener::infrastructure::persistence;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new link
    Create {
        /// Target URL
        url: String,

        /// Slug to use (generated if not provided)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Show the URL a slug redirects to
    Show {
        /// Slug to look up
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    if config.uses_memory_store() {
        println!(
            "{}",
            "Warning: DATABASE_URL is memory://, nothing will be persisted".yellow()
        );
    }

    let repository = persistence::connect(&config).await?;
    let service =
        LinkService::new(repository).with_generation_attempts(config.slug_generation_attempts);

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::Create { url, slug } => {
            let link = service
                .create_link(slug.as_deref(), Some(&url))
                .await
                .context("Failed to create link")?;

            println!("{}", "Link created".green().bold());
            println!("  ID:   {}", link.id.to_string().bright_black());
            println!("  Slug: {}", link.slug.cyan());
            println!("  URL:  {}", link.url);
        }
        LinkAction::Show { slug } => match service
            .find_link(&slug)
            .await
            .context("Failed to look up slug")?
        {
            Some(link) => {
                println!("  Slug:    {}", link.slug.cyan());
                println!("  URL:     {}", link.url);
                println!(
                    "  Created: {}",
                    link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
            None => {
                println!("{}", format!("No link with slug '{}'", slug).yellow());
            }
        },
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &LinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service
                .find_link("__connection_check__")
                .await
                .context("Lookup against the link store failed")?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
