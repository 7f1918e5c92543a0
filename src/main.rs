//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Load, list and render the markdown posts of a portfolio blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every post id
    Ids,

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post id (file name without extension)
        id: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List tags with their post counts
    Tags {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Post id (defaults to the slugified title)
        #[arg(long)]
        id: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Ids => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::ids::run(&site, &mut out)?;
        }

        Commands::List { tag, json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, tag.as_deref(), json, &mut out)?;
        }

        Commands::Show { id, html, json } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Showing post {}", id);
            folio::commands::show::run(&site, &id, html, json, &mut out)?;
        }

        Commands::Tags { json } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::tags::run(&site, json, &mut out)?;
        }

        Commands::New { title, tags, id } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = folio::commands::new::create_post(&site, &title, &tags, id.as_deref())?;
            writeln!(out, "Created: {}", path.display())?;
        }

        Commands::Version => {
            writeln!(out, "folio version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
