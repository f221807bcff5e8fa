mod commands;
mod render;
mod zone;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use countdowns_core::Catalog;
use countdowns_core::config::SiteConfig;

use crate::zone::DisplayZone;

#[derive(Parser)]
#[command(name = "countdowns")]
#[command(about = "Browse upcoming events and watch live countdowns")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/countdowns/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, soonest first
    List {
        /// Only show events in this category ("all" for every category)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Case-insensitive search in titles, descriptions and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show times in this IANA timezone instead of the local one
        #[arg(long)]
        tz: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the event categories
    Categories,
    /// Show a random selection of events with their countdowns
    Top {
        /// Number of events (default: top_count from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Show one event with its countdown
    Show {
        slug: String,

        /// Keep the countdown running until interrupted
        #[arg(short, long)]
        watch: bool,

        /// Show times in this IANA timezone instead of the local one
        #[arg(long)]
        tz: Option<String>,
    },
    /// Print the sitemap XML
    Sitemap,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = SiteConfig::load(cli.config.as_deref())?;
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::List {
            category,
            search,
            tz,
            json,
        } => {
            let zone = DisplayZone::parse(tz.as_deref())?;
            commands::list::run(catalog, &category, &search, &zone, json)
        }
        Commands::Categories => commands::categories::run(catalog),
        Commands::Top { count } => commands::top::run(catalog, count.unwrap_or(config.top_count)),
        Commands::Show { slug, watch, tz } => {
            let zone = DisplayZone::parse(tz.as_deref())?;
            let event = catalog.by_slug(&slug).ok_or_else(|| {
                anyhow::anyhow!(
                    "Event '{}' not found.\n\n\
                    List available events with:\n  \
                    countdowns list",
                    slug
                )
            })?;
            if watch {
                commands::show::watch(event, &zone, config.tick_period()?).await
            } else {
                commands::show::run(event, &zone)
            }
        }
        Commands::Sitemap => commands::sitemap::run(catalog, &config),
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}

/// Install the configured data file as the process-wide catalog, or fall back
/// to the bundled events.
fn load_catalog(config: &SiteConfig) -> Result<&'static Catalog> {
    let catalog = match config.data_path() {
        Some(path) => Catalog::install(Catalog::from_file(&path)?)?,
        None => Catalog::global()?,
    };
    log::debug!("Catalog ready with {} events", catalog.len());
    Ok(catalog)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}
