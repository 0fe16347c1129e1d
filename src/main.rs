//! Rockhound main entry point
//!
//! Command-line interface for harvesting rock-sample images from an
//! image-search API into per-category PNG folders with credit ledgers.

use clap::Parser;
use rockhound::config::{
    self, Config, Credentials, FetchConfig, OutputConfig, SearchConfig, DEFAULT_ROCK_TYPES,
    GOOGLE_SEARCH_URL,
};
use rockhound::query::{build_domain_clause, build_query, build_site_clause};
use rockhound::{ConfigError, Harvester};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Rockhound: a rock-sample image harvester
///
/// Downloads the first N image-search results for each rock type,
/// converts them to PNG, and records credits (URL to filename) as CSV
/// and JSON.
#[derive(Parser, Debug)]
#[command(name = "rockhound")]
#[command(version = "1.0.0")]
#[command(about = "Download rock-sample image-search results and record credits", long_about = None)]
struct Cli {
    /// Images per rock type
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// Output root directory
    #[arg(short, long, default_value = "rock_images")]
    out: PathBuf,

    /// Subset of rock types to fetch (defaults to the built-in list)
    #[arg(short, long, num_args = 0.., value_name = "TYPE")]
    types: Vec<String>,

    /// Text appended to each rock type in the query
    #[arg(long, default_value = "rock sample")]
    query_suffix: String,

    /// Comma-separated usage-rights tokens (e.g. 'cc_publicdomain,cc_attribute')
    #[arg(long)]
    rights: Option<String>,

    /// Shortcut for --rights cc_publicdomain
    #[arg(long)]
    public_domain: bool,

    /// Comma-separated TLD list like '.edu,.gov' added as site: clauses
    #[arg(long)]
    domains: Option<String>,

    /// Comma-separated host list like 'usgs.gov,si.edu' added as site: clauses
    #[arg(long)]
    sites: Option<String>,

    /// API key for the search backend
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Custom search engine id
    #[arg(long, env = "GOOGLE_CSE_CX", hide_env_values = true)]
    cx: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration and queries without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a .env file; load it before clap reads the env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let harvester = Harvester::new(config)?;
    let summary = harvester.run().await?;

    tracing::info!(
        categories = summary.categories,
        saved = summary.saved,
        skipped = summary.skipped,
        "Harvest finished"
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("rockhound=info,warn"),
            1 => EnvFilter::new("rockhound=debug,info"),
            2 => EnvFilter::new("rockhound=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Assembles and validates the run configuration from the command line
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let api_key = cli
        .api_key
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingCredentials("GOOGLE_API_KEY"))?;
    let cx = cli
        .cx
        .clone()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingCredentials("GOOGLE_CSE_CX"))?;

    let categories = if cli.types.is_empty() {
        DEFAULT_ROCK_TYPES.iter().map(|s| s.to_string()).collect()
    } else {
        cli.types.clone()
    };

    let rights = config::resolve_rights(cli.rights.as_deref(), cli.public_domain);
    let domains = cli
        .domains
        .as_deref()
        .map(config::parse_list)
        .unwrap_or_default();
    let sites = cli
        .sites
        .as_deref()
        .map(config::parse_list)
        .unwrap_or_default();

    let config = Config {
        credentials: Credentials { api_key, cx },
        categories,
        search: SearchConfig {
            endpoint: GOOGLE_SEARCH_URL.to_string(),
            limit: cli.limit,
            query_suffix: cli.query_suffix.clone(),
            rights,
            domains,
            sites,
        },
        fetch: FetchConfig::default(),
        output: OutputConfig {
            root: cli.out.clone(),
        },
    };

    config::validate(&config)?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &Config) {
    println!("=== Rockhound Dry Run ===\n");

    println!("Output root: {}", config.output.root.display());
    println!("Images per category: {}", config.search.limit);
    if let Some(rights) = &config.search.rights {
        println!("Rights filter: {}", rights);
    }

    let domain_clause = build_domain_clause(&config.search.domains);
    let site_clause = build_site_clause(&config.search.sites);

    println!("\nCategories ({}):", config.categories.len());
    for category in &config.categories {
        let query = build_query(
            category,
            &config.search.query_suffix,
            &domain_clause,
            &site_clause,
        );
        println!("  - {}: {}", category, query);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch up to {} images across {} categories",
        config.search.limit * config.categories.len(),
        config.categories.len()
    );
}
