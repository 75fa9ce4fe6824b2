//! Catalog Crawler CLI
//!
//! Crawls the storefront catalog and writes `products.csv`.

use std::path::PathBuf;

use clap::Parser;
use catalog_crawler::{
    error::Result,
    models::Config,
    pipeline::{self, CrawlSettings},
    services::CatalogClient,
    storage::CsvStorage,
    utils::http,
};

/// Catalog Crawler - paginated product catalog to CSV
#[derive(Parser, Debug)]
#[command(
    name = "catalog-crawler",
    version,
    about = "Crawls a paginated product catalog and exports it to CSV",
    long_about = "Crawls a paginated product catalog and exports it to CSV.\n\n\
                  The crawl is controlled by --max-pages and --delay. The other \
                  options only relocate the endpoint or the output file."
)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of catalog pages to visit
    #[arg(long)]
    max_pages: Option<u32>,

    /// Delay between requests, in seconds
    #[arg(long)]
    delay: Option<f64>,

    /// Destination CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Crawl and report without writing the CSV file
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Merge the config file (if any) with command-line overrides.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(delay) = cli.delay {
        config.crawler.request_delay_secs = delay;
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Catalog Crawler starting...");

    let config = build_config(&cli)?;
    let settings = CrawlSettings::from(&config);

    let client = http::create_client(&config.crawler)?;
    let source = CatalogClient::new(client, config.endpoint.clone());

    if cli.dry_run {
        let outcome = pipeline::crawl_catalog(&source, &settings).await;
        pipeline::crawl::log_summary(&outcome.stats);
        for product in &outcome.products {
            log::info!(
                "{} | {} | {} -> {}",
                product.sku,
                product.name,
                product.regular_price,
                product.final_price
            );
        }
        log::info!("Dry run: nothing written");
        return Ok(());
    }

    let storage = CsvStorage::new(&config.output.path);
    let report = pipeline::run_crawler(&settings, &source, &storage).await;

    if report.written.is_some() {
        log::info!("Done!");
    }

    Ok(())
}
