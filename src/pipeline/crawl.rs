// src/pipeline/crawl.rs

//! Catalog crawling pipeline.

use std::time::Duration;

use chrono::Utc;

use crate::models::{Config, CrawlOutcome, CrawlStats, PageFetch, StopReason};
use crate::services::CatalogSource;
use crate::storage::{ProductStorage, WriteSummary};

/// Parameters of the page loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSettings {
    /// Highest page number to visit
    pub max_pages: u32,
    /// Sleep after every detail fetch and after every page
    pub request_delay: Duration,
}

impl From<&Config> for CrawlSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_pages: config.crawler.max_pages,
            request_delay: config.crawler.request_delay(),
        }
    }
}

/// Result of a full crawl-and-write run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub stats: CrawlStats,
    /// `None` when nothing was written
    pub written: Option<WriteSummary>,
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Walk catalog pages from 1 up to `max_pages`, looking up every SKU.
///
/// Stops early at the first page that is exhausted or fails.
pub async fn crawl_catalog(source: &dyn CatalogSource, settings: &CrawlSettings) -> CrawlOutcome {
    let start_time = Utc::now();
    let mut products = Vec::new();
    let mut pages_visited = 0;
    let mut skus_seen = 0;
    let mut detail_failures = 0;
    let mut stop_reason = StopReason::PageLimit;

    for page in 1..=settings.max_pages {
        let skus = match source.fetch_page(page).await {
            PageFetch::Items(skus) => skus,
            PageFetch::Exhausted => {
                stop_reason = StopReason::Exhausted { page };
                break;
            }
            PageFetch::Failed(message) => {
                stop_reason = StopReason::Failed { page, message };
                break;
            }
        };

        pages_visited += 1;
        log::info!(
            "Fetching product details for {} SKUs on page {}...",
            skus.len(),
            page
        );

        for sku in &skus {
            skus_seen += 1;
            match source.fetch_detail(sku).await {
                Some(product) => products.push(product),
                None => detail_failures += 1,
            }
            pause(settings.request_delay).await;
        }

        log::info!("Finished processing page {}, moving to the next page", page);
        pause(settings.request_delay).await;
    }

    let stats = CrawlStats {
        start_time,
        end_time: Utc::now(),
        pages_visited,
        skus_seen,
        detail_failures,
        product_count: products.len(),
        stop_reason,
    };

    CrawlOutcome { products, stats }
}

/// Crawl the catalog and write the collected products.
///
/// Never fails: an empty crawl skips the write, and a write error is logged.
pub async fn run_crawler(
    settings: &CrawlSettings,
    source: &dyn CatalogSource,
    storage: &dyn ProductStorage,
) -> RunReport {
    log::info!(
        "Crawling up to {} pages with a {:?} delay",
        settings.max_pages,
        settings.request_delay
    );

    let CrawlOutcome { products, stats } = crawl_catalog(source, settings).await;
    log_summary(&stats);

    if products.is_empty() {
        log::error!("No product data was successfully retrieved.");
        return RunReport {
            stats,
            written: None,
        };
    }

    let written = match storage.write_products(&products) {
        Ok(summary) => {
            log::info!(
                "Data successfully saved to {} ({} products at {})",
                summary.location.display(),
                summary.row_count,
                summary.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Some(summary)
        }
        Err(error) => {
            log::error!("Error while saving CSV: {}", error);
            None
        }
    };

    RunReport { stats, written }
}

/// Log the statistics of a finished crawl.
pub fn log_summary(stats: &CrawlStats) {
    let elapsed = stats.end_time - stats.start_time;
    log::info!("Crawl finished: {}", stats.stop_reason);
    log::info!("    Pages visited: {}", stats.pages_visited);
    log::info!("    SKUs seen: {}", stats.skus_seen);
    log::info!(
        "    Products: {} ({:.0}% of SKUs)",
        stats.product_count,
        stats.success_rate() * 100.0
    );
    log::info!("    Detail failures: {}", stats.detail_failures);
    log::info!("    Elapsed: {}s", elapsed.num_seconds());
}
