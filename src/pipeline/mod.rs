//! Pipeline entry points for crawler operations.
//!
//! - `crawl_catalog`: Walk catalog pages and collect products
//! - `run_crawler`: Crawl, then write the collected products

pub mod crawl;

pub use crawl::{CrawlSettings, RunReport, crawl_catalog, run_crawler};
