//! Service layer for the crawler application.
//!
//! - `CatalogSource`: the two lookups the crawl loop needs
//! - `CatalogClient`: `CatalogSource` backed by the storefront's GraphQL API

mod catalog;

use async_trait::async_trait;

use crate::models::{PageFetch, Product};

pub use catalog::CatalogClient;

/// Source of catalog pages and per-SKU detail records.
///
/// Implementations absorb their own errors: a failed page is reported as
/// `PageFetch::Failed`, a failed detail lookup as `None`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the SKUs listed on a 1-based catalog page.
    async fn fetch_page(&self, page: u32) -> PageFetch;

    /// Fetch and normalize the detail record for one SKU.
    async fn fetch_detail(&self, sku: &str) -> Option<Product>;
}
