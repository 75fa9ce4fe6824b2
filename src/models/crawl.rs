// src/models/crawl.rs

//! Crawl progress and result types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Product;

/// Result of fetching one catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageFetch {
    /// SKUs listed on the page (never empty)
    Items(Vec<String>),
    /// The request succeeded but the page listed nothing usable
    Exhausted,
    /// Transport, status or decode failure
    Failed(String),
}

impl PageFetch {
    /// Build from extracted SKUs, mapping an empty list to `Exhausted`.
    pub fn from_skus(skus: Vec<String>) -> Self {
        if skus.is_empty() {
            Self::Exhausted
        } else {
            Self::Items(skus)
        }
    }
}

/// Why the page loop ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopReason {
    /// A page returned no SKUs
    Exhausted { page: u32 },
    /// A page request failed
    Failed { page: u32, message: String },
    /// The configured page limit was reached
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted { page } => write!(f, "catalog exhausted at page {page}"),
            StopReason::Failed { page, message } => {
                write!(f, "page {page} failed: {message}")
            }
            StopReason::PageLimit => write!(f, "page limit reached"),
        }
    }
}

/// Statistics about a crawl run.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Pages that returned SKUs
    pub pages_visited: u32,
    pub skus_seen: usize,
    pub detail_failures: usize,
    pub product_count: usize,
    pub stop_reason: StopReason,
}

impl CrawlStats {
    /// Share of detail lookups that produced a product.
    pub fn success_rate(&self) -> f64 {
        if self.skus_seen == 0 {
            return 0.0;
        }
        self.product_count as f64 / self.skus_seen as f64
    }
}

/// Products collected by a crawl plus its statistics.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub products: Vec<Product>,
    pub stats: CrawlStats,
}
