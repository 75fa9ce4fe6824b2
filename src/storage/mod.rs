//! Storage abstractions for product persistence.
//!
//! ```text
//! products.csv
//! ├── Product ID, SKU, Name, Regular Price, Final Price,
//! │   Launching Date, Link Product, Description        # header
//! └── one row per product, in crawl order
//! ```

pub mod csv;

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Product;

// Re-export for convenience
pub use self::csv::CsvStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of product rows written
    pub row_count: usize,
    /// Where the rows went
    pub location: PathBuf,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for product storage backends.
pub trait ProductStorage {
    /// Persist the given products, replacing any previous output.
    fn write_products(&self, products: &[Product]) -> Result<WriteSummary>;
}
