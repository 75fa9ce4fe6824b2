//! CSV file storage implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;
use crate::models::Product;
use crate::storage::{ProductStorage, WriteSummary};

/// Writes products to a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    /// Create a storage writing to the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure parent directory exists.
    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl ProductStorage for CsvStorage {
    fn write_products(&self, products: &[Product]) -> Result<WriteSummary> {
        self.ensure_dir()?;

        let mut writer = ::csv::Writer::from_path(&self.path)?;
        writer.write_record(Product::HEADERS)?;
        for product in products {
            writer.write_record(product.to_record())?;
        }
        writer.flush()?;

        log::debug!("Wrote {} rows to {}", products.len(), self.path.display());

        Ok(WriteSummary {
            row_count: products.len(),
            location: self.path.clone(),
            timestamp: Utc::now(),
        })
    }
}
