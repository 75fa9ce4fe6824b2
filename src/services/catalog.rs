// src/services/catalog.rs

//! Catalog client service.
//!
//! Talks to the storefront's persisted-query GraphQL endpoint: one query
//! lists a category page, the other looks up a product by SKU.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::wire::{DetailItem, GraphQlResponse, listing_sku};
use crate::models::{EndpointConfig, PageFetch, Product};
use crate::services::CatalogSource;
use crate::utils::http::fetch_text;

/// GraphQL-backed catalog source.
pub struct CatalogClient {
    client: Client,
    endpoint: EndpointConfig,
}

impl CatalogClient {
    /// Create a catalog client using an existing HTTP client.
    pub fn new(client: Client, endpoint: EndpointConfig) -> Self {
        Self { client, endpoint }
    }

    fn page_query(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("hash", self.endpoint.category_query_hash.clone()),
            ("_sort_0", self.endpoint.sort.clone()),
            ("_filter_0", self.endpoint.category_filter()),
            ("_pageSize_0", self.endpoint.page_size.to_string()),
            ("_currentPage_0", page.to_string()),
        ]
    }

    fn detail_query(&self, sku: &str) -> Vec<(&'static str, String)> {
        vec![
            ("hash", self.endpoint.detail_query_hash.clone()),
            ("_filter_0", self.endpoint.sku_filter(sku)),
        ]
    }

    /// Request one listing page and decode its envelope. Items stay raw so
    /// that one odd item cannot fail the whole page.
    async fn request_page(&self, page: u32) -> Result<Vec<Value>> {
        let body = fetch_text(&self.client, &self.endpoint.graphql_url(), &self.page_query(page))
            .await?;
        let response: GraphQlResponse<Value> = serde_json::from_str(&body)?;
        Ok(response.into_items())
    }

    /// Request the detail lookup for a SKU, keeping items as raw JSON so
    /// that a malformed item is reported separately from a bad response.
    async fn request_detail(&self, sku: &str) -> Result<Vec<Value>> {
        let body =
            fetch_text(&self.client, &self.endpoint.graphql_url(), &self.detail_query(sku)).await?;
        let response: GraphQlResponse<Value> = serde_json::from_str(&body)?;
        Ok(response.into_items())
    }

    /// Convert the first detail item into a product.
    fn parse_detail(&self, sku: &str, item: Value) -> Result<Product> {
        let detail: DetailItem =
            serde_json::from_value(item).map_err(|e| AppError::parse(sku, e))?;
        Product::from_detail(sku, detail, &self.endpoint.product_page_base)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> PageFetch {
        log::info!("Fetching SKUs from page {}...", page);

        let items = match self.request_page(page).await {
            Ok(items) => items,
            Err(error) => {
                log::error!("Error while fetching SKUs on page {}: {}", page, error);
                return PageFetch::Failed(error.to_string());
            }
        };

        let skus: Vec<String> = items.iter().filter_map(listing_sku).collect();

        let fetch = PageFetch::from_skus(skus);
        match &fetch {
            PageFetch::Items(skus) => log::info!("{} SKUs found on page {}", skus.len(), page),
            _ => log::info!("No SKUs found on page {}, stopping.", page),
        }
        fetch
    }

    async fn fetch_detail(&self, sku: &str) -> Option<Product> {
        log::info!("Fetching details for SKU: {}", sku);

        let items = match self.request_detail(sku).await {
            Ok(items) => items,
            Err(error) => {
                log::error!("Error while fetching product details for {}: {}", sku, error);
                return None;
            }
        };

        let Some(item) = items.into_iter().next() else {
            log::warn!("No details found for SKU {}.", sku);
            return None;
        };

        match self.parse_detail(sku, item) {
            Ok(product) => Some(product),
            Err(error) => {
                log::error!("Error while processing product {}: {}", sku, error);
                None
            }
        }
    }
}
