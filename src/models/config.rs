//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Catalog API endpoint and query parameters
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_pages == 0 {
            return Err(AppError::validation("crawler.max_pages must be > 0"));
        }
        let delay = self.crawler.request_delay_secs;
        if !delay.is_finite() || delay < 0.0 {
            return Err(AppError::validation(
                "crawler.request_delay_secs must be a non-negative number",
            ));
        }
        if self.endpoint.page_size == 0 {
            return Err(AppError::validation("endpoint.page_size must be > 0"));
        }
        url::Url::parse(&self.endpoint.base_url)
            .map_err(|e| AppError::validation(format!("endpoint.base_url: {e}")))?;
        url::Url::parse(&self.endpoint.product_page_base)
            .map_err(|e| AppError::validation(format!("endpoint.product_page_base: {e}")))?;
        if self.output.path.as_os_str().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum number of catalog pages to visit
    #[serde(default = "defaults::max_pages")]
    pub max_pages: u32,

    /// Fixed delay after every detail fetch and after every page, in seconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_secs: f64,
}

impl CrawlerConfig {
    /// Delay between requests as a `Duration`.
    ///
    /// Negative or non-finite values collapse to zero; `Config::validate`
    /// rejects them before a crawl starts.
    pub fn request_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_delay_secs).unwrap_or(Duration::ZERO)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_pages: defaults::max_pages(),
            request_delay_secs: defaults::request_delay(),
        }
    }
}

/// Persisted-query GraphQL endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme and host of the API (e.g. "https://www.adidas.co.id")
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the GraphQL endpoint
    #[serde(default = "defaults::graphql_path")]
    pub graphql_path: String,

    /// Persisted query hash for the category listing
    #[serde(default = "defaults::category_query_hash")]
    pub category_query_hash: String,

    /// Persisted query hash for the product detail lookup
    #[serde(default = "defaults::detail_query_hash")]
    pub detail_query_hash: String,

    /// Category filter for the listing
    #[serde(default = "defaults::category_id")]
    pub category_id: u64,

    /// Customer group filter for both queries
    #[serde(default)]
    pub customer_group_id: u64,

    /// Items per catalog page
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,

    /// Sort expression for the listing
    #[serde(default = "defaults::sort")]
    pub sort: String,

    /// Base prepended to relative product URLs
    #[serde(default = "defaults::base_url")]
    pub product_page_base: String,
}

impl EndpointConfig {
    /// Full URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.graphql_path
        )
    }

    /// Filter expression for one catalog page.
    pub fn category_filter(&self) -> String {
        format!(
            "{{category_id:{{eq:{}}},customer_group_id:{{eq:{}}}}}",
            self.category_id, self.customer_group_id
        )
    }

    /// Filter expression for a single SKU lookup.
    pub fn sku_filter(&self, sku: &str) -> String {
        format!(
            "{{sku:{{eq:{}}},customer_group_id:{{eq:{}}}}}",
            sku, self.customer_group_id
        )
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            graphql_path: defaults::graphql_path(),
            category_query_hash: defaults::category_query_hash(),
            detail_query_hash: defaults::detail_query_hash(),
            category_id: defaults::category_id(),
            customer_group_id: 0,
            page_size: defaults::page_size(),
            sort: defaults::sort(),
            product_page_base: defaults::base_url(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination CSV file
    #[serde(default = "defaults::output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn max_pages() -> u32 {
        3
    }
    pub fn request_delay() -> f64 {
        2.0
    }

    // Endpoint defaults
    pub fn base_url() -> String {
        "https://www.adidas.co.id".into()
    }
    pub fn graphql_path() -> String {
        "/graphql".into()
    }
    pub fn category_query_hash() -> String {
        "2757426801".into()
    }
    pub fn detail_query_hash() -> String {
        "1081972869".into()
    }
    pub fn category_id() -> u64 {
        261
    }
    pub fn page_size() -> u32 {
        24
    }
    pub fn sort() -> String {
        "{recommended_score:DESC}".into()
    }

    // Output defaults
    pub fn output_path() -> PathBuf {
        PathBuf::from("products.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_pages_and_timeout() {
        let mut config = Config::default();
        config.crawler.max_pages = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.crawler.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_delay() {
        let mut config = Config::default();
        config.crawler.request_delay_secs = -1.0;
        assert!(config.validate().is_err());

        config.crawler.request_delay_secs = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.endpoint.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [crawler]
            max_pages = 7

            [endpoint]
            category_id = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.crawler.max_pages, 7);
        assert_eq!(config.crawler.timeout_secs, 10);
        assert_eq!(config.endpoint.category_id, 42);
        assert_eq!(config.endpoint.page_size, 24);
        assert_eq!(config.output.path, PathBuf::from("products.csv"));
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("crawler.toml");
        fs::write(&path, "[crawler]\nrequest_delay_secs = 0.5\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.crawler.request_delay_secs, 0.5);

        assert!(matches!(
            Config::load(tmp.path().join("absent.toml")),
            Err(AppError::Io(_))
        ));
    }

    #[test]
    fn example_config_matches_defaults() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.crawler.user_agent, CrawlerConfig::default().user_agent);
        assert_eq!(
            config.endpoint.category_filter(),
            EndpointConfig::default().category_filter()
        );
    }

    #[test]
    fn filters_match_listing_format() {
        let endpoint = EndpointConfig::default();
        assert_eq!(
            endpoint.category_filter(),
            "{category_id:{eq:261},customer_group_id:{eq:0}}"
        );
        assert_eq!(
            endpoint.sku_filter("IE0872"),
            "{sku:{eq:IE0872},customer_group_id:{eq:0}}"
        );
        assert_eq!(endpoint.graphql_url(), "https://www.adidas.co.id/graphql");
    }

    #[test]
    fn request_delay_from_fractional_secs() {
        let mut crawler = CrawlerConfig::default();
        crawler.request_delay_secs = 0.25;
        assert_eq!(crawler.request_delay(), Duration::from_millis(250));

        crawler.request_delay_secs = -3.0;
        assert_eq!(crawler.request_delay(), Duration::ZERO);
    }
}
