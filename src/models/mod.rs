// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod crawl;
mod product;
pub mod wire;

// Re-export all public types
pub use config::{Config, CrawlerConfig, EndpointConfig, OutputConfig};
pub use crawl::{CrawlOutcome, CrawlStats, PageFetch, StopReason};
pub use product::Product;
