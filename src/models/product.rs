//! Product record built from a detail lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::wire::{DetailItem, Money, ShortDescription, price_value};
use crate::utils::{clean_description, prefix_link};

const UNKNOWN: &str = "Unknown";
const NO_NAME: &str = "No Name";
const NO_DESCRIPTION: &str = "No Description Available";

/// A product enriched with its detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog identifier
    pub product_id: String,

    /// Stock-keeping code the record was requested for
    pub sku: String,

    /// Display name
    pub name: String,

    pub regular_price: f64,

    pub final_price: f64,

    /// Free-form launch date
    pub launching_date: String,

    /// Absolute product page URL
    pub link_product: String,

    /// Plain, single-line description
    pub description: String,
}

impl Product {
    /// Column names of the exported table, in row order.
    pub const HEADERS: [&'static str; 8] = [
        "Product ID",
        "SKU",
        "Name",
        "Regular Price",
        "Final Price",
        "Launching Date",
        "Link Product",
        "Description",
    ];

    /// Build a product from the first item of a detail response.
    ///
    /// Missing leaf fields fall back to defaults. A missing
    /// `custom_attributes` container, a null or non-numeric price, or a
    /// null description body rejects the whole record.
    pub fn from_detail(sku: &str, item: DetailItem, product_page_base: &str) -> Result<Self> {
        let product_id = match item.id {
            None | Some(Value::Null) => UNKNOWN.to_string(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        };

        let name = item.name.unwrap_or_else(|| NO_NAME.to_string());

        let minimum = item.price_range.and_then(|p| p.minimum_price);
        let (regular, final_) = match minimum {
            Some(m) => (m.regular_price, m.final_price),
            None => (None, None),
        };
        let regular_price = price(sku, regular)?;
        let final_price = price(sku, final_)?;

        let attributes = item
            .custom_attributes
            .ok_or_else(|| AppError::parse(sku, "custom_attributes is missing"))?;
        let launching_date = attributes
            .launch_date
            .and_then(|a| a.value)
            .unwrap_or_else(|| UNKNOWN.to_string());

        let link_product = prefix_link(product_page_base, item.url.as_deref().unwrap_or(""));

        let raw_description = description(sku, item.short_description)?;

        Ok(Self {
            product_id,
            sku: sku.to_string(),
            name,
            regular_price,
            final_price,
            launching_date,
            link_product,
            description: clean_description(&raw_description),
        })
    }

    /// Row cells in `HEADERS` order.
    pub fn to_record(&self) -> [String; 8] {
        [
            self.product_id.clone(),
            self.sku.clone(),
            self.name.clone(),
            self.regular_price.to_string(),
            self.final_price.to_string(),
            self.launching_date.clone(),
            self.link_product.clone(),
            self.description.clone(),
        ]
    }
}

fn price(sku: &str, money: Option<Money>) -> Result<f64> {
    match money.and_then(|m| m.value) {
        Some(value) => price_value(&value).map_err(|e| AppError::parse(sku, e)),
        None => Ok(0.0),
    }
}

fn description(sku: &str, short: Option<ShortDescription>) -> Result<String> {
    match short.and_then(|d| d.html) {
        None => Ok(NO_DESCRIPTION.to_string()),
        Some(Value::String(html)) => Ok(html),
        Some(other) => Err(AppError::parse(
            sku,
            format!("short_description.html is not a string: {other}"),
        )),
    }
}
