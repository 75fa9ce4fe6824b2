#![allow(dead_code)]

use catalog_crawler::models::EndpointConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CATEGORY_HASH: &str = "2757426801";
pub const DETAIL_HASH: &str = "1081972869";
pub const STOREFRONT: &str = "https://www.adidas.co.id";

/// Endpoint settings pointing at the mock server.
pub fn endpoint(server: &MockServer) -> EndpointConfig {
    EndpointConfig {
        base_url: server.uri(),
        product_page_base: STOREFRONT.to_string(),
        ..EndpointConfig::default()
    }
}

/// Listing body with the given SKUs.
pub fn page_body(skus: &[&str]) -> Value {
    let items: Vec<Value> = skus.iter().map(|sku| json!({ "sku": sku })).collect();
    json!({ "data": { "products": { "items": items } } })
}

/// Detail body for one well-formed product.
pub fn detail_body(sku: &str, id: u64) -> Value {
    json!({ "data": { "products": { "items": [{
        "id": id,
        "name": format!("Product {sku}"),
        "price_range": { "minimum_price": {
            "regular_price": { "value": 1_000_000.0 },
            "final_price": { "value": 750_000.5 }
        }},
        "custom_attributes": { "launch_date": { "value": "2025-01-15" } },
        "url": format!("/{sku}.html"),
        "short_description": { "html": "Made with &amp; for\r\nrunners\n" }
    }]}}})
}

/// Mount a listing response for one page, expected to be requested `times` times.
pub async fn mount_page(server: &MockServer, page: u32, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .and(query_param("hash", CATEGORY_HASH))
        .and(query_param("_currentPage_0", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Mount a detail response for one SKU, expected to be requested `times` times.
pub async fn mount_detail(server: &MockServer, sku: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .and(query_param("hash", DETAIL_HASH))
        .and(query_param(
            "_filter_0",
            format!("{{sku:{{eq:{sku}}},customer_group_id:{{eq:0}}}}"),
        ))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}
