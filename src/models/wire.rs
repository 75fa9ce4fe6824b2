// src/models/wire.rs

//! Response shapes of the catalog GraphQL API.
//!
//! Every level is optional so that a missing key reads as "absent" rather
//! than failing the whole document. Fields whose absence must abort a record
//! are checked when converting into a [`Product`](super::Product).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Envelope shared by the listing and detail queries:
/// `{data:{products:{items:[...]}}}`.
///
/// No `#[serde(default)]` on these fields: it would require `T: Default`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<ProductsData<T>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData<T> {
    pub products: Option<ProductList<T>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductList<T> {
    pub items: Option<Vec<T>>,
}

impl<T> GraphQlResponse<T> {
    /// Flatten the envelope, treating any missing level as an empty list.
    pub fn into_items(self) -> Vec<T> {
        self.data
            .and_then(|d| d.products)
            .and_then(|p| p.items)
            .unwrap_or_default()
    }
}

/// SKU of one listing item.
///
/// Strings are kept as-is and numbers are rendered; any other shape, an
/// empty string or a missing key yields `None`.
pub fn listing_sku(item: &Value) -> Option<String> {
    match item.get("sku")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing key
/// (via `#[serde(default)]`) becomes `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// One entry of a detail lookup.
#[derive(Debug, Deserialize)]
pub struct DetailItem {
    /// Numeric or string identifier
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub price_range: Option<PriceRange>,

    #[serde(default)]
    pub custom_attributes: Option<CustomAttributes>,

    /// Path relative to the storefront
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub short_description: Option<ShortDescription>,
}

#[derive(Debug, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub minimum_price: Option<MinimumPrice>,
}

#[derive(Debug, Deserialize)]
pub struct MinimumPrice {
    #[serde(default)]
    pub regular_price: Option<Money>,

    #[serde(default)]
    pub final_price: Option<Money>,
}

#[derive(Debug, Deserialize)]
pub struct Money {
    #[serde(default, deserialize_with = "present")]
    pub value: Option<Value>,
}

/// Read a price, which arrives as a JSON number or occasionally as a
/// numeric string.
pub fn price_value(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("price {n} is not representable")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid price {s:?}: {e}")),
        other => Err(format!("invalid price {other}")),
    }
}

#[derive(Debug, Deserialize)]
pub struct CustomAttributes {
    #[serde(default)]
    pub launch_date: Option<Attribute>,
}

#[derive(Debug, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShortDescription {
    #[serde(default, deserialize_with = "present")]
    pub html: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_levels_yield_empty_list() {
        for body in [
            r#"{}"#,
            r#"{"data":null}"#,
            r#"{"data":{}}"#,
            r#"{"data":{"products":{}}}"#,
            r#"{"data":{"products":{"items":null}}}"#,
        ] {
            let resp: GraphQlResponse<Value> = serde_json::from_str(body).unwrap();
            assert!(resp.into_items().is_empty(), "body: {body}");
        }
    }

    #[test]
    fn test_listing_sku_shapes() {
        let resp: GraphQlResponse<Value> = serde_json::from_str(
            r#"{"data":{"products":{"items":[
                {"sku":"A1"},{"name":"no sku"},{"sku":12345},
                {"sku":{"code":"X"}},{"sku":""},{"sku":null},"oops"
            ]}}}"#,
        )
        .unwrap();
        let skus: Vec<Option<String>> = resp.into_items().iter().map(listing_sku).collect();
        assert_eq!(
            skus,
            vec![
                Some("A1".to_string()),
                None,
                Some("12345".to_string()),
                None,
                None,
                None,
                None
            ]
        );
    }

    #[test]
    fn test_price_value_variants() {
        assert_eq!(price_value(&serde_json::json!(1299000.5)).unwrap(), 1299000.5);
        assert_eq!(price_value(&serde_json::json!("899000")).unwrap(), 899000.0);
        assert!(price_value(&serde_json::json!("free")).is_err());
        assert!(price_value(&Value::Null).is_err());
        assert!(price_value(&serde_json::json!([1])).is_err());
    }

    #[test]
    fn test_null_is_kept_apart_from_missing() {
        let missing: Money = serde_json::from_str("{}").unwrap();
        assert!(missing.value.is_none());

        let null: Money = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(null.value, Some(Value::Null));

        let html: ShortDescription = serde_json::from_str(r#"{"html":null}"#).unwrap();
        assert_eq!(html.html, Some(Value::Null));
    }
}
