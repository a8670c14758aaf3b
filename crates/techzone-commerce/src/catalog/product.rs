//! Product records from the store feed.

use crate::ids::{ProductId, SubcategoryId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Specification key under which a product's brand is stored.
///
/// The feed uses the Spanish key `marca`. To the engine it is an ordinary
/// specification key; only brand facet discovery treats it specially.
pub const BRAND_KEY: &str = "marca";

/// A product in the storefront catalog.
///
/// The `specs` map is an open attribute bag: its key set is not fixed in
/// advance and is discovered by scanning the whole collection. Scalar
/// values arriving as JSON numbers or booleans are normalized to their
/// string rendering at deserialization, so every later comparison is
/// plain string equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the store currency. Non-negative.
    pub price: f64,
    /// Open specification map (key -> value).
    #[serde(default, deserialize_with = "de_spec_map")]
    pub specs: BTreeMap<String, String>,
    /// Subcategory this product belongs to.
    #[serde(default)]
    pub subcategory_id: Option<SubcategoryId>,
    /// Listing thumbnail. Never consulted by the filter engine.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            specs: BTreeMap::new(),
            subcategory_id: None,
            image_url: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a specification entry.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// Set the subcategory.
    pub fn with_subcategory(mut self, id: impl Into<SubcategoryId>) -> Self {
        self.subcategory_id = Some(id.into());
        self
    }

    /// Set the listing thumbnail.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Look up a specification value. Unknown keys are absent, never an error.
    pub fn spec(&self, key: &str) -> Option<&str> {
        self.specs.get(key).map(String::as_str)
    }

    /// The product's brand, if it carries one.
    pub fn brand(&self) -> Option<&str> {
        self.spec(BRAND_KEY)
    }
}

/// Deserialize the open specification map, normalizing scalar values to
/// strings and dropping anything that is not a scalar.
fn de_spec_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?
        .unwrap_or_default();

    let mut specs = BTreeMap::new();
    for (key, value) in raw {
        let rendered = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => continue,
        };
        specs.insert(key, rendered);
    }
    Ok(specs)
}
