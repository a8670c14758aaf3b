//! Facet discovery.
//!
//! Derives the available filter options from the product collection
//! itself: the price slider bound, the distinct brands, and the value
//! options for every specification key found in any product. The
//! collection is only read, and the same collection always yields the
//! same facets.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Price slider bound used when the collection is empty.
///
/// A slider needs a finite upper bound even before products arrive.
pub const DEFAULT_PRICE_CEILING: f64 = 15_000.0;

/// The filter options derived from a product collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    /// Maximum price across the collection, or [`DEFAULT_PRICE_CEILING`]
    /// when it is empty.
    pub price_ceiling: f64,
    /// Distinct non-empty brand values, sorted ascending.
    pub brands: Vec<String>,
    /// Union of specification keys across all products, sorted ascending.
    pub spec_keys: Vec<String>,
    /// Distinct non-empty values per specification key, sorted ascending.
    pub spec_values: BTreeMap<String, Vec<String>>,
}

impl Facets {
    /// Derive facets from a product collection.
    pub fn from_products(products: &[Product]) -> Self {
        let price_ceiling = products
            .iter()
            .map(|p| p.price)
            .fold(None::<f64>, |acc, price| {
                Some(acc.map_or(price, |max| max.max(price)))
            })
            .unwrap_or(DEFAULT_PRICE_CEILING);

        let mut brands = BTreeSet::new();
        let mut spec_values: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for product in products {
            if let Some(brand) = product.brand() {
                if !brand.is_empty() {
                    brands.insert(brand.to_string());
                }
            }
            for (key, value) in &product.specs {
                let values = spec_values.entry(key.clone()).or_default();
                if !value.is_empty() {
                    values.insert(value.clone());
                }
            }
        }

        Self {
            price_ceiling,
            brands: brands.into_iter().collect(),
            spec_keys: spec_values.keys().cloned().collect(),
            spec_values: spec_values
                .into_iter()
                .map(|(key, values)| (key, values.into_iter().collect()))
                .collect(),
        }
    }

    /// Value options for a specification key. Unknown keys have no
    /// options, never an error.
    pub fn value_options(&self, key: &str) -> &[String] {
        self.spec_values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Facets {
    fn default() -> Self {
        Self::from_products(&[])
    }
}

/// Union of specification keys across the collection.
pub(crate) fn spec_key_union(products: &[Product]) -> BTreeSet<String> {
    products
        .iter()
        .flat_map(|p| p.specs.keys().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BRAND_KEY;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("p1", "Mouse Gamer", 100.0)
                .with_spec(BRAND_KEY, "Logitech")
                .with_spec("dpi", "16000"),
            Product::new("p2", "Mouse Oficina", 250.0)
                .with_spec(BRAND_KEY, "Logitech")
                .with_spec("dpi", "8000"),
            Product::new("p3", "Teclado", 500.0)
                .with_spec(BRAND_KEY, "Razer")
                .with_spec("formato", "TKL"),
        ]
    }

    #[test]
    fn test_empty_collection_uses_fallback_ceiling() {
        let facets = Facets::from_products(&[]);
        assert_eq!(facets.price_ceiling, DEFAULT_PRICE_CEILING);
        assert!(facets.brands.is_empty());
        assert!(facets.spec_keys.is_empty());
    }

    #[test]
    fn test_price_ceiling_is_collection_max() {
        let facets = Facets::from_products(&sample_products());
        assert_eq!(facets.price_ceiling, 500.0);
    }

    #[test]
    fn test_brands_are_distinct_and_sorted() {
        let facets = Facets::from_products(&sample_products());
        assert_eq!(facets.brands, vec!["Logitech", "Razer"]);
    }

    #[test]
    fn test_spec_keys_are_the_union() {
        let facets = Facets::from_products(&sample_products());
        assert_eq!(facets.spec_keys, vec!["dpi", "formato", "marca"]);
    }

    #[test]
    fn test_value_options_sorted_unknown_key_empty() {
        let facets = Facets::from_products(&sample_products());
        assert_eq!(facets.value_options("dpi"), ["16000", "8000"]);
        assert_eq!(facets.value_options("inexistente"), &[] as &[String]);
    }

    #[test]
    fn test_empty_values_are_not_options_but_key_survives() {
        let products = vec![
            Product::new("p1", "Hub USB", 80.0).with_spec("puertos", ""),
            Product::new("p2", "Hub USB-C", 120.0).with_spec("puertos", "4"),
        ];
        let facets = Facets::from_products(&products);
        assert_eq!(facets.spec_keys, vec!["puertos"]);
        assert_eq!(facets.value_options("puertos"), ["4"]);
    }

    #[test]
    fn test_facet_soundness() {
        // Every reported option occurs verbatim in some product.
        let products = sample_products();
        let facets = Facets::from_products(&products);
        for brand in &facets.brands {
            assert!(products.iter().any(|p| p.brand() == Some(brand.as_str())));
        }
        for key in &facets.spec_keys {
            for value in facets.value_options(key) {
                assert!(products.iter().any(|p| p.spec(key) == Some(value.as_str())));
            }
        }
    }
}
