//! Filter state and its mutators.

use crate::catalog::Product;
use crate::filter::facets::{spec_key_union, Facets};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A facet selector. `All` leaves the facet inactive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Do not filter on this facet.
    #[default]
    All,
    /// Keep only products matching this value.
    Only(String),
}

impl Selection {
    /// Select a specific value.
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    /// Check if the facet is inactive.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Evaluate the selector against a product's value for the facet.
    ///
    /// An absent value never matches a specific selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(want) => value == Some(want.as_str()),
        }
    }
}

/// Sort order for the filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Price, low to high.
    #[default]
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Self {
        match s {
            "price_desc" => Self::PriceDesc,
            _ => Self::PriceAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }
}

/// The user's active filter predicates.
///
/// Holds one selector per facet plus the price ceiling and free-text
/// query. `spec_filters` carries exactly one entry per specification key
/// discovered in the current collection; [`FilterState::sync_spec_keys`]
/// maintains that invariant when the collection changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Highest price still shown.
    pub price_ceiling: f64,
    /// Brand selector.
    pub brand: Selection,
    /// Case-insensitive substring matched against name and description.
    pub free_text: String,
    /// Subcategory selector, matched against raw identifiers.
    pub subcategory: Selection,
    /// One selector per discovered specification key.
    pub spec_filters: BTreeMap<String, Selection>,
    /// Listing sort order.
    pub sort: SortOrder,
}

impl FilterState {
    /// Build the default state for a product collection: ceiling at the
    /// collection maximum, every selector inactive, ascending sort.
    pub fn for_products(products: &[Product]) -> Self {
        let spec_filters = spec_key_union(products)
            .into_iter()
            .map(|key| (key, Selection::All))
            .collect();
        Self {
            price_ceiling: Facets::from_products(products).price_ceiling,
            brand: Selection::All,
            free_text: String::new(),
            subcategory: Selection::All,
            spec_filters,
            sort: SortOrder::PriceAsc,
        }
    }

    /// Clear all filters in one atomic transition.
    pub fn reset(&mut self, products: &[Product]) {
        *self = Self::for_products(products);
    }

    /// Reconcile the spec-filter key set with a changed collection:
    /// stale keys are dropped, new keys default to `All`, selections for
    /// surviving keys are kept.
    pub fn sync_spec_keys(&mut self, products: &[Product]) {
        let keys = spec_key_union(products);
        self.spec_filters.retain(|key, _| keys.contains(key));
        for key in keys {
            self.spec_filters.entry(key).or_default();
        }
    }

    /// Set the price ceiling. Clamped so it never goes below 0.
    pub fn set_price_ceiling(&mut self, ceiling: f64) {
        self.price_ceiling = ceiling.max(0.0);
    }

    /// Set the brand selector.
    pub fn set_brand(&mut self, brand: Selection) {
        self.brand = brand;
    }

    /// Set the free-text query.
    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.free_text = text.into();
    }

    /// Set the subcategory selector.
    pub fn set_subcategory(&mut self, subcategory: Selection) {
        self.subcategory = subcategory;
    }

    /// Set the selector for one specification key.
    ///
    /// Keys not discovered in the collection are ignored (returns
    /// `false`), so the one-entry-per-discovered-key invariant holds no
    /// matter what the UI sends.
    pub fn set_spec_filter(&mut self, key: &str, selection: Selection) -> bool {
        match self.spec_filters.get_mut(key) {
            Some(slot) => {
                *slot = selection;
                true
            }
            None => false,
        }
    }

    /// Set the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::for_products(&[])
    }
}
