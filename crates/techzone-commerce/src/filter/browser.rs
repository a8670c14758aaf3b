//! Recompute-on-change embedding of the filter engine.
//!
//! The storefront UI re-renders whenever the product snapshot or any
//! predicate changes. `CatalogBrowser` is the plain-function rendition of
//! that loop: it owns the snapshot and the filter state, memoizes the
//! derived facets per snapshot, and recomputes the visible listing
//! synchronously on demand.

use crate::catalog::Product;
use crate::filter::engine::apply_filters;
use crate::filter::facets::Facets;
use crate::filter::state::{FilterState, Selection, SortOrder};

/// Owns a product snapshot plus the user's filter state.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    products: Vec<Product>,
    facets: Facets,
    filters: FilterState,
}

impl CatalogBrowser {
    /// Create a browser over an initial snapshot. The filter state is
    /// derived from the collection (ceiling at the maximum price, one
    /// inactive selector per discovered spec key).
    pub fn new(products: Vec<Product>) -> Self {
        let facets = Facets::from_products(&products);
        let filters = FilterState::for_products(&products);
        Self {
            products,
            facets,
            filters,
        }
    }

    /// The current snapshot, in fetch order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The facets derived from the current snapshot.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// The active filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace the snapshot after a refetch.
    ///
    /// Facets and the price ceiling are re-derived from the new
    /// collection; spec-filter keys are reconciled (stale keys dropped,
    /// new keys inactive) while surviving selections are kept.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.facets = Facets::from_products(&self.products);
        self.filters.sync_spec_keys(&self.products);
        self.filters.set_price_ceiling(self.facets.price_ceiling);
    }

    /// Set the price ceiling.
    pub fn set_price_ceiling(&mut self, ceiling: f64) {
        self.filters.set_price_ceiling(ceiling);
    }

    /// Set the brand selector.
    pub fn set_brand(&mut self, brand: Selection) {
        self.filters.set_brand(brand);
    }

    /// Set the free-text query.
    pub fn set_free_text(&mut self, text: impl Into<String>) {
        self.filters.set_free_text(text);
    }

    /// Set the subcategory selector.
    pub fn set_subcategory(&mut self, subcategory: Selection) {
        self.filters.set_subcategory(subcategory);
    }

    /// Set the selector for one specification key. Unknown keys are
    /// ignored.
    pub fn set_spec_filter(&mut self, key: &str, selection: Selection) -> bool {
        self.filters.set_spec_filter(key, selection)
    }

    /// Set the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.filters.set_sort(sort);
    }

    /// Clear every filter in one atomic transition.
    pub fn clear_filters(&mut self) {
        self.filters.reset(&self.products);
    }

    /// The filtered, sorted listing for the current snapshot and state.
    pub fn visible(&self) -> Vec<&Product> {
        apply_filters(&self.products, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BRAND_KEY;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("p1", "Mouse Gamer", 100.0).with_spec(BRAND_KEY, "Logitech"),
            Product::new("p2", "Teclado", 500.0).with_spec(BRAND_KEY, "Razer"),
            Product::new("p3", "Mouse Oficina", 250.0).with_spec(BRAND_KEY, "Logitech"),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_clear_filters_restores_full_ascending_listing() {
        let mut browser = CatalogBrowser::new(sample_products());
        browser.set_price_ceiling(120.0);
        browser.set_brand(Selection::only("Razer"));
        browser.set_free_text("teclado");
        assert!(browser.visible().is_empty());

        browser.clear_filters();
        assert_eq!(ids(&browser.visible()), ["p1", "p3", "p2"]);
    }

    #[test]
    fn test_mutators_narrow_the_listing() {
        let mut browser = CatalogBrowser::new(sample_products());
        browser.set_brand(Selection::only("Logitech"));
        browser.set_price_ceiling(300.0);
        assert_eq!(ids(&browser.visible()), ["p1", "p3"]);

        browser.set_sort(SortOrder::PriceDesc);
        assert_eq!(ids(&browser.visible()), ["p3", "p1"]);
    }

    #[test]
    fn test_set_products_rederives_facets_and_ceiling() {
        let mut browser = CatalogBrowser::new(sample_products());
        assert_eq!(browser.facets().price_ceiling, 500.0);

        browser.set_products(vec![
            Product::new("p9", "Monitor", 90000.0).with_spec("pulgadas", "27"),
        ]);
        assert_eq!(browser.facets().price_ceiling, 90000.0);
        assert_eq!(browser.filters().price_ceiling, 90000.0);
        assert_eq!(browser.facets().spec_keys, vec!["pulgadas"]);
        assert!(browser.filters().spec_filters.contains_key("pulgadas"));
        assert!(!browser.filters().spec_filters.contains_key(BRAND_KEY));
    }

    #[test]
    fn test_brand_selection_survives_refetch_of_same_catalog() {
        let mut browser = CatalogBrowser::new(sample_products());
        browser.set_spec_filter(BRAND_KEY, Selection::only("Razer"));
        browser.set_products(sample_products());
        assert_eq!(ids(&browser.visible()), ["p2"]);
    }
}
