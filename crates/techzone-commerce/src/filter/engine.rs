//! Predicate evaluation and filtering.
//!
//! A product stays in the listing only if every active predicate accepts
//! it; the survivors are then stable-sorted by price. No I/O, no failure
//! path: records with missing optional fields simply fail the predicates
//! that need those fields.

use crate::catalog::Product;
use crate::filter::state::{FilterState, SortOrder};

/// Apply the active filters to a product collection.
///
/// Returns the matching products sorted by price per the state's sort
/// order; ties keep the original collection order.
pub fn apply_filters<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    let needle = filters.free_text.to_lowercase();

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| matches_all(p, filters, &needle))
        .collect();

    match filters.sort {
        SortOrder::PriceAsc => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    matched
}

/// Conjunction of the five predicates. Every active predicate is
/// mandatory; none can be satisfied by another.
fn matches_all(product: &Product, filters: &FilterState, needle_lower: &str) -> bool {
    product.price <= filters.price_ceiling
        && filters.brand.matches(product.brand())
        && matches_text(product, needle_lower)
        && filters
            .subcategory
            .matches(product.subcategory_id.as_ref().map(|id| id.as_str()))
        && matches_specs(product, filters)
}

/// Case-insensitive substring match over name and description. A product
/// without a description can only match on its name.
fn matches_text(product: &Product, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle_lower)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle_lower))
}

/// Every spec selector must accept the product's value for its key.
fn matches_specs(product: &Product, filters: &FilterState) -> bool {
    filters
        .spec_filters
        .iter()
        .all(|(key, selection)| selection.matches(product.spec(key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BRAND_KEY;
    use crate::filter::state::Selection;

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("p1", "Mouse Gamer", 100.0)
                .with_description("Sensor optico de alta precision")
                .with_spec(BRAND_KEY, "Logitech")
                .with_spec("conexion", "inalambrica")
                .with_subcategory("1"),
            Product::new("p2", "Teclado Mecanico", 500.0)
                .with_spec(BRAND_KEY, "Razer")
                .with_spec("conexion", "cable")
                .with_subcategory("2"),
            Product::new("p3", "Mouse Oficina", 250.0)
                .with_spec(BRAND_KEY, "Logitech")
                .with_spec("conexion", "cable")
                .with_subcategory("1"),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_state_keeps_everything_sorted_ascending() {
        let products = sample_products();
        let state = FilterState::for_products(&products);
        let result = apply_filters(&products, &state);
        assert_eq!(ids(&result), ["p1", "p3", "p2"]);
    }

    #[test]
    fn test_ceiling_and_brand_scenario() {
        // priceCeiling=300, brand=Logitech over 100/500/250 keeps 100 and 250.
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        state.set_price_ceiling(300.0);
        state.set_brand(Selection::only("Logitech"));

        let result = apply_filters(&products, &state);
        assert_eq!(ids(&result), ["p1", "p3"]);

        state.set_sort(SortOrder::PriceDesc);
        let result = apply_filters(&products, &state);
        assert_eq!(ids(&result), ["p3", "p1"]);
    }

    #[test]
    fn test_ceiling_monotonicity() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        let mut previous = usize::MAX;
        for ceiling in [600.0, 500.0, 300.0, 250.0, 100.0, 50.0, 0.0] {
            state.set_price_ceiling(ceiling);
            let size = apply_filters(&products, &state).len();
            assert!(size <= previous, "result grew as the ceiling dropped");
            previous = size;
        }
    }

    #[test]
    fn test_ceiling_below_everything_is_empty_not_an_error() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        state.set_price_ceiling(10.0);
        assert!(apply_filters(&products, &state).is_empty());
    }

    #[test]
    fn test_free_text_is_case_insensitive_over_name_and_description() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);

        state.set_free_text("GAMER");
        assert_eq!(ids(&apply_filters(&products, &state)), ["p1"]);

        state.set_free_text("mouse");
        assert_eq!(ids(&apply_filters(&products, &state)), ["p1", "p3"]);

        // Only p1's description mentions the sensor.
        state.set_free_text("SENSOR");
        assert_eq!(ids(&apply_filters(&products, &state)), ["p1"]);
    }

    #[test]
    fn test_subcategory_predicate_compares_identifiers() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        state.set_subcategory(Selection::only("2"));
        assert_eq!(ids(&apply_filters(&products, &state)), ["p2"]);
    }

    #[test]
    fn test_spec_predicate_is_exact() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        state.set_spec_filter("conexion", Selection::only("cable"));
        assert_eq!(ids(&apply_filters(&products, &state)), ["p3", "p2"]);
    }

    #[test]
    fn test_predicates_are_a_conjunction() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        state.set_brand(Selection::only("Logitech"));
        state.set_spec_filter("conexion", Selection::only("cable"));
        state.set_free_text("mouse");

        let result = apply_filters(&products, &state);
        assert_eq!(ids(&result), ["p3"]);

        // Everything excluded fails at least one predicate.
        for product in &products {
            if result.iter().any(|p| p.id == product.id) {
                continue;
            }
            let fails = product.brand() != Some("Logitech")
                || product.spec("conexion") != Some("cable")
                || !product.name.to_lowercase().contains("mouse");
            assert!(fails);
        }
    }

    #[test]
    fn test_product_without_specs_fails_valued_predicates() {
        let mut products = sample_products();
        products.push(Product::new("p4", "Cable HDMI", 50.0));

        let mut state = FilterState::for_products(&products);
        let result = apply_filters(&products, &state);
        assert!(result.iter().any(|p| p.id.as_str() == "p4"));

        state.set_brand(Selection::only("Logitech"));
        let result = apply_filters(&products, &state);
        assert!(!result.iter().any(|p| p.id.as_str() == "p4"));
    }

    #[test]
    fn test_sort_adjacent_pairs_are_ordered() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);

        let ascending = apply_filters(&products, &state);
        for pair in ascending.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }

        state.set_sort(SortOrder::PriceDesc);
        let descending = apply_filters(&products, &state);
        for pair in descending.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn test_equal_prices_keep_collection_order() {
        let products = vec![
            Product::new("a", "Primero", 200.0),
            Product::new("b", "Segundo", 200.0),
            Product::new("c", "Tercero", 100.0),
        ];
        let mut state = FilterState::for_products(&products);

        let ascending = apply_filters(&products, &state);
        assert_eq!(ids(&ascending), ["c", "a", "b"]);

        state.set_sort(SortOrder::PriceDesc);
        let descending = apply_filters(&products, &state);
        assert_eq!(ids(&descending), ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_collection_yields_empty_result() {
        let state = FilterState::for_products(&[]);
        assert!(apply_filters(&[], &state).is_empty());
    }

    #[test]
    fn test_determinism() {
        let products = sample_products();
        let mut state = FilterState::for_products(&products);
        state.set_free_text("mouse");
        state.set_sort(SortOrder::PriceDesc);

        let first = ids(&apply_filters(&products, &state));
        let second = ids(&apply_filters(&products, &state));
        assert_eq!(first, second);
    }
}
