//! Facet-filter engine.
//!
//! The storefront's in-memory query engine: derives the available filter
//! options from the product collection, evaluates the conjunction of
//! active predicates, and keeps the listing sorted by price.

mod browser;
mod engine;
mod facets;
mod state;

pub use browser::CatalogBrowser;
pub use engine::apply_filters;
pub use facets::{Facets, DEFAULT_PRICE_CEILING};
pub use state::{FilterState, Selection, SortOrder};
