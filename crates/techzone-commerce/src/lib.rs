//! Storefront domain types and logic for TechZone.
//!
//! This crate provides the in-process core of the TechZone storefront:
//!
//! - **Catalog**: Products with open specification maps, subcategories,
//!   reviews
//! - **Filter**: The facet-filter engine: facet discovery, predicate
//!   evaluation, price sorting
//! - **Cart**: Shopping cart with line items and totals
//! - **Backend** (feature `backend`): Typed fetchers over the hosted
//!   backend
//!
//! # Example
//!
//! ```rust
//! use techzone_commerce::prelude::*;
//!
//! let products = vec![
//!     Product::new("p1", "Mouse Gamer", 100.0).with_spec(BRAND_KEY, "Logitech"),
//!     Product::new("p2", "Teclado", 500.0).with_spec(BRAND_KEY, "Razer"),
//!     Product::new("p3", "Mouse Oficina", 250.0).with_spec(BRAND_KEY, "Logitech"),
//! ];
//!
//! let mut browser = CatalogBrowser::new(products);
//! browser.set_brand(Selection::only("Logitech"));
//! browser.set_price_ceiling(300.0);
//!
//! let visible = browser.visible();
//! assert_eq!(visible.len(), 2);
//! assert_eq!(visible[0].name, "Mouse Gamer");
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod filter;

#[cfg(feature = "backend")]
pub mod backend;

pub use error::StoreError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        subcategory_name, Category, Product, Review, ReviewSummary, Subcategory, BRAND_KEY,
    };

    // Filter engine
    pub use crate::filter::{
        apply_filters, CatalogBrowser, Facets, FilterState, Selection, SortOrder,
        DEFAULT_PRICE_CEILING,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals, MAX_QUANTITY_PER_ITEM};

    // Backend
    #[cfg(feature = "backend")]
    pub use crate::backend::StoreBackend;
}
