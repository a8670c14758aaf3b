//! Product catalog module.
//!
//! Contains the records the storefront renders: products with their open
//! specification maps, category/subcategory labels, and reviews.

mod category;
mod product;
mod review;

pub use category::{subcategory_name, Category, Subcategory};
pub use product::{Product, BRAND_KEY};
pub use review::{Review, ReviewSummary};
