//! Category and subcategory label records.
//!
//! The filter engine compares raw subcategory identifiers; these records
//! exist so the UI can render facet labels.

use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// A top-level catalog category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// A subcategory within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    /// Unique subcategory identifier.
    pub id: SubcategoryId,
    /// Display name.
    pub name: String,
    /// Parent category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl Subcategory {
    /// Create a new subcategory.
    pub fn new(id: impl Into<SubcategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: None,
        }
    }

    /// Set the parent category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(id.into());
        self
    }
}

/// Find the display name for a subcategory identifier.
pub fn subcategory_name<'a>(
    subcategories: &'a [Subcategory],
    id: &SubcategoryId,
) -> Option<&'a str> {
    subcategories
        .iter()
        .find(|s| &s.id == id)
        .map(|s| s.name.as_str())
}
