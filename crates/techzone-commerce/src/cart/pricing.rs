//! Cart total calculation.

use crate::cart::cart::CartItem;
use serde::{Deserialize, Serialize};

/// Derived cart totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line subtotals.
    pub subtotal: f64,
    /// Total units across all lines.
    pub item_count: i64,
}

impl CartTotals {
    /// Compute totals over a set of lines.
    pub fn from_items(items: &[CartItem]) -> Self {
        Self {
            subtotal: items.iter().map(CartItem::subtotal).sum(),
            item_count: items.iter().map(|item| item.quantity).sum(),
        }
    }
}
