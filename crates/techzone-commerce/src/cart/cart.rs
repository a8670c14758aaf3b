//! Cart and line item types.

use crate::cart::pricing::CartTotals;
use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::{CartId, ProductId};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// The shopping cart.
///
/// One line item per product; adding an existing product merges
/// quantities. Persistence belongs to the hosted backend; this is the
/// in-memory state the storefront mutates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    pub items: Vec<CartItem>,
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: f64,
    /// Units of this product.
    pub quantity: i64,
    /// Listing thumbnail.
    pub image_url: Option<String>,
}

impl CartItem {
    /// Line subtotal.
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            id: CartId::generate(),
            items: Vec::new(),
        }
    }

    /// Add units of a product, merging with an existing line.
    ///
    /// Returns an error if the quantity is not positive or the merged
    /// line would exceed [`MAX_QUANTITY_PER_ITEM`].
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> Result<(), StoreError> {
        if quantity <= 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            let merged = existing
                .quantity
                .checked_add(quantity)
                .ok_or(StoreError::InvalidQuantity(quantity))?;
            if merged > MAX_QUANTITY_PER_ITEM {
                return Err(StoreError::QuantityExceedsLimit(
                    merged,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = merged;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StoreError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image_url: product.image_url.clone(),
        });
        Ok(())
    }

    /// Replace a line's quantity. Zero removes the line.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StoreError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let position = self
            .items
            .iter()
            .position(|item| &item.product_id == product_id)
            .ok_or_else(|| StoreError::ItemNotInCart(product_id.to_string()))?;

        if quantity == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = quantity;
        }
        Ok(())
    }

    /// Remove a line.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| &item.product_id == product_id)
            .ok_or_else(|| StoreError::ItemNotInCart(product_id.to_string()))?;
        self.items.remove(position);
        Ok(())
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Derive the cart totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_items(&self.items)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
