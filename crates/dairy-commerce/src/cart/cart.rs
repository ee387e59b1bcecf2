//! The cart: ordered line items keyed by product id.

use crate::cart::{CartProduct, LineItem};
use crate::config::CartConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A shopping cart.
///
/// Holds at most one line per product id, every line has a quantity of at
/// least 1, and the subtotal always fits in an `i64` of minor units. Line
/// quantities have no upper bound beyond that.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(config: CartConfig) -> Self {
        Self {
            items: Vec::new(),
            currency: config.currency,
        }
    }

    /// Add `quantity` of a product, merging into an existing line.
    ///
    /// Returns the line's quantity after the add. The cart is unchanged on
    /// error.
    pub fn add_item(&mut self, product: &CartProduct, quantity: i64) -> Result<i64, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(index) = self.position(&product.id) {
            let existing = &mut self.items[index];
            let previous = existing.quantity;
            let merged = previous
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            existing.set_quantity(merged)?;

            if let Err(e) = self.subtotal() {
                self.items[index].set_quantity(previous)?;
                return Err(e);
            }
            return Ok(merged);
        }

        let item = LineItem::new(product, quantity)?;
        self.items.push(item);
        if let Err(e) = self.subtotal() {
            self.items.pop();
            return Err(e);
        }
        Ok(quantity)
    }

    /// Replace a line's quantity; a quantity of zero or less removes the line.
    ///
    /// Returns `Ok(true)` if the cart changed and `Ok(false)` if the product
    /// is absent or already at that quantity.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(id));
        }

        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        let previous = self.items[index].quantity;
        if previous == quantity {
            return Ok(false);
        }

        self.items[index].set_quantity(quantity)?;
        if let Err(e) = self.subtotal() {
            self.items[index].set_quantity(previous)?;
            return Err(e);
        }
        Ok(true)
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by product id.
    pub fn get_item(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.items.iter().map(|i| &i.total_price), self.currency)
            .ok_or(CommerceError::Overflow)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(CartConfig::default())
    }
}
