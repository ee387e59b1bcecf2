//! Quantity picker shown next to "Add to Cart".

use crate::cart::parse_quantity;
use crate::catalog::Product;

/// Bounded quantity picker.
///
/// The value never drops below the product's minimum order and, when
/// stock is known, never rises above it. Invalid input leaves the value
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: i64,
    min: i64,
    max: Option<i64>,
}

impl QuantitySelector {
    /// Create a picker starting at `min` (at least 1).
    ///
    /// A `max` below `min` is raised to `min`.
    pub fn new(min: i64, max: Option<i64>) -> Self {
        let min = min.max(1);
        Self {
            value: min,
            min,
            max: max.map(|m| m.max(min)),
        }
    }

    /// Picker for a catalog product: starts at its minimum order, capped by stock.
    pub fn for_product(product: &Product) -> Self {
        let max = product.is_in_stock().then(|| i64::from(product.stock));
        Self::new(product.default_order_quantity(), max)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    /// Step up by one. Returns false at the upper bound.
    pub fn increment(&mut self) -> bool {
        self.set(self.value.saturating_add(1))
    }

    /// Step down by one. Returns false at the minimum.
    pub fn decrement(&mut self) -> bool {
        self.set(self.value - 1)
    }

    /// Set an exact value if it lies within bounds.
    pub fn set(&mut self, value: i64) -> bool {
        if !self.accepts(value) || value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Set from a text field. Non-numeric or out-of-range input is ignored.
    pub fn set_from_input(&mut self, input: &str) -> bool {
        parse_quantity(input).is_some_and(|q| self.set(q))
    }

    /// Return to the minimum.
    pub fn reset(&mut self) {
        self.value = self.min;
    }

    fn accepts(&self, value: i64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(stock: u32, min_order: u32) -> Product {
        let mut p = Product::new("1", "Milk", Money::new(3599, Currency::USD), "20L", "Milk");
        p.stock = stock;
        p.min_order = min_order;
        p
    }

    #[test]
    fn test_starts_at_min_order() {
        let selector = QuantitySelector::for_product(&product(100, 5));
        assert_eq!(selector.value(), 5);
        assert_eq!(selector.max(), Some(100));
    }

    #[test]
    fn test_decrement_stops_at_min() {
        let mut selector = QuantitySelector::for_product(&product(100, 2));
        assert!(selector.increment());
        assert!(selector.decrement());
        assert!(!selector.decrement());
        assert_eq!(selector.value(), 2);
    }

    #[test]
    fn test_increment_stops_at_stock() {
        let mut selector = QuantitySelector::for_product(&product(2, 1));
        assert!(selector.increment());
        assert!(!selector.increment());
        assert_eq!(selector.value(), 2);
    }

    #[test]
    fn test_unknown_stock_is_unbounded() {
        let mut selector = QuantitySelector::for_product(&product(0, 1));
        assert_eq!(selector.max(), None);
        assert!(selector.set(500));
    }

    #[test]
    fn test_input_validation() {
        let mut selector = QuantitySelector::for_product(&product(10, 2));
        assert!(selector.set_from_input(" 7 "));
        assert_eq!(selector.value(), 7);

        assert!(!selector.set_from_input("abc"));
        assert!(!selector.set_from_input("1"));
        assert!(!selector.set_from_input("11"));
        assert_eq!(selector.value(), 7);

        selector.reset();
        assert_eq!(selector.value(), 2);
    }
}
