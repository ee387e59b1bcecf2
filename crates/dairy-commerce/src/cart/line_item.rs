//! Cart input descriptors and line items.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What a product card or detail page hands to the cart.
///
/// `quantity` is optional: when `add_to_cart` receives no explicit
/// quantity it falls back to this value, then to 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub unit: String,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl CartProduct {
    /// Create a descriptor with no default quantity or display metadata.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            unit: unit.into(),
            quantity: None,
            image_url: None,
            category: None,
        }
    }

    /// Set the default quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Parse a quantity typed into a form field.
///
/// Only plain integers are accepted; anything else is `None`.
pub fn parse_quantity(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// One product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line is for; unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Sale unit (e.g., "per 20L bag").
    pub unit: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Total price (unit_price * quantity).
    pub total_price: Money,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl LineItem {
    /// Build a validated line item.
    ///
    /// Fails if the id is blank, the quantity is below 1, the price is
    /// negative, or the line total overflows.
    pub fn new(product: &CartProduct, quantity: i64) -> Result<Self, CommerceError> {
        if product.id.is_empty() {
            return Err(CommerceError::MissingId);
        }
        if product.price.is_negative() {
            return Err(CommerceError::InvalidPrice(product.id.to_string()));
        }
        check_quantity(quantity)?;

        let total_price = line_total(&product.price, quantity)?;
        Ok(Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit: product.unit.clone(),
            quantity,
            unit_price: product.price,
            total_price,
            image_url: product.image_url.clone(),
            category: product.category.clone(),
        })
    }

    /// Set the quantity and recompute the total. The line is unchanged on error.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), CommerceError> {
        check_quantity(quantity)?;
        self.total_price = line_total(&self.unit_price, quantity)?;
        self.quantity = quantity;
        Ok(())
    }
}

fn check_quantity(quantity: i64) -> Result<(), CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    Ok(())
}

fn line_total(unit_price: &Money, quantity: i64) -> Result<Money, CommerceError> {
    unit_price
        .try_multiply(quantity)
        .ok_or(CommerceError::Overflow)
}
