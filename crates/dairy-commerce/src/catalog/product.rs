//! Product types.

use crate::cart::CartProduct;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Sale unit (e.g., "per 20L bag").
    pub unit: String,
    /// Category name (e.g., "Milk").
    pub category: String,
    /// Units on hand.
    pub stock: u32,
    /// Smallest quantity a customer should order.
    pub min_order: u32,
    /// Selling points shown on the detail page.
    pub features: Vec<String>,
    /// Product image.
    pub image_url: Option<String>,
}

impl Product {
    /// Create a product with the required fields; the rest start empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            unit: unit.into(),
            category: category.into(),
            stock: 0,
            min_order: 1,
            features: Vec::new(),
            image_url: None,
        }
    }

    /// Check if any units are on hand.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Quantity a picker starts at: the minimum order, never below one.
    pub fn default_order_quantity(&self) -> i64 {
        i64::from(self.min_order.max(1))
    }

    /// Build the descriptor handed to the cart.
    ///
    /// `quantity` is carried on the descriptor and used when `add_to_cart`
    /// is called without an explicit quantity.
    pub fn to_cart_product(&self, quantity: Option<i64>) -> CartProduct {
        CartProduct {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            unit: self.unit.clone(),
            quantity,
            image_url: self.image_url.clone(),
            category: Some(self.category.clone()),
        }
    }
}

/// A product as it appears in catalog JSON, with a decimal price.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub unit: String,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_min_order")]
    pub min_order: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_min_order() -> u32 {
    1
}

impl ProductRecord {
    /// Convert into a [`Product`] priced in `currency`.
    ///
    /// A negative price, or one finer than the currency's minor unit, is
    /// rejected with [`CommerceError::InvalidPrice`].
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        if self.id.is_empty() {
            return Err(CommerceError::MissingId);
        }
        let price = Money::try_from_decimal(self.price, currency)
            .filter(|m| !m.is_negative())
            .ok_or_else(|| CommerceError::InvalidPrice(self.id.to_string()))?;

        Ok(Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price,
            unit: self.unit,
            category: self.category,
            stock: self.stock,
            min_order: self.min_order,
            features: self.features,
            image_url: self.image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> ProductRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_record_conversion() {
        let product = record(
            r#"{"id": 4, "name": "Butter", "price": 12.5, "unit": "per 500g",
                "category": "Butter", "stock": 40, "minOrder": 2,
                "imageUrl": "/images/butter.jpg"}"#,
        )
        .into_product(Currency::USD)
        .unwrap();

        assert_eq!(product.id, ProductId::from(4u64));
        assert_eq!(product.price.amount_cents, 1250);
        assert_eq!(product.min_order, 2);
        assert_eq!(product.image_url.as_deref(), Some("/images/butter.jpg"));
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = record(r#"{"id": 1, "name": "x", "price": -1.0, "unit": "u", "category": "c"}"#)
            .into_product(Currency::USD)
            .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(_)));
    }

    #[test]
    fn test_sub_cent_price_rejected() {
        let err = record(r#"{"id": 1, "name": "x", "price": 0.005, "unit": "u", "category": "c"}"#)
            .into_product(Currency::USD)
            .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(_)));

        let product = record(r#"{"id": 2, "name": "y", "price": 0.01, "unit": "u", "category": "c"}"#)
            .into_product(Currency::USD)
            .unwrap();
        assert_eq!(product.price.amount_cents, 1);
    }

    #[test]
    fn test_to_cart_product_carries_quantity() {
        let mut product = Product::new(
            1u64,
            "Milk",
            Money::new(3599, Currency::USD),
            "20L",
            "Milk",
        );
        product.min_order = 0;
        assert_eq!(product.default_order_quantity(), 1);

        let descriptor = product.to_cart_product(Some(3));
        assert_eq!(descriptor.quantity, Some(3));
        assert_eq!(descriptor.category.as_deref(), Some("Milk"));
        assert_eq!(descriptor.price, product.price);
    }
}
