//! Catalog and cart state for the dairy storefront.
//!
//! This crate provides the domain types behind the storefront UI:
//!
//! - **Catalog**: Products, filtering, sorting, pagination, quantity pickers
//! - **Cart**: Line items, the cart itself, and the observable [`CartStore`]
//! - **Config**: TOML-backed store configuration
//!
//! # Example
//!
//! ```
//! use dairy_commerce::prelude::*;
//!
//! let catalog = sample_catalog();
//! let milk = catalog.get(&ProductId::from(1u64)).unwrap();
//!
//! let mut store = CartStore::new(CartConfig::default());
//! store.add_to_cart(&milk.to_cart_product(None), Some(2));
//!
//! assert_eq!(store.cart_count(), 2);
//! assert_eq!(store.cart_total().display(), "$71.98");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use config::{CartConfig, CatalogConfig, StoreConfig};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CartConfig, CatalogConfig, StoreConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        sample_catalog, Catalog, CatalogPage, CatalogQuery, Pagination, Product,
        QuantitySelector, SortOption,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartProduct, CartState, CartStore, LineItem, SubscriptionId,
    };
}
