//! Product catalog module.
//!
//! Read-only product data plus the listing queries and quantity picker the
//! storefront pages use before anything reaches the cart.

mod catalog;
mod pagination;
mod product;
mod quantity;
mod query;
mod sample;

pub use catalog::{Catalog, CatalogPage};
pub use pagination::Pagination;
pub use product::{Product, ProductRecord};
pub use quantity::QuantitySelector;
pub use query::{CatalogQuery, SortOption};
pub use sample::sample_catalog;
