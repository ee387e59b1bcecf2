//! Catalog listing queries.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Category value meaning "no category filter".
const ALL_CATEGORIES: &str = "all";

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by name A-Z.
    #[default]
    Name,
    /// Sort by price, low to high.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Sort by price, high to low.
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Name => "Name",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
        }
    }

    /// Parse the value used in listing URLs (`name`, `price-low`, `price-high`).
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortOption::Name),
            "price-low" => Some(SortOption::PriceLowToHigh),
            "price-high" => Some(SortOption::PriceHighToLow),
            _ => None,
        }
    }

    /// Compare two products under this ordering.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortOption::PriceLowToHigh => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceHighToLow => b.price.amount_cents.cmp(&a.price.amount_cents),
        }
    }
}

/// A product listing query: search text, category, sort and page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Case-insensitive search over name and description.
    pub text: Option<String>,
    /// Category filter; `None` or `"all"` disables it.
    pub category: Option<String>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page; `None` uses the catalog's configured page size.
    pub per_page: Option<usize>,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// Create a query matching every product, sorted by name.
    pub fn new() -> Self {
        Self {
            text: None,
            category: None,
            sort: SortOption::Name,
            page: 1,
            per_page: None,
        }
    }

    /// Set the search text. Blank text clears the filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            None
        } else {
            Some(category)
        };
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page (clamped to at least 1).
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Override the page size.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page.max(1));
        self
    }

    /// Whether `product` passes the text and category filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.matches_category(product)
    }

    fn matches_text(&self, product: &Product) -> bool {
        match &self.text {
            None => true,
            Some(text) => {
                let needle = text.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
        }
    }

    fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            None => true,
            Some(c) if c.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
            Some(c) => product.category.to_lowercase() == c.to_lowercase(),
        }
    }
}
