//! The read-only product catalog.

use crate::catalog::{CatalogQuery, Pagination, Product, ProductRecord};
use crate::config::CatalogConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// A static, read-only list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    config: CatalogConfig,
}

/// One page of a catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    /// Products on this page, in sorted order.
    pub items: Vec<&'a Product>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl Catalog {
    /// Create a catalog with default listing settings.
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_config(products, CatalogConfig::default())
    }

    /// Create a catalog with explicit listing settings.
    pub fn with_config(products: Vec<Product>, config: CatalogConfig) -> Self {
        Self { products, config }
    }

    /// Load a catalog from a JSON array of product records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records
            .into_iter()
            .map(|r| r.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(products))
    }

    /// Replace the listing settings.
    pub fn set_config(&mut self, config: CatalogConfig) {
        self.config = config;
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing if it is absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Other products in the same category, at most `limit` of them.
    /// `None` uses the configured limit.
    pub fn related(&self, product: &Product, limit: Option<usize>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit.unwrap_or(self.config.related_limit))
            .collect()
    }

    /// Filter, sort and paginate the catalog.
    pub fn search(&self, query: &CatalogQuery) -> CatalogPage<'_> {
        let mut matched: Vec<&Product> =
            self.products.iter().filter(|p| query.matches(p)).collect();
        matched.sort_by(|a, b| query.sort.compare(a, b));

        let per_page = query.per_page.unwrap_or(self.config.per_page);
        let pagination = Pagination::new(query.page, per_page, matched.len());
        let items = matched
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect();

        CatalogPage { items, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortOption;
    use crate::money::Money;

    fn catalog() -> Catalog {
        let items = [
            ("1", "Whole Milk", "Milk", 3599),
            ("2", "Skim Milk", "Milk", 2999),
            ("3", "Cheddar", "Cheese", 8950),
            ("4", "Low Fat Milk", "Milk", 3199),
            ("5", "Cream", "Cream", 4500),
            ("6", "Buttermilk", "Milk", 2500),
        ];
        Catalog::new(
            items
                .iter()
                .map(|(id, name, cat, cents)| {
                    Product::new(*id, *name, Money::new(*cents, Currency::USD), "unit", *cat)
                })
                .collect(),
        )
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(catalog().categories(), vec!["Milk", "Cheese", "Cream"]);
    }

    #[test]
    fn test_related_excludes_self_and_limits() {
        let mut catalog = catalog();
        let milk = catalog.get(&ProductId::from("1")).unwrap().clone();

        let related: Vec<&str> = catalog
            .related(&milk, None)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(related, vec!["2", "4", "6"]);

        catalog.set_config(CatalogConfig {
            related_limit: 2,
            ..CatalogConfig::default()
        });
        assert_eq!(catalog.related(&milk, None).len(), 2);
    }

    #[test]
    fn test_related_explicit_limit_overrides_config() {
        let catalog = catalog();
        let milk = catalog.get(&ProductId::from("1")).unwrap();

        let related: Vec<&str> = catalog
            .related(milk, Some(1))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(related, vec!["2"]);
        assert_eq!(catalog.related(milk, Some(10)).len(), 3);
        assert!(catalog.related(milk, Some(0)).is_empty());
    }

    #[test]
    fn test_search_filters_sorts_and_pages() {
        let catalog = catalog();
        let query = CatalogQuery::new()
            .with_category("MILK")
            .with_sort(SortOption::PriceLowToHigh)
            .with_per_page(3);

        let page = catalog.search(&query);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Buttermilk", "Skim Milk", "Low Fat Milk"]);
        assert_eq!(page.pagination.total, 4);
        assert_eq!(page.pagination.total_pages, 2);

        let page = catalog.search(&query.with_page(2));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Whole Milk");
    }

    #[test]
    fn test_search_uses_configured_page_size() {
        let cat = catalog();
        let page = cat.search(&CatalogQuery::new());
        assert_eq!(page.pagination.per_page, 8);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].name, "Buttermilk");
    }

    #[test]
    fn test_require_missing() {
        let err = catalog().require(&ProductId::from("missing")).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[{"id": 1, "name": "Milk", "price": 35.99, "unit": "per 20L bag", "category": "Milk"}]"#,
            Currency::USD,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].price.amount_cents, 3599);

        assert!(Catalog::from_json("not json", Currency::USD).is_err());
    }

    #[test]
    fn test_from_json_rejects_sub_cent_price() {
        let err = Catalog::from_json(
            r#"[{"id": 9, "name": "Whey", "price": 0.005, "unit": "per g", "category": "Whey"}]"#,
            Currency::USD,
        )
        .unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(id) if id == "9"));
    }
}
