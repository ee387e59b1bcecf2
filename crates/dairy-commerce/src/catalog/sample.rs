//! Built-in sample catalog.

use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

struct Entry {
    id: u64,
    name: &'static str,
    description: &'static str,
    price: f64,
    unit: &'static str,
    category: &'static str,
    stock: u32,
    min_order: u32,
    features: &'static [&'static str],
    image: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: 1,
        name: "Premium Full Cream Milk",
        description: "Fresh full cream milk from pasture-fed herds, delivered chilled.",
        price: 35.99,
        unit: "per 20L bag",
        category: "Milk",
        stock: 150,
        min_order: 1,
        features: &["Pasteurized", "Farm fresh", "Bulk packaging"],
        image: "/images/full-cream-milk.jpg",
    },
    Entry {
        id: 2,
        name: "Low Fat Milk",
        description: "Light milk with 1.5% fat for cafes and kitchens.",
        price: 32.49,
        unit: "per 20L bag",
        category: "Milk",
        stock: 120,
        min_order: 1,
        features: &["1.5% fat", "Pasteurized"],
        image: "/images/low-fat-milk.jpg",
    },
    Entry {
        id: 3,
        name: "Fresh Cream",
        description: "Thick cream for whipping, sauces and desserts.",
        price: 48.0,
        unit: "per 5L tub",
        category: "Cream",
        stock: 60,
        min_order: 2,
        features: &["35% fat", "Whips well"],
        image: "/images/fresh-cream.jpg",
    },
    Entry {
        id: 4,
        name: "Salted Butter",
        description: "Churned from fresh cream, lightly salted.",
        price: 12.5,
        unit: "per 500g block",
        category: "Butter",
        stock: 300,
        min_order: 10,
        features: &["Lightly salted", "Foil wrapped"],
        image: "/images/salted-butter.jpg",
    },
    Entry {
        id: 5,
        name: "Aged Cheddar",
        description: "Sharp cheddar matured for twelve months.",
        price: 89.95,
        unit: "per 5kg wheel",
        category: "Cheese",
        stock: 25,
        min_order: 1,
        features: &["12 month aged", "Natural rind"],
        image: "/images/aged-cheddar.jpg",
    },
    Entry {
        id: 6,
        name: "Plain Yogurt",
        description: "Set yogurt with live cultures, no added sugar.",
        price: 22.75,
        unit: "per 2kg tub",
        category: "Yogurt",
        stock: 80,
        min_order: 4,
        features: &["Live cultures", "No added sugar"],
        image: "/images/plain-yogurt.jpg",
    },
    Entry {
        id: 7,
        name: "Buttermilk",
        description: "Cultured buttermilk for baking and marinades.",
        price: 18.2,
        unit: "per 5L bottle",
        category: "Milk",
        stock: 0,
        min_order: 1,
        features: &["Cultured"],
        image: "/images/buttermilk.jpg",
    },
];

/// The storefront's built-in dairy catalog, priced in USD.
pub fn sample_catalog() -> Catalog {
    Catalog::new(ENTRIES.iter().map(to_product).collect())
}

fn to_product(entry: &Entry) -> Product {
    let mut product = Product::new(
        entry.id,
        entry.name,
        Money::from_decimal(entry.price, Currency::USD),
        entry.unit,
        entry.category,
    );
    product.description = entry.description.to_string();
    product.stock = entry.stock;
    product.min_order = entry.min_order;
    product.features = entry.features.iter().map(|f| f.to_string()).collect();
    product.image_url = Some(entry.image.to_string());
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_sample_catalog() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), ENTRIES.len());

        let milk = catalog.get(&ProductId::from(1u64)).unwrap();
        assert_eq!(milk.price.amount_cents, 3599);
        assert_eq!(milk.unit, "per 20L bag");
        assert!(catalog.categories().contains(&"Cheese"));
    }
}
