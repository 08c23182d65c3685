//! Catalog
//!
//! The static, read-only product list consumed for display and pricing.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Product categories shown as storefront tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fresh fruit.
    Fruits,

    /// Fresh vegetables.
    Vegetables,

    /// Milk, eggs and dairy.
    Dairy,

    /// Breads and baked goods.
    Bakery,

    /// Meat and poultry.
    Meat,

    /// Drinks.
    Beverages,

    /// Snacks.
    Snacks,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 7] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Dairy,
        Category::Bakery,
        Category::Meat,
        Category::Beverages,
        Category::Snacks,
    ];

    /// Display label for the category tab.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Meat => "Meat",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
        }
    }
}

/// Where a product image comes from, resolved once when the catalog is
/// built rather than re-disambiguated at every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Bundled asset, addressed by key.
    Asset(&'static str),

    /// Remote image URI.
    Uri(String),
}

/// Catalog product record.
#[derive(Debug, Clone)]
pub struct Product {
    /// Opaque product identifier, unique within the catalog.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Price per unit.
    pub price: Money<'static, Currency>,

    /// Unit the price applies to ("kg", "box", ...).
    pub unit: &'static str,

    /// Resolved image reference.
    pub image: ImageRef,

    /// Average star rating.
    pub rating: Decimal,

    /// Short marketing description.
    pub description: &'static str,

    /// Category the product is listed under.
    pub category: Category,
}

/// Product descriptor passed between screens in deep links.
#[derive(Debug, Deserialize)]
struct ProductLink {
    id: String,
}

/// The static product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-resolved product records.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Iterate over all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Products in one category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    /// Case-insensitive substring search over product names.
    ///
    /// A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();

        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a deep-link product descriptor.
    ///
    /// The payload is the JSON descriptor screens pass between each other.
    /// An unparseable payload, and any id the catalog does not carry, both
    /// resolve to `None` — the "not found" display state, never a crash.
    #[must_use]
    pub fn resolve_link(&self, payload: &str) -> Option<&Product> {
        let link: ProductLink = serde_json::from_str(payload).ok()?;

        self.find(&link.id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    use super::*;

    #[test]
    fn find_returns_the_record_for_a_known_id() {
        let catalog = fixtures::standard_catalog();

        let banana = catalog.find("fr1");

        assert_eq!(banana.map(|p| p.name), Some("Banana"));
    }

    #[test]
    fn find_returns_none_for_an_unknown_id() {
        let catalog = fixtures::standard_catalog();

        assert!(catalog.find("zz9").is_none());
    }

    #[test]
    fn every_category_has_products() {
        let catalog = fixtures::standard_catalog();

        for category in Category::ALL {
            assert!(
                catalog.in_category(category).count() > 0,
                "category {} should not be empty",
                category.label()
            );
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = fixtures::standard_catalog();

        let hits = catalog.search("bReAd");

        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("bread")));
    }

    #[test]
    fn blank_search_matches_nothing() {
        let catalog = fixtures::standard_catalog();

        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn deep_link_with_known_id_resolves() {
        let catalog = fixtures::standard_catalog();

        let product = catalog.resolve_link(r#"{"id":"fr3","name":"Apple"}"#);

        assert_eq!(product.map(|p| p.id), Some("fr3"));
    }

    #[test]
    fn malformed_deep_link_resolves_to_none() {
        let catalog = fixtures::standard_catalog();

        assert!(catalog.resolve_link("{not json").is_none());
        assert!(catalog.resolve_link(r#"{"name":"no id"}"#).is_none());
    }

    #[test]
    fn deep_link_with_unknown_id_resolves_to_none() {
        let catalog = fixtures::standard_catalog();

        assert!(catalog.resolve_link(r#"{"id":"zz9"}"#).is_none());
    }
}
