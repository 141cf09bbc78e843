//! Client-side catalog filtering.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// Category filter for product lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Vegetable,
    Fruit,
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Vegetable => "vegetable",
            CategoryFilter::Fruit => "fruit",
        }
    }

    /// Whether a category passes this filter.
    pub fn allows(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Vegetable => category == Category::Vegetable,
            CategoryFilter::Fruit => category == Category::Fruit,
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.allows(product.category)
    }
}

/// Filter products by search substring and category, preserving input order.
///
/// The search is a case-insensitive substring match on the product name;
/// blank queries match everything.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    let query = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Rupees;

    fn fixture() -> Vec<Product> {
        vec![
            Product::new("Fresh Tomatoes", Category::Vegetable, Rupees(40), 50),
            Product::new("Fresh Apples", Category::Fruit, Rupees(120), 25),
            Product::new("Onions", Category::Vegetable, Rupees(30), 45),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = fixture();
        let hits = filter_products(&products, "tomato", CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Fresh Tomatoes");
    }

    #[test]
    fn test_category_filter() {
        let products = fixture();
        let veg = filter_products(&products, "", CategoryFilter::Vegetable);
        assert_eq!(veg.len(), 2);
        let fruit = filter_products(&products, "", CategoryFilter::Fruit);
        assert_eq!(fruit.len(), 1);
    }

    #[test]
    fn test_filters_compose_and_preserve_order() {
        let products = fixture();
        let hits = filter_products(&products, "o", CategoryFilter::Vegetable);
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Fresh Tomatoes", "Onions"]);
    }

    #[test]
    fn test_blank_query_matches_all() {
        let products = fixture();
        assert_eq!(filter_products(&products, "   ", CategoryFilter::All).len(), 3);
    }
}
