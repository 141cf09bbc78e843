//! Product types.

use crate::ids::ProductId;
use crate::money::Rupees;
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Vegetable,
    Fruit,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vegetable" => Some(Category::Vegetable),
            "fruit" => Some(Category::Fruit),
            _ => None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name as shown to customers.
    pub name: String,
    /// Fruit or vegetable.
    pub category: Category,
    /// Retail price per kg.
    pub price: Rupees,
    /// Stock on hand in kg.
    pub stock: i64,
    /// Wholesale mandi reference price, when known.
    pub mandi_price: Option<Rupees>,
    /// Image URL for listings.
    pub image_url: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(name: impl Into<String>, category: Category, price: Rupees, stock: i64) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            category,
            price,
            stock,
            mandi_price: None,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product has stock available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Savings over the retail price when a mandi reference price exists.
    pub fn mandi_savings(&self) -> Option<Rupees> {
        self.mandi_price.map(|mp| self.price.saturating_sub(mp))
    }

    /// Apply a partial update, bumping `updated_at`.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(mandi_price) = patch.mandi_price {
            self.mandi_price = mandi_price;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        self.touch();
    }

    /// Bump the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Fields for creating a product; the store assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: Rupees,
    pub stock: i64,
    pub mandi_price: Option<Rupees>,
    pub image_url: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: Category, price: Rupees, stock: i64) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            stock,
            mandi_price: None,
            image_url: None,
        }
    }

    /// Materialize into a full product record.
    pub fn into_product(self) -> Product {
        let mut product = Product::new(self.name, self.category, self.price, self.stock);
        product.mandi_price = self.mandi_price;
        product.image_url = self.image_url;
        product
    }
}

/// A partial product update. `None` leaves the field unchanged; the outer
/// `Option` on `mandi_price`/`image_url` distinguishes "unchanged" from
/// "cleared".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Rupees>,
    pub stock: Option<i64>,
    pub mandi_price: Option<Option<Rupees>>,
    pub image_url: Option<Option<String>>,
}

impl ProductPatch {
    pub fn price(price: Rupees) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn stock(stock: i64) -> Self {
        Self {
            stock: Some(stock),
            ..Default::default()
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
