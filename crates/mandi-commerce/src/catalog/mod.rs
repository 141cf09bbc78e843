//! Product catalog: products, categories, client-side filtering.

mod filter;
mod product;

pub use filter::{filter_products, CategoryFilter};
pub use product::{Category, NewProduct, Product, ProductPatch};
